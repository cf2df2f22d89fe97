//! # breaktest
//!
//! A converter for Unicode grapheme break-test fixtures.
//!
//! The Unicode consortium publishes `GraphemeBreakTest.txt`, a plain-text
//! conformance fixture in which every line describes one break test: a
//! sequence of codepoints interleaved with markers saying where a grapheme
//! cluster boundary is (`÷`) or is not (`×`) permitted. This crate reshapes
//! that fixture into structured, named test cases (one record per line,
//! carrying the flattened codepoint literal and the half-open cluster index
//! ranges) and renders the records through pluggable output formats.
//!
//! The crate does not fetch the fixture (download it yourself, e.g. with
//! `curl`) and does not judge any segmentation implementation; it only
//! reshapes the published test data.
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](fixture::testing).
//! Parser tests must use the verified embedded fixture sample rather than
//! ad-hoc fixture strings.

pub mod fixture;
