//! Line Normalizer
//!
//! First stage of the pipeline: turns one raw fixture line into either a
//! header (first line only), nothing (blank or comment-only line), or a
//! cleaned token string ready for the boundary-index builder.

use crate::fixture::token::BOUNDARY_MARKER;

/// Result of normalizing one raw fixture line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedLine {
    /// The fixture's first line; carries the extracted base name used to
    /// build test-case names (e.g. `"GraphemeBreakTest"`).
    Header(String),
    /// Blank or comment-only line; produces no test case.
    Skip,
    /// A break-test line with its comment and leading boundary marker
    /// removed. `new_case` is true when the line began with a boundary
    /// marker, which starts a new test case.
    Content { tokens: String, new_case: bool },
}

/// Normalize one raw fixture line.
///
/// The first line is always the fixture header: the base name is the text
/// after its first `#`, trimmed, cut at the first `-`. The published fixture
/// titles itself `# GraphemeBreakTest-16.0.0.txt`, so the version suffix is
/// dropped and `GraphemeBreakTest` remains. A headerless first line keeps the
/// whole trimmed line as the base name.
///
/// Every other line is truncated at its first `#` (a `#` always starts a
/// comment; the fixture has no escaping) and trimmed. If the remainder starts
/// with the boundary marker, exactly that one marker is removed and
/// `new_case` is set; markers later in the line are data for the builder, not
/// case delimiters.
pub fn normalize_line(raw: &str, first_line: bool) -> NormalizedLine {
    if first_line {
        let after_hash = match raw.split_once('#') {
            Some((_, rest)) => rest,
            None => raw,
        };
        let base = match after_hash.trim().split_once('-') {
            Some((head, _)) => head,
            None => after_hash.trim(),
        };
        return NormalizedLine::Header(base.to_string());
    }

    let data = match raw.split_once('#') {
        Some((data, _comment)) => data,
        None => raw,
    };
    let data = data.trim();
    if data.is_empty() {
        return NormalizedLine::Skip;
    }

    match data.strip_prefix(BOUNDARY_MARKER) {
        Some(rest) => NormalizedLine::Content {
            tokens: rest.trim().to_string(),
            new_case: true,
        },
        None => NormalizedLine::Content {
            tokens: data.to_string(),
            new_case: false,
        },
    }
}
