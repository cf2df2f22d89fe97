//! Boundary-Index Builder
//!
//! Second stage of the pipeline and the core of the crate: a single pass over
//! the tokens of one normalized line that simultaneously flattens the
//! codepoint tokens into an escaped string literal and reconstructs the
//! half-open `[start, end)` index range of every grapheme cluster.
//!
//! Running state across the pass:
//!   - the count of codepoints emitted so far (each boundary closes the
//!     current cluster at exactly this index)
//!   - the start index of the cluster currently being accumulated
//!   - the literal and range accumulators
//!
//! Only a boundary token closes a cluster. The leading boundary marker was
//! already consumed by the normalizer (it flags a new case, nothing more),
//! while the trailing one is still present in the token stream and closes the
//! final cluster. A line that lacks its trailing marker therefore leaves the
//! last cluster open, and the open range is dropped; this matches the
//! fixture's own convention that every break-test line ends in `÷`.

use crate::fixture::error::FixtureError;
use crate::fixture::literal::{format_codepoint, EscapeStyle};
use crate::fixture::token::{classify_token, Token};

/// The structured result of parsing one break-test line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCase {
    /// The flattened codepoint escape literals, in fixture order, with all
    /// marker tokens removed.
    pub input_literal: String,
    /// `[start, end)` pairs over the codepoint index space of
    /// `input_literal`, one per grapheme cluster, left to right. Together
    /// they partition `[0, codepoints)`.
    pub cluster_ranges: Vec<[usize; 2]>,
    /// Number of codepoint tokens consumed, i.e. the length of the index
    /// space the ranges cover.
    pub codepoints: usize,
}

/// Run the single-pass boundary-index builder over one normalized line.
///
/// `tokens` is the cleaned token string from the normalizer (leading boundary
/// marker already removed); `line` is the 0-based fixture line number used in
/// error reports.
///
/// A marker-only line produces an empty literal and a single degenerate
/// `[0, 0)` range; degenerate ranges are emitted rather than suppressed so
/// that a boundary token always has exactly one observable effect.
pub fn parse_case(
    tokens: &str,
    line: usize,
    escapes: &dyn EscapeStyle,
) -> Result<ParsedCase, FixtureError> {
    let mut emitted = 0usize;
    let mut range_start = 0usize;
    let mut cluster_ranges = Vec::new();
    let mut input_literal = String::new();

    for raw in tokens.split_whitespace() {
        match classify_token(raw) {
            Some(Token::Codepoint(hex)) => {
                emitted += 1;
                input_literal.push_str(&format_codepoint(escapes, hex));
            }
            Some(Token::Joiner) => {
                // Inert: a joiner only withholds the boundary close that
                // would otherwise separate its neighbours.
            }
            Some(Token::Boundary) => {
                cluster_ranges.push([range_start, emitted]);
                range_start = emitted;
            }
            None => {
                return Err(FixtureError::MalformedToken {
                    line,
                    token: raw.to_string(),
                });
            }
        }
    }

    Ok(ParsedCase {
        input_literal,
        cluster_ranges,
        codepoints: emitted,
    })
}
