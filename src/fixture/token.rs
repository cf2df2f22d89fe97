//! Fixture token classification
//!
//! A normalized fixture line is a whitespace-separated sequence of exactly
//! three token kinds: the boundary marker, the joiner marker, and hexadecimal
//! codepoint tokens. The marker symbols are defined once here; the rest of
//! the crate never compares against literal characters directly, so a fixture
//! revision that changes symbols only touches this module.

use once_cell::sync::Lazy;
use regex::Regex;

/// Marks a permitted break between two grapheme clusters.
pub const BOUNDARY_MARKER: &str = "÷";

/// Marks the absence of a break between two adjacent codepoints.
pub const JOINER_MARKER: &str = "×";

/// Codepoint tokens are 4 to 8 hex digits. The fixture uses uppercase hex,
/// but lowercase is accepted since the hex value is all that matters.
static CODEPOINT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[0-9A-Fa-f]{4,8}$").expect("codepoint token regex is valid"));

/// One token of a normalized fixture line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A grapheme-cluster edge (break allowed here).
    Boundary,
    /// No boundary between the surrounding codepoints.
    Joiner,
    /// A single Unicode scalar value, as the raw hex digits from the fixture.
    Codepoint(&'a str),
}

/// Classify a single whitespace-separated token.
///
/// Returns `None` for anything that is neither marker symbol nor a valid hex
/// codepoint token; callers must report such tokens, never skip them.
pub fn classify_token(token: &str) -> Option<Token<'_>> {
    if token == BOUNDARY_MARKER {
        Some(Token::Boundary)
    } else if token == JOINER_MARKER {
        Some(Token::Joiner)
    } else if CODEPOINT_TOKEN.is_match(token) {
        Some(Token::Codepoint(token))
    } else {
        None
    }
}
