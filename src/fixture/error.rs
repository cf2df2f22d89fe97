//! Errors reported while converting a fixture
//!
//! Every failure carries the 0-based fixture line number and the offending
//! text, so the caller can locate the defect in the source file. The
//! transformation is pure and deterministic; there is nothing to retry.

use std::fmt;

/// Errors that can occur during fixture conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    /// A token that is neither a marker symbol nor a valid hex codepoint.
    MalformedToken { line: usize, token: String },
    /// A structural violation, e.g. a break-test line that does not begin
    /// with a boundary marker.
    MalformedLine { line: usize, text: String },
    /// The input contained no lines at all, so there is no header to derive
    /// case names from.
    EmptyFixture,
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::MalformedToken { line, token } => {
                write!(f, "Malformed token '{token}' on fixture line {line}")
            }
            FixtureError::MalformedLine { line, text } => {
                write!(f, "Malformed fixture line {line}: '{text}'")
            }
            FixtureError::EmptyFixture => {
                write!(f, "Fixture is empty: no header line to derive case names from")
            }
        }
    }
}

impl std::error::Error for FixtureError {}
