//! Main module for fixture conversion functionality
//!
//! Processing is a three-stage, line-at-a-time pipeline:
//!
//!   1. [`line`]: normalize a raw fixture line (strip comments, detect the
//!      leading boundary marker, extract the header base name)
//!   2. [`parser`]: tokenize the normalized line and run the single-pass
//!      boundary-index builder, producing a [`ParsedCase`]
//!   3. [`driver`]: orchestrate the run, assign names via [`namer`], and
//!      collect the ordered [`TestCase`] sequence
//!
//! Rendering the collected cases into a concrete output syntax is handled by
//! the pluggable formatters in [`formats`].

pub mod driver;
pub mod error;
pub mod formats;
pub mod line;
pub mod literal;
pub mod namer;
pub mod parser;
pub mod testing;
pub mod token;

pub use driver::{parse_fixture, TestCase};
pub use error::FixtureError;
pub use formats::{CaseFormatter, FormatError, FormatRegistry};
pub use line::{normalize_line, NormalizedLine};
pub use literal::{EscapeStyle, GoEscapes, RustEscapes};
pub use namer::CaseNamer;
pub use parser::{parse_case, ParsedCase};
pub use token::{classify_token, Token, BOUNDARY_MARKER, JOINER_MARKER};
