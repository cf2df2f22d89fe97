//! JSON renderer
//!
//! Serializes the test-case records as a pretty-printed JSON array, for
//! consumers that load the corpus at runtime instead of generating source.

use crate::fixture::driver::TestCase;
use crate::fixture::formats::registry::{CaseFormatter, FormatError};

pub struct JsonFormatter;

impl CaseFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON array of test-case records"
    }

    fn render(&self, cases: &[TestCase]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(cases)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
