//! YAML renderer

use crate::fixture::driver::TestCase;
use crate::fixture::formats::registry::{CaseFormatter, FormatError};

pub struct YamlFormatter;

impl CaseFormatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "YAML sequence of test-case records"
    }

    fn render(&self, cases: &[TestCase]) -> Result<String, FormatError> {
        serde_yaml::to_string(cases).map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
