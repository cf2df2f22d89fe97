//! Rust test-function renderer
//!
//! Emits a `CASES` table plus one `#[test]` function looping over it. The
//! generated code calls a free function `grapheme_cluster_ranges(&str) ->
//! Vec<[usize; 2]>` that the crate under test must supply; the corpus only
//! states the expected answers. Build the cases with rust escapes so the
//! embedded string literals compile.

use std::fmt::Write;

use crate::fixture::driver::TestCase;
use crate::fixture::formats::registry::{CaseFormatter, FormatError};

pub struct RustTestFormatter;

impl CaseFormatter for RustTestFormatter {
    fn name(&self) -> &str {
        "rust-test"
    }

    fn description(&self) -> &str {
        "Table-driven Rust test function (expects rust escapes)"
    }

    fn render(&self, cases: &[TestCase]) -> Result<String, FormatError> {
        let mut out = String::new();

        out.push_str("// Generated from GraphemeBreakTest.txt; do not edit by hand.\n");
        out.push_str("// The crate under test supplies `grapheme_cluster_ranges`.\n\n");
        out.push_str("const CASES: &[(&str, &str, &[[usize; 2]])] = &[\n");

        for case in cases {
            writeln!(
                out,
                "    ({:?}, \"{}\", &{}),",
                case.name,
                case.input,
                range_array(&case.expect)
            )
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        }

        out.push_str("];\n\n");
        out.push_str("#[test]\n");
        out.push_str("fn grapheme_cluster_break() {\n");
        out.push_str("    for (name, input, expect) in CASES {\n");
        out.push_str("        let actual = grapheme_cluster_ranges(input);\n");
        out.push_str("        assert_eq!(&actual[..], *expect, \"{name}\");\n");
        out.push_str("    }\n");
        out.push_str("}\n");

        Ok(out)
    }
}

/// Render cluster ranges as a Rust array literal, e.g. `[[0, 1], [1, 3]]`.
fn range_array(ranges: &[[usize; 2]]) -> String {
    let rows: Vec<String> = ranges
        .iter()
        .map(|[start, end]| format!("[{start}, {end}]"))
        .collect();
    format!("[{}]", rows.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_array_literals() {
        assert_eq!(range_array(&[[0, 1], [1, 3]]), "[[0, 1], [1, 3]]");
        assert_eq!(range_array(&[]), "[]");
    }

    #[test]
    fn test_rendered_table_shape() {
        let cases = vec![TestCase {
            name: "GraphemeBreakTest #001".to_string(),
            input: "\\u{0041}".to_string(),
            expect: vec![[0, 1]],
        }];
        let out = RustTestFormatter.render(&cases).expect("renders");

        assert!(out.contains("const CASES: &[(&str, &str, &[[usize; 2]])] = &[\n"));
        assert!(out.contains("    (\"GraphemeBreakTest #001\", \"\\u{0041}\", &[[0, 1]]),"));
        assert!(out.contains("fn grapheme_cluster_break()"));
    }
}
