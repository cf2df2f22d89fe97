//! Property-based tests for the boundary-index builder
//!
//! These generate arbitrary well-formed break-test lines (clusters of
//! codepoints separated by joiners, each cluster closed by a boundary
//! marker) and check the structural invariants the corpus promises to every
//! consumer, independent of the concrete codepoints involved.

use proptest::prelude::*;

use breaktest::fixture::{parse_case, FixtureError, GoEscapes};

/// A generated cluster: 1..=4 codepoints that will be joined with `×`.
fn cluster_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0x20u32..0x2FFFF, 1..=4)
}

/// A well-formed token line: clusters separated and terminated by `÷`,
/// codepoints inside a cluster separated by `×`. The leading marker is
/// omitted, as the normalizer strips it before the builder runs.
fn line_strategy() -> impl Strategy<Value = (String, Vec<Vec<u32>>)> {
    prop::collection::vec(cluster_strategy(), 1..=6).prop_map(|clusters| {
        let mut tokens = Vec::new();
        for cluster in &clusters {
            let hex: Vec<String> = cluster.iter().map(|cp| format!("{cp:04X}")).collect();
            tokens.push(hex.join(" × "));
            tokens.push("÷".to_string());
        }
        (tokens.join(" "), clusters)
    })
}

proptest! {
    #[test]
    fn ranges_partition_the_codepoint_space((line, clusters) in line_strategy()) {
        let case = parse_case(&line, 0, &GoEscapes).unwrap();
        let total: usize = clusters.iter().map(Vec::len).sum();

        prop_assert_eq!(case.codepoints, total);
        prop_assert_eq!(case.cluster_ranges.len(), clusters.len());
        prop_assert_eq!(case.cluster_ranges[0][0], 0);
        prop_assert_eq!(case.cluster_ranges.last().unwrap()[1], total);
        for window in case.cluster_ranges.windows(2) {
            prop_assert_eq!(window[0][1], window[1][0]);
        }
    }

    #[test]
    fn range_widths_match_generated_cluster_sizes((line, clusters) in line_strategy()) {
        let case = parse_case(&line, 0, &GoEscapes).unwrap();
        for (range, cluster) in case.cluster_ranges.iter().zip(&clusters) {
            prop_assert_eq!(range[1] - range[0], cluster.len());
        }
    }

    #[test]
    fn literal_uses_short_form_iff_four_hex_digits((line, clusters) in line_strategy()) {
        let case = parse_case(&line, 0, &GoEscapes).unwrap();
        let short = clusters.iter().flatten().filter(|cp| **cp <= 0xFFFF).count();
        let long = clusters.iter().flatten().filter(|cp| **cp > 0xFFFF).count();

        prop_assert_eq!(case.input_literal.matches("\\u").count(), short);
        prop_assert_eq!(case.input_literal.matches("\\U").count(), long);
        prop_assert_eq!(case.input_literal.len(), short * 6 + long * 10);
    }

    #[test]
    fn parsing_never_panics_on_arbitrary_marker_soup(
        line in "(÷|×|[0-9A-F]{4,5}| )*"
    ) {
        // May be malformed, must never panic or emit inverted ranges.
        if let Ok(case) = parse_case(&line, 0, &GoEscapes) {
            for [start, end] in &case.cluster_ranges {
                prop_assert!(start <= end);
            }
        }
    }

    #[test]
    fn garbage_tokens_are_rejected(token in "[G-Zg-z]{1,8}") {
        let line = format!("0041 × {token} ÷");
        let err = parse_case(&line, 9, &GoEscapes).unwrap_err();
        prop_assert_eq!(err, FixtureError::MalformedToken { line: 9, token });
    }
}
