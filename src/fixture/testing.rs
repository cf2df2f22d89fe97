//! Testing utilities for fixture conversion
//!
//! Tests against this crate must use the verified sample below rather than
//! ad-hoc fixture strings. The break-test format is easy to get subtly wrong
//! (comment placement, the leading marker, tab-separated trailing comments),
//! and a test tuned against an illegal line verifies nothing. The sample
//! mirrors the published `GraphemeBreakTest.txt` layout, trailing rule
//! comments included, so it exercises the exact line shapes the real fixture
//! contains.

/// A faithful excerpt of `GraphemeBreakTest.txt`: header block, comment and
/// blank lines, and break-test lines with their trailing rule comments.
pub const SAMPLE_FIXTURE: &str = r##"# GraphemeBreakTest-16.0.0.txt
# Date: 2024-04-30, 21:48:40 GMT
# © 2024 Unicode®, Inc.
#
# Default Grapheme_Cluster_Break Test
#
# Format:
# <source> := <comment> | <test>
#
÷ 0020 ÷ 0020 ÷	#  ÷ [0.2] SPACE (Other) ÷ [999.0] SPACE (Other) ÷ [0.3]
÷ 0020 × 0308 ÷ 0020 ÷	#  ÷ [0.2] SPACE (Other) × [9.0] COMBINING DIAERESIS (Extend) ÷ [999.0] SPACE (Other) ÷ [0.3]
÷ 0020 ÷ 000D ÷	#  ÷ [0.2] SPACE (Other) ÷ [5.0] <CARRIAGE RETURN (CR)> (CR) ÷ [0.3]
÷ 000D × 000A ÷	#  ÷ [0.2] <CARRIAGE RETURN (CR)> (CR) × [3.0] <LINE FEED (LF)> (LF) ÷ [0.3]
÷ 0061 × 0301 ÷	#  ÷ [0.2] LATIN SMALL LETTER A (Other) × [9.0] COMBINING ACUTE ACCENT (Extend) ÷ [0.3]
÷ 1F1E6 × 1F1E7 ÷ 1F1E8 ÷	#  ÷ [0.2] REGIONAL INDICATOR SYMBOL LETTER A (RI) × [12.0] REGIONAL INDICATOR SYMBOL LETTER B (RI) ÷ [999.0] REGIONAL INDICATOR SYMBOL LETTER C (RI) ÷ [0.3]
÷ 0600 × 0020 ÷	#  ÷ [0.2] ARABIC NUMBER SIGN (Prepend) × [9.2] SPACE (Other) ÷ [0.3]
÷ 1F476 × 1F3FF ÷ 1F476 ÷	#  ÷ [0.2] BABY (ExtPict) × [9.0] EMOJI MODIFIER FITZPATRICK TYPE-6 (Extend) ÷ [999.0] BABY (ExtPict) ÷ [0.3]
#
# Lines: 8
#
# EOF
"##;

/// Number of break-test lines in [`SAMPLE_FIXTURE`].
pub const SAMPLE_CASE_COUNT: usize = 8;

/// The sample fixture split into lines, the shape [`parse_fixture`] accepts.
///
/// [`parse_fixture`]: crate::fixture::driver::parse_fixture
pub fn sample_fixture() -> impl Iterator<Item = &'static str> {
    SAMPLE_FIXTURE.lines()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        assert!(SAMPLE_FIXTURE.starts_with("# GraphemeBreakTest"));
        let content_lines = sample_fixture()
            .filter(|l| l.trim_start().starts_with('÷'))
            .count();
        assert_eq!(content_lines, SAMPLE_CASE_COUNT);
    }
}
