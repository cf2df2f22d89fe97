//! Run Driver
//!
//! Thin orchestration over the pipeline stages: feeds raw lines through the
//! normalizer, runs the boundary-index builder on each break-test line, and
//! names the results in fixture order. The output sequence order is exactly
//! fixture line order; names encode a sequential counter, so downstream
//! consumers can diff corpus regenerations line by line.
//!
//! Error policy: the first malformed line or token aborts the whole run.
//! The transformation is deterministic, so a partial corpus would only hide
//! a fixture defect that every regeneration reproduces.

use serde::Serialize;
use tracing::{debug, info};

use crate::fixture::error::FixtureError;
use crate::fixture::line::{normalize_line, NormalizedLine};
use crate::fixture::literal::EscapeStyle;
use crate::fixture::namer::CaseNamer;
use crate::fixture::parser::parse_case;

/// One named, renderable break test.
///
/// Field names mirror the record shape consumed by the renderers: `input` is
/// the flattened escape literal, `expect` the cluster index ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub name: String,
    pub input: String,
    pub expect: Vec<[usize; 2]>,
}

/// Convert a whole fixture into an ordered sequence of test cases.
///
/// `lines` is the already-decoded fixture body, line by line; the first line
/// must be the fixture header. Fetching and decoding are the caller's
/// concern.
pub fn parse_fixture<I, S>(lines: I, escapes: &dyn EscapeStyle) -> Result<Vec<TestCase>, FixtureError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut namer: Option<CaseNamer> = None;
    let mut cases = Vec::new();

    for (line_no, raw) in lines.into_iter().enumerate() {
        let raw = raw.as_ref();
        match normalize_line(raw, line_no == 0) {
            NormalizedLine::Header(base_name) => {
                debug!(%base_name, "fixture header");
                namer = Some(CaseNamer::new(base_name));
            }
            NormalizedLine::Skip => {}
            NormalizedLine::Content { tokens, new_case } => {
                // Every break-test line in this fixture format starts with a
                // boundary marker once comments and whitespace are gone.
                if !new_case {
                    return Err(FixtureError::MalformedLine {
                        line: line_no,
                        text: raw.to_string(),
                    });
                }
                let namer = namer.as_mut().ok_or(FixtureError::EmptyFixture)?;
                let parsed = parse_case(&tokens, line_no, escapes)?;
                cases.push(TestCase {
                    name: namer.next_name(),
                    input: parsed.input_literal,
                    expect: parsed.cluster_ranges,
                });
            }
        }
    }

    if namer.is_none() {
        return Err(FixtureError::EmptyFixture);
    }

    info!(cases = cases.len(), "fixture converted");
    Ok(cases)
}
