//! Output format implementations for test-case rendering
//!
//! This module contains the renderer side of the crate: each format turns the
//! ordered [`TestCase`](crate::fixture::driver::TestCase) sequence into final
//! output text. The core's contract ends at the structured records; anything
//! framework specific lives here, behind the pluggable
//! [`CaseFormatter`](registry::CaseFormatter) trait.

pub mod json;
pub mod registry;
pub mod rust_test;
pub mod yaml;

pub use go_test::GoTestFormatter;
pub use json::JsonFormatter;
pub use registry::{CaseFormatter, FormatError, FormatRegistry};
pub use rust_test::RustTestFormatter;
pub use yaml::YamlFormatter;
