//! Case Namer
//!
//! Assigns each parsed line a unique, human-readable name of the form
//! `"<base> #NNN"`. The counter is owned by whoever drives a run (see
//! [`driver`](crate::fixture::driver)), never module state, so independent
//! runs cannot observe each other.

/// Sequential name generator for one parsing run.
///
/// `base_name` comes from the fixture header; the counter starts at zero and
/// increments once per named case.
#[derive(Debug, Clone)]
pub struct CaseNamer {
    base_name: String,
    counter: u32,
}

impl CaseNamer {
    pub fn new(base_name: impl Into<String>) -> Self {
        CaseNamer {
            base_name: base_name.into(),
            counter: 0,
        }
    }

    /// The header-derived base name shared by all cases in this run.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Produce the next case name, zero-padded to three digits.
    pub fn next_name(&mut self) -> String {
        self.counter += 1;
        format!("{} #{:03}", self.base_name, self.counter)
    }
}
