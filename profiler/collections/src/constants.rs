//! Workload constants.

/// Amount of elements in every fixture,
/// and amount of accesses per trial.
pub const REPEAT: usize = 10_000;

/// The value every fixture is filled with.
pub const FIXTURE_VALUE: &str = "foo";

/// The value written (and appended) by the write and append benchmarks.
pub const FIELD_VALUE: &str = "bar";
