//! Default profiling constants.

/// How many times each unit of work is executed.
pub const TRIALS: usize = 100;

/// How many sorted samples are discarded from _each_ end before averaging.
///
/// This drops the fastest and the slowest fifth of all trials,
/// which is where warm-up and scheduler noise ends up.
pub const TRUNCATE: usize = TRIALS / 5;

const _: () = assert!(TRIALS > 0 && TRUNCATE * 2 < TRIALS);
