//! Profiler configuration.

//---------------------------------------------------------------------------------------------------- Import
use crate::{
    constants::{TRIALS, TRUNCATE},
    ConfigError,
};

//---------------------------------------------------------------------------------------------------- Config
/// How many trials to run and how many outliers to drop.
///
/// A [`Config`] can only be constructed with values that leave
/// at least one sample after trimming, so the trimmed mean
/// never averages an empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    /// Amount of timed executions per benchmark.
    trials: usize,
    /// Amount of sorted samples discarded from each end.
    truncate: usize,
}

impl Config {
    /// Create a new [`Config`] with the default [`TRIALS`] and [`TRUNCATE`].
    pub const fn new() -> Self {
        Self {
            trials: TRIALS,
            truncate: TRUNCATE,
        }
    }

    /// Create a custom [`Config`].
    ///
    /// # Errors
    /// - [`ConfigError::NoTrials`] if `trials` is `0`
    /// - [`ConfigError::TruncateTooLarge`] if `2 * truncate >= trials`
    pub const fn try_new(trials: usize, truncate: usize) -> Result<Self, ConfigError> {
        if trials == 0 {
            return Err(ConfigError::NoTrials);
        }

        match truncate.checked_mul(2) {
            Some(discarded) if discarded < trials => Ok(Self { trials, truncate }),
            _ => Err(ConfigError::TruncateTooLarge { trials, truncate }),
        }
    }

    /// Amount of timed executions per benchmark.
    pub const fn trials(self) -> usize {
        self.trials
    }

    /// Amount of sorted samples discarded from each end.
    pub const fn truncate(self) -> usize {
        self.truncate
    }

    /// Amount of samples the mean is computed over.
    ///
    /// This is always at least `1`.
    pub const fn kept(self) -> usize {
        self.trials - 2 * self.truncate
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
