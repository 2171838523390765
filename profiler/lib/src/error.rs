//! Profiler error types.

//---------------------------------------------------------------------------------------------------- ConfigError
/// A trial/truncate combination that cannot produce an average.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// There must be at least one trial.
    #[error("trial count must be greater than zero")]
    NoTrials,

    /// Discarding `truncate` samples from each end
    /// of `trials` samples leaves no samples behind.
    #[error("discarding {truncate} samples from each end of {trials} trials leaves nothing to average")]
    TruncateTooLarge {
        /// Configured trial count.
        trials: usize,
        /// Configured amount of samples discarded per end.
        truncate: usize,
    },
}

//---------------------------------------------------------------------------------------------------- Error
/// Errors returned by [`Profiler::profile`](crate::Profiler::profile).
///
/// # Handling
/// Neither of these can be recovered from in a meaningful
/// way, the correct thing to do is to stop the whole run
/// instead of printing a partial set of results.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The sample set could not be averaged.
    #[error("invalid profiler config: {0}")]
    Config(#[from] ConfigError),

    /// The report line could not be written.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
