//! Timing and reporting of units of work.

//---------------------------------------------------------------------------------------------------- Import
use std::{
    borrow::Cow,
    io::{Stdout, Write},
    time::Instant,
};

use tracing::{debug, trace};

use crate::{Config, ConfigError, Error, Report, Samples};

//---------------------------------------------------------------------------------------------------- Profiler
/// Runs units of work and writes one [`Report`] line per unit of work.
///
/// The output sink is generic so the exact lines can be
/// captured, the binary uses [`Profiler::stdout`].
#[derive(Debug)]
pub struct Profiler<W = Stdout> {
    /// Trial and truncation settings.
    config: Config,
    /// Where report lines are written.
    out: W,
}

impl Profiler<Stdout> {
    /// Create a [`Profiler`] that reports to standard output.
    pub fn stdout(config: Config) -> Self {
        Self::new(config, std::io::stdout())
    }
}

impl<W: Write> Profiler<W> {
    /// Create a [`Profiler`] that reports to `out`.
    pub const fn new(config: Config, out: W) -> Self {
        Self { config, out }
    }

    /// The [`Config`] this profiler runs with.
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Borrow the output sink.
    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the profiler, returning the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Execute `block` once per trial, timing each execution on its own.
    ///
    /// Nothing else happens between `Instant::now()` and
    /// `elapsed()`, so only the unit of work is measured.
    pub fn measure<F: FnMut()>(&self, mut block: F) -> Samples {
        let trials = self.config.trials();
        let mut samples = Samples::with_capacity(trials);

        for trial in 0..trials {
            let now = Instant::now();
            block();
            let elapsed = now.elapsed();

            trace!(trial, ?elapsed);
            samples.push(elapsed);
        }

        samples
    }

    /// Profile `block` under `title`.
    ///
    /// This runs [`Self::measure`], computes the trimmed mean of the
    /// samples and writes `<title>: <value> micro sec` to the sink.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the report line could not be written.
    ///
    /// [`Error::Config`] is only possible if the samples do not match
    /// the [`Config`], which cannot happen for a validated [`Config`].
    pub fn profile<F: FnMut()>(
        &mut self,
        title: impl Into<Cow<'static, str>>,
        block: F,
    ) -> Result<Report, Error> {
        let title = title.into();
        let (trials, truncate) = (self.config.trials(), self.config.truncate());

        let samples = self.measure(block);
        let mean = samples
            .trimmed_mean(truncate)
            .ok_or(ConfigError::TruncateTooLarge { trials, truncate })?;

        let report = Report::new(title, mean);
        debug!(
            title = report.title(),
            trials,
            kept = self.config.kept(),
            ?mean,
            "profiled"
        );

        writeln!(self.out, "{report}")?;
        self.out.flush()?;

        Ok(report)
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    fn profiler(trials: usize, truncate: usize) -> Profiler<Vec<u8>> {
        Profiler::new(Config::try_new(trials, truncate).unwrap(), Vec::new())
    }

    #[test]
    fn runs_every_trial() {
        let profiler = profiler(10, 2);

        let mut calls = 0_usize;
        let samples = profiler.measure(|| calls += 1);

        assert_eq!(calls, 10);
        assert_eq!(samples.len(), 10);
    }

    #[test]
    fn writes_one_line() {
        let mut profiler = profiler(5, 1);

        let report = profiler.profile("noop", || {}).unwrap();
        assert_eq!(report.title(), "noop");

        let output = String::from_utf8(profiler.into_inner()).unwrap();
        assert_eq!(output, format!("noop: {} micro sec\n", report.micros()));
    }

    #[test]
    fn lines_in_call_order() {
        let mut profiler = profiler(3, 1);

        for title in ["a", "b", "c"] {
            profiler.profile(title, || {}).unwrap();
        }

        let output = String::from_utf8(profiler.get_ref().clone()).unwrap();
        let titles = output
            .lines()
            .map(|line| line.split_once(": ").unwrap().0)
            .collect::<Vec<_>>();

        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[test]
    fn mean_reflects_work() {
        let mut profiler = profiler(5, 1);

        let report = profiler
            .profile("sleep", || std::thread::sleep(Duration::from_millis(1)))
            .unwrap();

        // Every trial sleeps for at least 1ms, so must the mean.
        assert!(report.mean() >= Duration::from_millis(1));
        assert!(report.micros() >= 1_000);
    }

    #[test]
    #[should_panic(expected = "fault")]
    fn fault_aborts() {
        let mut profiler = profiler(5, 1);
        profiler.profile("fault", || panic!("fault")).unwrap();
    }
}
