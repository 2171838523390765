//! The result of profiling one benchmark.

//---------------------------------------------------------------------------------------------------- Import
use std::{borrow::Cow, fmt, time::Duration};

//---------------------------------------------------------------------------------------------------- Report
/// A benchmark title and its trimmed-mean duration.
///
/// The [`Display`](fmt::Display) implementation is the line
/// printed for each benchmark:
///
/// ```text
/// <title>: <microseconds> micro sec
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Report {
    /// Human readable benchmark name.
    title: Cow<'static, str>,
    /// Trimmed mean of all trials.
    mean: Duration,
}

impl Report {
    /// Create a new [`Report`].
    pub fn new(title: impl Into<Cow<'static, str>>, mean: Duration) -> Self {
        Self {
            title: title.into(),
            mean,
        }
    }

    /// The benchmark's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The trimmed mean duration of one trial.
    pub const fn mean(&self) -> Duration {
        self.mean
    }

    /// [`Self::mean`] in whole microseconds, truncated.
    pub const fn micros(&self) -> u128 {
        self.mean.as_micros()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} micro sec", self.title, self.micros())
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display() {
        let report = Report::new("Vec<&str>.apply", Duration::from_nanos(2_500_999));
        assert_eq!(report.title(), "Vec<&str>.apply");
        assert_eq!(report.micros(), 2_500);
        assert_eq!(report.to_string(), "Vec<&str>.apply: 2500 micro sec");
    }

    #[test]
    fn sub_microsecond() {
        let report = Report::new(String::from("x"), Duration::from_nanos(999));
        assert_eq!(report.to_string(), "x: 0 micro sec");
    }
}
