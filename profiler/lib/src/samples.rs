//! Per-benchmark sample sets.

//---------------------------------------------------------------------------------------------------- Import
use std::time::Duration;

//---------------------------------------------------------------------------------------------------- Samples
/// Elapsed durations of every trial of a single benchmark.
///
/// A [`Samples`] is created fresh for each benchmark,
/// filled trial by trial, and then consumed once by
/// [`Samples::trimmed_mean`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Samples {
    /// Unsorted until [`Samples::trimmed_mean`].
    inner: Vec<Duration>,
}

impl Samples {
    /// Create an empty sample set with room for `trials` samples.
    pub fn with_capacity(trials: usize) -> Self {
        Self {
            inner: Vec::with_capacity(trials),
        }
    }

    /// Record the duration of one trial.
    pub fn push(&mut self, elapsed: Duration) {
        self.inner.push(elapsed);
    }

    /// Amount of recorded trials.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if no trial has been recorded.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Sort the samples, discard `truncate` from each end
    /// and return the mean of what remains.
    ///
    /// The mean is computed with integer nanosecond arithmetic
    /// and truncated, i.e. `sum(kept) / len(kept)`.
    ///
    /// Returns `None` if trimming leaves no samples.
    pub fn trimmed_mean(mut self, truncate: usize) -> Option<Duration> {
        let len = self.inner.len();
        if truncate.checked_mul(2)? >= len {
            return None;
        }

        self.inner.sort_unstable();
        let kept = &self.inner[truncate..len - truncate];

        let total: Duration = kept.iter().sum();
        let count = u32::try_from(kept.len()).ok()?;

        Some(total / count)
    }
}

impl FromIterator<Duration> for Samples {
    fn from_iter<I: IntoIterator<Item = Duration>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use proptest::{collection::vec, prelude::*};

    use super::*;

    fn nanos(samples: &[u64]) -> Samples {
        samples.iter().copied().map(Duration::from_nanos).collect()
    }

    #[test]
    fn middle_six_of_ten() {
        // Sorted: 10 20 [30 40 50 60 70 80] 900 5000
        let samples = nanos(&[900, 10, 80, 20, 5000, 30, 70, 40, 60, 50]);
        assert_eq!(samples.len(), 10);

        let mean = samples.trimmed_mean(2).unwrap();
        assert_eq!(mean, Duration::from_nanos((30 + 40 + 50 + 60 + 70 + 80) / 6));
        assert_eq!(mean, Duration::from_nanos(55));
    }

    #[test]
    fn mean_truncates() {
        // 2 + 3 + 4 + 5 = 14, 14 / 4 = 3.5
        let samples = nanos(&[7, 1, 2, 3, 4, 5]);
        assert_eq!(samples.trimmed_mean(1), Some(Duration::from_nanos(3)));
    }

    #[test]
    fn no_truncate() {
        let samples = nanos(&[3, 1, 2]);
        assert_eq!(samples.trimmed_mean(0), Some(Duration::from_nanos(2)));
    }

    #[test]
    fn nothing_left() {
        assert_eq!(Samples::default().trimmed_mean(0), None);
        assert!(Samples::with_capacity(8).is_empty());
        assert_eq!(nanos(&[1, 2, 3, 4]).trimmed_mean(2), None);
        assert_eq!(nanos(&[1, 2, 3, 4]).trimmed_mean(usize::MAX), None);
    }

    proptest! {
        #[test]
        fn trimmed_mean_is_exact(samples in vec(0_u64..10_000_000_000, 1..200), truncate in 0_usize..100) {
            let mut sorted = samples.clone();
            sorted.sort_unstable();

            let mean = nanos(&samples).trimmed_mean(truncate);

            if truncate * 2 >= samples.len() {
                prop_assert_eq!(mean, None);
            } else {
                let kept = &sorted[truncate..sorted.len() - truncate];
                let total: u128 = kept.iter().map(|n| u128::from(*n)).sum();
                let expected = total / kept.len() as u128;

                let mean = mean.unwrap();
                prop_assert_eq!(mean.as_nanos(), expected);
                prop_assert!(mean >= Duration::from_nanos(kept[0]));
                prop_assert!(mean <= Duration::from_nanos(kept[kept.len() - 1]));
            }
        }
    }
}
