//! The workload suite.

//---------------------------------------------------------------------------------------------------- Import
use std::{hint::black_box, io::Write};

use strum::{EnumCount, VariantArray};
use tracing::{info, instrument};

use profiler_lib::{Error, Profiler, Report};

use crate::{
    constants::FIELD_VALUE,
    fixture::{Element, Fixtures},
    indexed::{Indexed, Push},
    Benchmarks,
};

//---------------------------------------------------------------------------------------------------- Suite
/// Owns the fixtures and hands every [`Benchmarks`] to a [`Profiler`].
///
/// `N` is both the fixture size and the amount of element
/// accesses per trial, the default binary uses
/// [`REPEAT`](crate::constants::REPEAT).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suite<const N: usize> {
    /// Long-lived containers.
    fixtures: Fixtures<N>,
    /// Value written by the write and append benchmarks.
    field: Element,
}

impl<const N: usize> Suite<N> {
    /// Create a [`Suite`] with default [`Fixtures`] and [`FIELD_VALUE`].
    pub fn new() -> Self {
        Self {
            fixtures: Fixtures::default(),
            field: FIELD_VALUE,
        }
    }

    /// The long-lived fixtures.
    pub const fn fixtures(&self) -> &Fixtures<N> {
        &self.fixtures
    }

    /// Profile every benchmark in [`Benchmarks::VARIANTS`] order.
    ///
    /// Each benchmark writes its report line as soon as it finishes.
    ///
    /// # Errors
    /// Stops at, and returns, the first [`Error`].
    #[instrument(skip_all, fields(repeat = N))]
    pub fn run<W: Write>(&mut self, profiler: &mut Profiler<W>) -> Result<Vec<Report>, Error> {
        info!(
            benchmarks = Benchmarks::COUNT,
            trials = profiler.config().trials(),
            "starting"
        );

        let reports = Benchmarks::VARIANTS
            .iter()
            .map(|benchmark| self.run_one(*benchmark, profiler))
            .collect::<Result<Vec<_>, _>>()?;

        info!("finished");
        Ok(reports)
    }

    /// Profile a single benchmark.
    ///
    /// # Errors
    /// Forwards the [`Error`] from [`Profiler::profile`].
    pub fn run_one<W: Write>(
        &mut self,
        benchmark: Benchmarks,
        profiler: &mut Profiler<W>,
    ) -> Result<Report, Error> {
        let title = benchmark.title();
        let field = self.field;
        let Fixtures { array, vec, list } = &mut self.fixtures;

        match benchmark {
            Benchmarks::ArrayRead => profiler.profile(title, || read::<_, N>(&**array)),
            Benchmarks::VecRead => profiler.profile(title, || read::<_, N>(&*vec)),
            Benchmarks::ListRead => profiler.profile(title, || read::<_, N>(&*list)),
            Benchmarks::ArrayWrite => {
                profiler.profile(title, || write::<_, N>(&mut **array, field))
            }
            Benchmarks::VecWrite => profiler.profile(title, || write::<_, N>(&mut *vec, field)),
            Benchmarks::ListWrite => profiler.profile(title, || write::<_, N>(&mut *list, field)),
            Benchmarks::VecAppend => profiler.profile(title, || append::<_, N>(&*vec, field)),
            Benchmarks::ListAppend => profiler.profile(title, || append::<_, N>(&*list, field)),
        }
    }
}

impl<const N: usize> Default for Suite<N> {
    fn default() -> Self {
        Self::new()
    }
}

//---------------------------------------------------------------------------------------------------- Units of work
/// Read index `0..N` of `container`.
///
/// Every element goes through [`black_box`]
/// so the reads cannot be optimized out.
fn read<C: Indexed<Item = Element>, const N: usize>(container: &C) {
    for i in 0..N {
        black_box(container.get_at(i));
    }
}

/// Write `field` into index `0..N` of `container`.
fn write<C: Indexed<Item = Element>, const N: usize>(container: &mut C, field: Element) {
    for i in 0..N {
        container.set_at(i, black_box(field));
    }
    black_box(container);
}

/// Clone `fixture`, then push `N` copies of `field` onto the clone.
///
/// The clone is part of the measurement.
fn append<C: Push<Item = Element> + Clone, const N: usize>(fixture: &C, field: Element) {
    let mut copy = fixture.clone();
    for _ in 0..N {
        copy.push_item(black_box(field));
    }
    black_box(copy);
}
