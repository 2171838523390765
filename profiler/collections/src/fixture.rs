//! Pre-populated containers.

//---------------------------------------------------------------------------------------------------- Import
use std::collections::LinkedList;

use crate::constants::FIXTURE_VALUE;

//---------------------------------------------------------------------------------------------------- Fixtures
/// Element type of every fixture.
pub type Element = &'static str;

/// The three containers under test, each holding the same `N` elements.
///
/// These are long-lived: the read and write benchmarks operate on them
/// directly, the append benchmarks only ever clone them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixtures<const N: usize> {
    /// Fixed-size array.
    ///
    /// Boxed so large `N` does not live on the stack.
    pub(crate) array: Box<[Element; N]>,
    /// Growable array.
    pub(crate) vec: Vec<Element>,
    /// Doubly-linked list.
    pub(crate) list: LinkedList<Element>,
}

impl<const N: usize> Fixtures<N> {
    /// Create all three fixtures, filled with `N` copies of `value`.
    pub fn new(value: Element) -> Self {
        let array = Box::new([value; N]);
        let vec = array.to_vec();
        let list = array.iter().copied().collect();

        Self { array, vec, list }
    }

    /// The fixed-size array fixture.
    pub fn array(&self) -> &[Element; N] {
        &self.array
    }

    /// The [`Vec`] fixture.
    pub fn vec(&self) -> &[Element] {
        &self.vec
    }

    /// The [`LinkedList`] fixture.
    pub const fn list(&self) -> &LinkedList<Element> {
        &self.list
    }

    /// Element counts of `[array, vec, list]`.
    pub fn lens(&self) -> [usize; 3] {
        [self.array.len(), self.vec.len(), self.list.len()]
    }

    /// Returns `true` if every element of every fixture equals `value`.
    pub fn contains_only(&self, value: Element) -> bool {
        self.array
            .iter()
            .chain(&self.vec)
            .chain(&self.list)
            .all(|e| *e == value)
    }
}

impl<const N: usize> Default for Fixtures<N> {
    /// Fixtures filled with [`FIXTURE_VALUE`].
    fn default() -> Self {
        Self::new(FIXTURE_VALUE)
    }
}
