//! The benchmark catalogue.

//---------------------------------------------------------------------------------------------------- Import
use strum::{Display, EnumCount, EnumIter, IntoStaticStr, VariantArray};

//---------------------------------------------------------------------------------------------------- Benchmarks
/// Every benchmark [`Suite`](crate::Suite) runs, in the order it runs them.
///
/// The [`Display`] and `&'static str` forms are
/// the titles printed in each report line.
///
/// `apply` is an indexed read, `update` an indexed write.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Debug,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    IntoStaticStr,
    VariantArray,
)]
pub enum Benchmarks {
    /// Read every index of the array.
    #[strum(to_string = "[&str].apply")]
    ArrayRead,
    /// Read every index of the [`Vec`].
    #[strum(to_string = "Vec<&str>.apply")]
    VecRead,
    /// Read every index of the [`LinkedList`](std::collections::LinkedList).
    #[strum(to_string = "LinkedList<&str>.apply")]
    ListRead,

    /// Write every index of the array.
    #[strum(to_string = "[&str].update")]
    ArrayWrite,
    /// Write every index of the [`Vec`].
    #[strum(to_string = "Vec<&str>.update")]
    VecWrite,
    /// Write every index of the [`LinkedList`](std::collections::LinkedList).
    #[strum(to_string = "LinkedList<&str>.update")]
    ListWrite,

    /// Clone the [`Vec`], then push `N` elements.
    #[strum(to_string = "Vec<&str>.append")]
    VecAppend,
    /// Clone the [`LinkedList`](std::collections::LinkedList), then push `N` elements.
    #[strum(to_string = "LinkedList<&str>.append")]
    ListAppend,
}

impl Benchmarks {
    /// The title printed for this benchmark.
    pub fn title(self) -> &'static str {
        self.into()
    }

    /// Returns `true` for the benchmarks that time a full fixture
    /// clone per trial instead of touching the long-lived fixtures.
    pub const fn is_append(self) -> bool {
        matches!(self, Self::VecAppend | Self::ListAppend)
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn titles() {
        let titles = Benchmarks::iter().map(Benchmarks::title).collect::<Vec<_>>();

        assert_eq!(
            titles,
            [
                "[&str].apply",
                "Vec<&str>.apply",
                "LinkedList<&str>.apply",
                "[&str].update",
                "Vec<&str>.update",
                "LinkedList<&str>.update",
                "Vec<&str>.append",
                "LinkedList<&str>.append",
            ]
        );
    }

    #[test]
    fn display_is_title() {
        for b in Benchmarks::VARIANTS {
            assert_eq!(b.to_string(), b.title());
        }
    }

    #[test]
    fn unique() {
        assert_eq!(Benchmarks::COUNT, 8);
        assert_eq!(Benchmarks::VARIANTS.len(), Benchmarks::COUNT);

        let set = Benchmarks::iter().map(Benchmarks::title).collect::<HashSet<_>>();
        assert_eq!(set.len(), Benchmarks::COUNT);
    }

    #[test]
    fn append_only_for_growable() {
        let append = Benchmarks::iter()
            .filter(|b| b.is_append())
            .collect::<Vec<_>>();

        assert_eq!(append, [Benchmarks::VecAppend, Benchmarks::ListAppend]);
    }
}
