//! Positional access over the profiled containers.

//---------------------------------------------------------------------------------------------------- Import
use std::collections::LinkedList;

//---------------------------------------------------------------------------------------------------- Indexed
/// A container that can be read and written by position.
///
/// The point is to measure what _positional_ access costs for each
/// container, so [`LinkedList`] is walked node by node on every call
/// instead of being iterated.
pub trait Indexed {
    /// The element type.
    type Item;

    /// Amount of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    fn get_at(&self, index: usize) -> &Self::Item;

    /// Overwrite the element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    fn set_at(&mut self, index: usize, value: Self::Item);
}

/// A container that can grow at its end.
pub trait Push {
    /// The element type.
    type Item;

    /// Append `value` after the last element.
    fn push_item(&mut self, value: Self::Item);
}

#[cold]
#[inline(never)]
fn out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {index}")
}

//---------------------------------------------------------------------------------------------------- Array
impl<T, const N: usize> Indexed for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get_at(&self, index: usize) -> &T {
        &self[index]
    }

    fn set_at(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

//---------------------------------------------------------------------------------------------------- Vec
impl<T> Indexed for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get_at(&self, index: usize) -> &T {
        &self[index]
    }

    fn set_at(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T> Push for Vec<T> {
    type Item = T;

    fn push_item(&mut self, value: T) {
        self.push(value);
    }
}

//---------------------------------------------------------------------------------------------------- LinkedList
// Walks start from whichever end is closer to `index`.
impl<T> Indexed for LinkedList<T> {
    type Item = T;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get_at(&self, index: usize) -> &T {
        let len = Self::len(self);
        if index >= len {
            out_of_bounds(index, len);
        }

        let item = if index < len / 2 {
            self.iter().nth(index)
        } else {
            self.iter().rev().nth(len - 1 - index)
        };

        item.unwrap_or_else(|| out_of_bounds(index, len))
    }

    fn set_at(&mut self, index: usize, value: T) {
        let len = Self::len(self);
        if index >= len {
            out_of_bounds(index, len);
        }

        let item = if index < len / 2 {
            self.iter_mut().nth(index)
        } else {
            self.iter_mut().rev().nth(len - 1 - index)
        };

        match item {
            Some(item) => *item = value,
            None => out_of_bounds(index, len),
        }
    }
}

impl<T> Push for LinkedList<T> {
    type Item = T;

    fn push_item(&mut self, value: T) {
        self.push_back(value);
    }
}
