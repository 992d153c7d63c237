//! Candidate heights for a single cell.
//!
//! This module provides [`HeightSet`], a fixed-width bitset over building heights
//! `1..=32`. Bit `h - 1` is set when height `h` is still possible.
//!
//! # Examples
//!
//! ```
//! use skyline_core::HeightSet;
//!
//! let mut set = HeightSet::full(4);
//! set.remove(2);
//! set.remove(3);
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(4));
//! assert_eq!(set.to_string(), "14");
//! ```

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

/// The largest grid size representable by a [`HeightSet`].
pub const MAX_SIZE: usize = 32;

/// A set of building heights, represented as a 32-bit bitset.
///
/// Heights are `1..=MAX_SIZE`. Every operation is O(1).
///
/// # Set Operations
///
/// ```
/// use skyline_core::HeightSet;
///
/// let a = HeightSet::from_iter([1, 2, 3]);
/// let b = HeightSet::from_iter([2, 3, 4]);
///
/// assert_eq!(a | b, HeightSet::from_iter([1, 2, 3, 4]));
/// assert_eq!(a & b, HeightSet::from_iter([2, 3]));
/// assert_eq!(a.difference(b), HeightSet::from_elem(1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HeightSet {
    bits: u32,
}

impl HeightSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty set.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns the set `1..=size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds [`MAX_SIZE`].
    #[must_use]
    #[inline]
    pub const fn full(size: usize) -> Self {
        assert!(
            size <= MAX_SIZE,
            "grid size exceeds the height set capacity"
        );
        if size == 0 {
            Self::EMPTY
        } else {
            Self {
                bits: u32::MAX >> (MAX_SIZE - size),
            }
        }
    }

    /// Returns a set containing only `height`.
    ///
    /// # Panics
    ///
    /// Panics if `height` is not in `1..=MAX_SIZE`.
    #[must_use]
    #[inline]
    pub fn from_elem(height: u8) -> Self {
        Self {
            bits: Self::bit(height),
        }
    }

    /// Returns the raw bit representation.
    #[must_use]
    #[inline]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    #[inline]
    fn bit(height: u8) -> u32 {
        assert!(
            (1..=MAX_SIZE).contains(&usize::from(height)),
            "Height must be between 1 and {MAX_SIZE}, got {height}"
        );
        1 << (height - 1)
    }

    /// Returns `true` if `height` is in the set.
    #[must_use]
    #[inline]
    pub fn contains(self, height: u8) -> bool {
        self.bits & Self::bit(height) != 0
    }

    /// Adds `height`. Returns `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, height: u8) -> bool {
        let bit = Self::bit(height);
        let inserted = self.bits & bit == 0;
        self.bits |= bit;
        inserted
    }

    /// Removes `height`. Returns `true` if it was present.
    #[inline]
    pub fn remove(&mut self, height: u8) -> bool {
        let bit = Self::bit(height);
        let removed = self.bits & bit != 0;
        self.bits &= !bit;
        removed
    }

    /// Returns the number of heights in the set.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the only height in the set, or `None` unless the set has exactly one element.
    #[must_use]
    #[inline]
    pub fn as_single(self) -> Option<u8> {
        if self.bits.is_power_of_two() {
            self.first()
        } else {
            None
        }
    }

    /// Returns the smallest height in the set.
    #[must_use]
    #[inline]
    pub fn first(self) -> Option<u8> {
        self.iter().next()
    }

    /// Returns the largest height in the set.
    #[must_use]
    #[inline]
    pub fn last(self) -> Option<u8> {
        self.iter().next_back()
    }

    /// Removes and returns the smallest height in the set.
    #[inline]
    pub fn pop_first(&mut self) -> Option<u8> {
        let first = self.first()?;
        self.bits &= self.bits - 1;
        Some(first)
    }

    /// Returns the union of two sets.
    #[must_use]
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the intersection of two sets.
    #[must_use]
    #[inline]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the heights in `self` that are not in `other`.
    #[must_use]
    #[inline]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns `true` if every height in `self` is also in `other`.
    #[must_use]
    #[inline]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Returns an iterator over the heights in ascending order.
    #[must_use]
    #[inline]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl BitOr for HeightSet {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for HeightSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for HeightSet {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for HeightSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl FromIterator<u8> for HeightSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Self::new();
        for height in iter {
            set.insert(height);
        }
        set
    }
}

impl IntoIterator for HeightSet {
    type Item = u8;
    type IntoIter = Iter;

    #[inline]
    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl fmt::Debug for HeightSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Formats the heights in ascending order.
///
/// Single-digit heights are concatenated (`"124"`). Once any height has two digits they
/// are separated by commas (`"9,10,12"`).
impl fmt::Display for HeightSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.last().is_some_and(|h| h >= 10) {
            ","
        } else {
            ""
        };
        for (i, height) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            write!(f, "{height}")?;
        }
        Ok(())
    }
}

/// Iterator over the heights of a [`HeightSet`].
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u32,
}

impl Iterator for Iter {
    type Item = u8;

    #[inline]
    #[expect(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        Some(index as u8 + 1)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Iter {
    #[inline]
    #[expect(clippy::cast_possible_truncation)]
    fn next_back(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.ilog2();
        self.bits &= !(1 << index);
        Some(index as u8 + 1)
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_full() {
        assert_eq!(HeightSet::full(0), HeightSet::EMPTY);
        assert_eq!(HeightSet::full(4).len(), 4);
        assert_eq!(HeightSet::full(MAX_SIZE).len(), MAX_SIZE);
        for height in 1..=7 {
            assert!(HeightSet::full(7).contains(height));
        }
        assert_eq!(HeightSet::full(7).last(), Some(7));
    }

    #[test]
    #[should_panic(expected = "Height must be")]
    fn test_rejects_zero() {
        let mut set = HeightSet::new();
        set.insert(0);
    }

    #[test]
    #[should_panic(expected = "Height must be")]
    fn test_rejects_too_tall() {
        let _ = HeightSet::new().contains(33);
    }

    #[test]
    fn test_insert_remove_report_changes() {
        let mut set = HeightSet::new();
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.remove(3));
        assert!(!set.remove(3));
        assert!(set.is_empty());
    }

    #[test]
    fn test_as_single() {
        assert_eq!(HeightSet::EMPTY.as_single(), None);
        assert_eq!(HeightSet::from_elem(5).as_single(), Some(5));
        assert_eq!(HeightSet::from_iter([1, 5]).as_single(), None);
        assert_eq!(HeightSet::from_elem(32).as_single(), Some(32));
    }

    #[test]
    fn test_pop_first() {
        let mut set = HeightSet::from_iter([6, 2, 4]);
        assert_eq!(set.pop_first(), Some(2));
        assert_eq!(set.pop_first(), Some(4));
        assert_eq!(set.pop_first(), Some(6));
        assert_eq!(set.pop_first(), None);
    }

    #[test]
    fn test_iteration_order() {
        let set = HeightSet::from_iter([9, 1, 5, 3]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 3, 5, 9]);
        assert_eq!(set.iter().rev().collect::<Vec<_>>(), vec![9, 5, 3, 1]);
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn test_formatting() {
        let set = HeightSet::from_iter([4, 1, 2]);
        assert_eq!(set.to_string(), "124");
        assert_eq!(format!("{set:?}"), "{1, 2, 4}");
        assert_eq!(HeightSet::EMPTY.to_string(), "");
    }

    #[test]
    fn test_formatting_separates_two_digit_heights() {
        assert_eq!(HeightSet::from_iter([10, 11, 12]).to_string(), "10,11,12");
        assert_eq!(HeightSet::from_iter([1, 9, 10]).to_string(), "1,9,10");
        assert_eq!(HeightSet::from_elem(32).to_string(), "32");
        assert_eq!(HeightSet::full(9).to_string(), "123456789");
    }

    #[test]
    fn test_subset() {
        let a = HeightSet::from_iter([1, 2]);
        let b = HeightSet::from_iter([1, 2, 3]);
        assert!(a.is_subset(b));
        assert!(!b.is_subset(a));
        assert!(HeightSet::EMPTY.is_subset(a));
    }

    proptest! {
        #[test]
        fn prop_matches_btreeset(heights in proptest::collection::vec(1u8..=32, 0..40),
                                 removals in proptest::collection::vec(1u8..=32, 0..40)) {
            let mut set = HeightSet::new();
            let mut model = BTreeSet::new();
            for h in heights {
                prop_assert_eq!(set.insert(h), model.insert(h));
            }
            for h in removals {
                prop_assert_eq!(set.remove(h), model.remove(&h));
            }
            prop_assert_eq!(set.len(), model.len());
            prop_assert_eq!(set.iter().collect::<Vec<_>>(), model.iter().copied().collect::<Vec<_>>());
            prop_assert_eq!(set.first(), model.first().copied());
            prop_assert_eq!(set.last(), model.last().copied());
        }
    }
}
