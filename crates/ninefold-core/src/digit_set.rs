//! A set of digits 1-9, represented as a bitset.

use crate::Digit;

/// A set of [`Digit`]s backed by a 16-bit integer.
///
/// Bits 0-8 represent digits 1-9 respectively, giving constant-time insert,
/// remove, and membership tests. A 9-cell block of a solved board holds
/// exactly [`DigitSet::FULL`].
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::EMPTY;
/// set.insert(Digit::D1);
/// set.insert(Digit::D5);
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Digit::D5));
/// assert!(!set.contains(Digit::D9));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };
    /// The set containing every digit 1-9.
    pub const FULL: Self = Self { bits: 0x1ff };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Adds a digit to the set.
    pub fn insert(&mut self, digit: Digit) {
        self.bits |= Self::bit(digit);
    }

    /// Removes a digit from the set.
    pub fn remove(&mut self, digit: Digit) {
        self.bits &= !Self::bit(digit);
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        Iter { bits: self.bits }
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Digit::from_value(index + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        assert!(set.is_empty());

        set.insert(Digit::D1);
        set.insert(Digit::D9);
        assert!(set.contains(Digit::D1));
        assert!(set.contains(Digit::D9));
        assert!(!set.contains(Digit::D5));
        assert_eq!(set.len(), 2);

        set.remove(Digit::D1);
        assert!(!set.contains(Digit::D1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_full_contains_all_digits() {
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
        assert_eq!(Digit::ALL.into_iter().collect::<DigitSet>(), DigitSet::FULL);
    }

    #[test]
    fn test_iteration_order() {
        let set: DigitSet = [Digit::D9, Digit::D1, Digit::D5].into_iter().collect();
        let collected: Vec<_> = set.into_iter().collect();
        assert_eq!(collected, vec![Digit::D1, Digit::D5, Digit::D9]);
    }

    #[test]
    fn test_duplicate_insert_is_idempotent() {
        let mut set = DigitSet::new();
        set.insert(Digit::D3);
        set.insert(Digit::D3);
        assert_eq!(set.len(), 1);
    }
}
