//! Finite integer domains.
//!
//! A [`Domain`] is the inclusive range `[left, right]` of integers over which a
//! relation is defined. It fixes the row and column order of every
//! [`RelationMatrix`][crate::matrix::RelationMatrix] built over it: position `0`
//! is `left`, position `len() - 1` is `right`.
//!
//! An inverted range (`left > right`) is a valid, empty domain.

use std::fmt;

/// An inclusive, ascending range of integers.
///
/// # Invariants
///
/// - Values are distinct and sorted ascending.
/// - `len() == 0` iff `left > right`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Domain {
    left: i64,
    right: i64,
}

impl Domain {
    /// Creates the domain `[left, right]`.
    pub fn new(left: i64, right: i64) -> Self {
        log::trace!("Domain::new(left = {}, right = {})", left, right);
        Self { left, right }
    }

    /// The empty domain.
    pub fn empty() -> Self {
        Self { left: 1, right: 0 }
    }

    /// Lower border (inclusive).
    pub fn left(&self) -> i64 {
        self.left
    }

    /// Upper border (inclusive).
    pub fn right(&self) -> i64 {
        self.right
    }

    /// Number of values in the domain.
    ///
    /// Saturates at `usize::MAX` for a domain spanning the whole `i64` range.
    pub fn len(&self) -> usize {
        if self.left > self.right {
            0
        } else {
            usize::try_from(self.right.abs_diff(self.left))
                .unwrap_or(usize::MAX)
                .saturating_add(1)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left > self.right
    }

    pub fn contains(&self, value: i64) -> bool {
        self.left <= value && value <= self.right
    }

    /// Position of `value` in the domain, if it belongs to it.
    pub fn position(&self, value: i64) -> Option<usize> {
        if self.contains(value) {
            Some(value.abs_diff(self.left) as usize)
        } else {
            None
        }
    }

    /// Value at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn value(&self, index: usize) -> i64 {
        assert!(index < self.len(), "Index {} out of domain {}", index, self);
        // `left + index` fits into `i64`, so the wrapping sum is exact.
        self.left.wrapping_add(index as i64)
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + Clone {
        // An inverted `RangeInclusive` is already empty.
        self.left..=self.right
    }
}

impl Default for Domain {
    fn default() -> Self {
        Domain::empty()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.left, self.right)
    }
}

impl IntoIterator for Domain {
    type Item = i64;
    type IntoIter = std::ops::RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.left..=self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_len() {
        assert_eq!(Domain::new(1, 10).len(), 10);
        assert_eq!(Domain::new(5, 5).len(), 1);
        assert_eq!(Domain::new(-3, 3).len(), 7);
        assert_eq!(Domain::new(10, 1).len(), 0);
        assert!(Domain::empty().is_empty());
    }

    #[test]
    fn test_full_range() {
        let domain = Domain::new(i64::MIN, i64::MAX);
        assert!(!domain.is_empty());
        assert_eq!(domain.len(), usize::MAX);
        assert!(domain.contains(0));
        assert_eq!(domain.position(i64::MIN), Some(0));
        assert_eq!(domain.value(1), i64::MIN + 1);
        assert_eq!(domain.iter().next(), Some(i64::MIN));
        assert_eq!(domain.to_string(), format!("[{}..{}]", i64::MIN, i64::MAX));
    }

    #[test]
    fn test_iter() {
        let values: Vec<i64> = Domain::new(-2, 2).iter().collect();
        assert_eq!(values, vec![-2, -1, 0, 1, 2]);
        assert_eq!(Domain::new(3, 1).iter().count(), 0);
    }

    #[test]
    fn test_position_and_value() {
        let domain = Domain::new(-5, 4);
        for (i, v) in domain.iter().enumerate() {
            assert_eq!(domain.position(v), Some(i));
            assert_eq!(domain.value(i), v);
        }
        assert_eq!(domain.position(-6), None);
        assert_eq!(domain.position(5), None);
    }

    #[test]
    fn test_empty_has_no_positions() {
        let domain = Domain::new(2, 1);
        assert_eq!(domain.position(1), None);
        assert_eq!(domain.position(2), None);
    }

    #[test]
    #[should_panic]
    fn test_value_out_of_range() {
        Domain::new(1, 3).value(3);
    }

    #[test]
    fn test_display() {
        assert_eq!(Domain::new(1, 10).to_string(), "[1..10]");
    }
}
