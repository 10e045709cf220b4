//! A compact set of code elements.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign},
};

use crate::{Element, element::MAX_ELEMENTS};

/// A set of [`Element`]s, represented as a 64-bit mask.
///
/// Bit `i` is set when the element with index `i` is a member. Iteration
/// yields elements in ascending index order.
///
/// # Examples
///
/// ```
/// use codebreak_core::{Element, ElementSet};
///
/// let a = Element::new(0);
/// let b = Element::new(1);
///
/// let mut set = ElementSet::full(6);
/// assert!(set.remove(a));
/// assert_eq!(set.len(), 5);
///
/// let pair = ElementSet::from_iter([a, b]);
/// assert_eq!((set & pair).as_single(), Some(b));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ElementSet(u64);

impl ElementSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates the set of the first `size` elements.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds [`MAX_ELEMENTS`].
    #[must_use]
    pub const fn full(size: usize) -> Self {
        assert!(size <= MAX_ELEMENTS, "element set size out of range");
        if size == MAX_ELEMENTS {
            Self(u64::MAX)
        } else {
            Self((1 << size) - 1)
        }
    }

    /// Creates a set holding a single element.
    #[must_use]
    pub const fn from_elem(element: Element) -> Self {
        Self(1 << element.index())
    }

    /// Returns the raw bit mask.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns the number of elements in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set has no elements.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if `element` is a member.
    #[must_use]
    pub const fn contains(self, element: Element) -> bool {
        self.0 & (1 << element.index()) != 0
    }

    /// Adds an element. Returns `true` if it was not already present.
    pub fn insert(&mut self, element: Element) -> bool {
        let before = self.0;
        self.0 |= 1 << element.index();
        before != self.0
    }

    /// Removes an element. Returns `true` if it was present.
    pub fn remove(&mut self, element: Element) -> bool {
        let before = self.0;
        self.0 &= !(1 << element.index());
        before != self.0
    }

    /// Returns the only element of a singleton set.
    #[must_use]
    pub const fn as_single(self) -> Option<Element> {
        if self.0.count_ones() == 1 {
            Some(Element::new(self.0.trailing_zeros() as usize))
        } else {
            None
        }
    }

    /// Returns the smallest element of the set.
    #[must_use]
    pub const fn first(self) -> Option<Element> {
        if self.0 == 0 {
            None
        } else {
            Some(Element::new(self.0.trailing_zeros() as usize))
        }
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the elements of `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns `true` if every element of `self` is in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        other.is_subset(self)
    }

    /// Iterates over the elements in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Debug for ElementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for element in *self {
            write!(f, "{element}")?;
        }
        write!(f, "}}")
    }
}

impl BitAnd for ElementSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for ElementSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl BitOr for ElementSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for ElementSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl Sub for ElementSet {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl SubAssign for ElementSet {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl FromIterator<Element> for ElementSet {
    fn from_iter<T: IntoIterator<Item = Element>>(iter: T) -> Self {
        let mut set = Self::new();
        for element in iter {
            set.insert(element);
        }
        set
    }
}

impl Extend<Element> for ElementSet {
    fn extend<T: IntoIterator<Item = Element>>(&mut self, iter: T) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl IntoIterator for ElementSet {
    type Item = Element;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the elements of an [`ElementSet`].
#[derive(Debug, Clone)]
pub struct Iter(u64);

impl Iterator for Iter {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Element::new(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(letters: &str) -> ElementSet {
        letters.chars().filter_map(Element::from_letter).collect()
    }

    #[test]
    fn test_full_and_empty() {
        assert!(ElementSet::EMPTY.is_empty());
        assert_eq!(ElementSet::full(0), ElementSet::EMPTY);
        assert_eq!(ElementSet::full(6).len(), 6);
        assert_eq!(ElementSet::full(MAX_ELEMENTS).len(), MAX_ELEMENTS);
    }

    #[test]
    fn test_insert_remove_report_change() {
        let mut s = ElementSet::new();
        let a = Element::new(0);
        assert!(s.insert(a));
        assert!(!s.insert(a));
        assert!(s.remove(a));
        assert!(!s.remove(a));
    }

    #[test]
    fn test_set_algebra() {
        let abc = set("ABC");
        let bcd = set("BCD");
        assert_eq!(abc | bcd, set("ABCD"));
        assert_eq!(abc & bcd, set("BC"));
        assert_eq!(abc - bcd, set("A"));
        assert!(set("BC").is_subset(abc));
        assert!(abc.is_superset(set("AC")));
        assert!(!abc.is_subset(bcd));
    }

    #[test]
    fn test_single_and_iteration_order() {
        assert_eq!(set("E").as_single(), Element::from_letter('E'));
        assert_eq!(set("AE").as_single(), None);
        assert_eq!(set("FCA").iter().map(|e| e.to_string()).collect::<String>(), "ACF");
        assert_eq!(set("DB").first(), Element::from_letter('B'));
        assert_eq!(format!("{:?}", set("CA")), "{AC}");
    }
}
