//! Per-position candidate element sets.

use std::ops::Index;

use crate::{Code, ContradictoryHistory, Element, ElementSet};

/// For every code position, the set of elements still possible there.
///
/// This is the value hint sources produce and the hint overlay renders. A
/// position with an empty set means the history is contradictory.
///
/// # Examples
///
/// ```
/// use codebreak_core::{Element, PositionCandidates};
///
/// let mut candidates = PositionCandidates::full(6, 4);
/// candidates.lock(0, Element::new(2));
///
/// assert_eq!(candidates.locked_element(0), Some(Element::new(2)));
/// assert_eq!(candidates[1].len(), 6);
/// assert!(!candidates.is_proven());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionCandidates {
    sets: Vec<ElementSet>,
}

impl PositionCandidates {
    /// Every element possible at each of `code_length` positions.
    #[must_use]
    pub fn full(alphabet_size: usize, code_length: usize) -> Self {
        Self {
            sets: vec![ElementSet::full(alphabet_size); code_length],
        }
    }

    /// Builds candidates from explicit per-position sets.
    #[must_use]
    pub fn from_sets(sets: Vec<ElementSet>) -> Self {
        Self { sets }
    }

    /// Collects, per position, the elements appearing in any of `codes`.
    #[must_use]
    pub fn from_codes<'a, I>(code_length: usize, codes: I) -> Self
    where
        I: IntoIterator<Item = &'a Code>,
    {
        let mut sets = vec![ElementSet::EMPTY; code_length];
        for code in codes {
            for (set, element) in sets.iter_mut().zip(code.iter()) {
                set.insert(element);
            }
        }
        Self { sets }
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns `true` if there are no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Candidate set of a position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<ElementSet> {
        self.sets.get(position).copied()
    }

    /// All sets in position order.
    #[must_use]
    pub fn as_slice(&self) -> &[ElementSet] {
        &self.sets
    }

    /// Iterates over the sets in position order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = ElementSet> + '_ {
        self.sets.iter().copied()
    }

    /// Removes `element` from `position`. Returns `true` if it was present.
    pub fn remove(&mut self, position: usize, element: Element) -> bool {
        self.sets[position].remove(element)
    }

    /// Restricts `position` to `element` alone. Returns `true` if anything changed.
    pub fn lock(&mut self, position: usize, element: Element) -> bool {
        let locked = ElementSet::from_elem(element) & self.sets[position];
        let changed = locked != self.sets[position];
        self.sets[position] = locked;
        changed
    }

    /// The element of a position that has exactly one candidate.
    #[must_use]
    pub fn locked_element(&self, position: usize) -> Option<Element> {
        self.sets.get(position).and_then(|s| s.as_single())
    }

    /// Positions holding exactly one candidate.
    #[must_use]
    pub fn locked_positions(&self) -> Vec<usize> {
        self.sets
            .iter()
            .enumerate()
            .filter_map(|(i, s)| (s.len() == 1).then_some(i))
            .collect()
    }

    /// Positions where `element` is still possible.
    #[must_use]
    pub fn positions_of(&self, element: Element) -> Vec<usize> {
        self.sets
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.contains(element).then_some(i))
            .collect()
    }

    /// Returns `true` if every position is down to a single candidate.
    #[must_use]
    pub fn is_proven(&self) -> bool {
        self.sets.iter().all(|s| s.len() == 1)
    }

    /// The code spelled by the candidates, when every position is proven.
    #[must_use]
    pub fn proven_code(&self) -> Option<Code> {
        self.sets.iter().map(|s| s.as_single()).collect()
    }

    /// Returns `true` if each position's set contains the other's.
    ///
    /// # Panics
    ///
    /// Panics if the two have different lengths.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        assert_eq!(self.len(), other.len(), "position counts differ");
        self.sets
            .iter()
            .zip(&other.sets)
            .all(|(a, b)| a.is_superset(*b))
    }

    /// Checks that no position is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ContradictoryHistory::EmptyPosition`] for the first empty position.
    pub fn check_consistency(&self) -> Result<(), ContradictoryHistory> {
        match self.sets.iter().position(|s| s.is_empty()) {
            Some(position) => Err(ContradictoryHistory::EmptyPosition { position }),
            None => Ok(()),
        }
    }
}

impl Index<usize> for PositionCandidates {
    type Output = ElementSet;

    fn index(&self, position: usize) -> &ElementSet {
        &self.sets[position]
    }
}
