use codebreak_core::{ContradictoryHistory, Element, ElementSet, GuessRecord, PositionCandidates};

use crate::{ElementKnowledge, KnowledgeTable, Presence};

/// The mutable workspace the deduction rules operate on.
///
/// It pairs the per-position candidates with per-element knowledge and the
/// guess records analyzed so far. Every mutator only ever shrinks a
/// candidate set or adds knowledge, and reports whether anything changed,
/// so repeated rule application reaches a fixpoint.
///
/// Mutators return [`ContradictoryHistory`] when the requested change
/// conflicts with what is already known.
///
/// # Examples
///
/// ```
/// use codebreak_core::Element;
/// use codebreak_solver::DeductionState;
///
/// let mut state = DeductionState::new(6, 4);
/// let a = Element::new(0);
///
/// assert!(state.lock(2, a)?);
/// assert!(state.is_confirmed(a));
/// assert_eq!(state.locked_count(a), 1);
/// # Ok::<(), codebreak_core::ContradictoryHistory>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionState {
    alphabet_size: usize,
    code_length: usize,
    candidates: PositionCandidates,
    knowledge: KnowledgeTable,
    records: Vec<GuessRecord>,
}

impl DeductionState {
    /// A state with every element possible everywhere and nothing known.
    #[must_use]
    pub fn new(alphabet_size: usize, code_length: usize) -> Self {
        Self {
            alphabet_size,
            code_length,
            candidates: PositionCandidates::full(alphabet_size, code_length),
            knowledge: KnowledgeTable::new(alphabet_size),
            records: Vec::new(),
        }
    }

    /// Size of the alphabet.
    #[must_use]
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Number of code positions.
    #[must_use]
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Every element of the alphabet.
    #[must_use]
    pub fn elements(&self) -> ElementSet {
        ElementSet::full(self.alphabet_size)
    }

    /// The per-position candidates.
    #[must_use]
    pub fn candidates(&self) -> &PositionCandidates {
        &self.candidates
    }

    /// The per-element knowledge.
    #[must_use]
    pub fn knowledge(&self) -> &KnowledgeTable {
        &self.knowledge
    }

    /// Knowledge about one element.
    #[must_use]
    pub fn knowledge_of(&self, element: Element) -> ElementKnowledge {
        self.knowledge.get(element)
    }

    /// The records analyzed so far, in submission order.
    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    pub(crate) fn push_record(&mut self, record: GuessRecord) {
        self.records.push(record);
    }

    /// Returns `true` if `element` is known to occur.
    #[must_use]
    pub fn is_confirmed(&self, element: Element) -> bool {
        self.knowledge.get(element).is_confirmed()
    }

    /// Returns `true` if `element` is known not to occur.
    #[must_use]
    pub fn is_eliminated(&self, element: Element) -> bool {
        self.knowledge.get(element).is_eliminated()
    }

    /// The known number of occurrences of `element`.
    #[must_use]
    pub fn exact_count(&self, element: Element) -> Option<u8> {
        self.knowledge.get(element).exact_count()
    }

    /// Number of positions locked to `element`.
    #[must_use]
    pub fn locked_count(&self, element: Element) -> usize {
        self.candidates
            .iter()
            .filter(|set| set.as_single() == Some(element))
            .count()
    }

    /// A guaranteed minimum number of occurrences of `element`.
    #[must_use]
    pub fn count_lower_bound(&self, element: Element) -> usize {
        let known = self.exact_count(element).map_or(0, usize::from);
        let confirmed = usize::from(self.is_confirmed(element));
        known.max(self.locked_count(element)).max(confirmed)
    }

    /// Returns `true` if the known count of `element` is used up by locks.
    #[must_use]
    pub fn is_saturated(&self, element: Element) -> bool {
        self.exact_count(element)
            .is_some_and(|count| self.locked_count(element) >= usize::from(count))
    }

    /// Removes `element` from the candidates of `position`.
    pub fn remove(&mut self, position: usize, element: Element) -> bool {
        self.candidates.remove(position, element)
    }

    /// Removes `element` from every position not in `keep`.
    pub fn remove_except(&mut self, element: Element, keep: &[usize]) -> bool {
        let mut changed = false;
        for position in 0..self.code_length {
            if !keep.contains(&position) {
                changed |= self.candidates.remove(position, element);
            }
        }
        changed
    }

    /// Fixes `position` to `element`, confirming the element.
    ///
    /// # Errors
    ///
    /// Returns [`ContradictoryHistory::EmptyPosition`] if `element` is no
    /// longer a candidate there, or [`ContradictoryHistory::PresenceConflict`]
    /// if it was eliminated.
    pub fn lock(
        &mut self,
        position: usize,
        element: Element,
    ) -> Result<bool, ContradictoryHistory> {
        if !self.candidates[position].contains(element) {
            return Err(ContradictoryHistory::EmptyPosition { position });
        }
        let mut changed = self.confirm(element)?;
        changed |= self.candidates.lock(position, element);
        Ok(changed)
    }

    /// Records that `element` occurs at least once.
    ///
    /// # Errors
    ///
    /// Returns [`ContradictoryHistory::PresenceConflict`] if it was eliminated.
    pub fn confirm(&mut self, element: Element) -> Result<bool, ContradictoryHistory> {
        let entry = self.knowledge.get_mut(element);
        match entry.presence() {
            Presence::Confirmed => Ok(false),
            Presence::Eliminated => Err(ContradictoryHistory::PresenceConflict { element }),
            Presence::Unknown => {
                entry.set_presence(Presence::Confirmed);
                Ok(true)
            }
        }
    }

    /// Records that `element` does not occur and removes it everywhere.
    ///
    /// # Errors
    ///
    /// Returns [`ContradictoryHistory::PresenceConflict`] if it was confirmed.
    pub fn eliminate(&mut self, element: Element) -> Result<bool, ContradictoryHistory> {
        let entry = self.knowledge.get_mut(element);
        let mut changed = match entry.presence() {
            Presence::Eliminated => false,
            Presence::Confirmed => {
                return Err(ContradictoryHistory::PresenceConflict { element });
            }
            Presence::Unknown => {
                entry.set_presence(Presence::Eliminated);
                true
            }
        };
        if entry.exact_count().is_none() {
            entry.set_exact_count(0);
            changed = true;
        }
        changed |= self.remove_except(element, &[]);
        Ok(changed)
    }

    /// Records that `element` occurs exactly `count` times.
    ///
    /// A count of zero eliminates the element; any other count confirms it.
    ///
    /// # Errors
    ///
    /// Returns [`ContradictoryHistory::CountConflict`] if a different count
    /// is already known, or the error of [`confirm`](Self::confirm) or
    /// [`eliminate`](Self::eliminate).
    pub fn set_exact_count(
        &mut self,
        element: Element,
        count: u8,
    ) -> Result<bool, ContradictoryHistory> {
        match self.exact_count(element) {
            Some(known) if known != count => {
                return Err(ContradictoryHistory::CountConflict {
                    element,
                    known,
                    inferred: count,
                });
            }
            Some(_) => return Ok(false),
            None => {}
        }
        if count == 0 {
            return self.eliminate(element);
        }
        self.confirm(element)?;
        self.knowledge.get_mut(element).set_exact_count(count);
        Ok(true)
    }

    /// Verifies the state still admits a secret.
    ///
    /// # Errors
    ///
    /// Returns the first contradiction found: an empty position, a confirmed
    /// element with nowhere to go, or a known count that the locks exceed or
    /// the open positions cannot reach.
    pub fn check_consistency(&self) -> Result<(), ContradictoryHistory> {
        self.candidates.check_consistency()?;
        for (element, knowledge) in self.knowledge.iter() {
            let possible = self.candidates.positions_of(element).len();
            if knowledge.is_confirmed() && possible == 0 {
                return Err(ContradictoryHistory::MissingElement { element });
            }
            if let Some(count) = knowledge.exact_count() {
                let locked = self.locked_count(element);
                if locked > usize::from(count) {
                    return Err(ContradictoryHistory::CountExceeded {
                        element,
                        count,
                        locked,
                    });
                }
                if possible < usize::from(count) {
                    return Err(ContradictoryHistory::CountConflict {
                        element,
                        known: count,
                        inferred: u8::try_from(possible).unwrap_or(u8::MAX),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Element = Element::new(0);
    const B: Element = Element::new(1);

    #[test]
    fn test_lock_confirms_and_restricts() {
        let mut state = DeductionState::new(4, 3);
        assert!(state.lock(1, A).unwrap());
        assert!(!state.lock(1, A).unwrap());
        assert_eq!(state.candidates().locked_element(1), Some(A));
        assert!(state.is_confirmed(A));
        assert_eq!(state.count_lower_bound(A), 1);
    }

    #[test]
    fn test_lock_of_removed_candidate_is_contradiction() {
        let mut state = DeductionState::new(4, 3);
        state.remove(0, B);
        assert_eq!(
            state.lock(0, B),
            Err(ContradictoryHistory::EmptyPosition { position: 0 })
        );
    }

    #[test]
    fn test_eliminate_removes_everywhere() {
        let mut state = DeductionState::new(4, 3);
        assert!(state.eliminate(B).unwrap());
        assert!(!state.eliminate(B).unwrap());
        assert!(state.candidates().positions_of(B).is_empty());
        assert_eq!(state.exact_count(B), Some(0));
        assert!(state.check_consistency().is_ok());
    }

    #[test]
    fn test_presence_conflicts() {
        let mut state = DeductionState::new(4, 3);
        state.confirm(A).unwrap();
        assert_eq!(
            state.eliminate(A),
            Err(ContradictoryHistory::PresenceConflict { element: A })
        );
        state.eliminate(B).unwrap();
        assert_eq!(
            state.confirm(B),
            Err(ContradictoryHistory::PresenceConflict { element: B })
        );
    }

    #[test]
    fn test_exact_count_conflict() {
        let mut state = DeductionState::new(4, 3);
        assert!(state.set_exact_count(A, 2).unwrap());
        assert!(!state.set_exact_count(A, 2).unwrap());
        assert!(state.is_confirmed(A));
        assert_eq!(
            state.set_exact_count(A, 1),
            Err(ContradictoryHistory::CountConflict {
                element: A,
                known: 2,
                inferred: 1,
            })
        );
    }

    #[test]
    fn test_consistency_checks() {
        let mut state = DeductionState::new(4, 3);
        state.set_exact_count(A, 1).unwrap();
        state.lock(0, A).unwrap();
        state.lock(1, A).unwrap();
        assert_eq!(
            state.check_consistency(),
            Err(ContradictoryHistory::CountExceeded {
                element: A,
                count: 1,
                locked: 2,
            })
        );

        let mut state = DeductionState::new(4, 3);
        state.confirm(B).unwrap();
        for position in 0..3 {
            state.remove(position, B);
        }
        assert_eq!(
            state.check_consistency(),
            Err(ContradictoryHistory::MissingElement { element: B })
        );
    }

    #[test]
    fn test_saturation() {
        let mut state = DeductionState::new(4, 3);
        state.set_exact_count(A, 1).unwrap();
        assert!(!state.is_saturated(A));
        state.lock(2, A).unwrap();
        assert!(state.is_saturated(A));
        assert!(!state.is_saturated(B));
    }
}
