use codebreak_core::{ContradictoryHistory, ElementSet};

use super::{BoxedRule, Rule};
use crate::{DeductionState, SolverError};

const NAME: &str = "closure";

/// A rule propagating the candidates and knowledge into each other.
///
/// - A locked position confirms its element, and once the element's known
///   count is covered by locks it is removed everywhere else.
/// - An element possible nowhere is eliminated.
/// - An element known to occur `k` times (or at least once, when only
///   confirmed) that is possible at exactly `k` positions is locked at all
///   of them.
/// - With one position left open, it is forced when exactly one candidate
///   remains after discarding elements whose count is used up, unless that
///   candidate already appears among the locked positions with an unknown
///   count.
#[derive(Debug, Default, Clone, Copy)]
pub struct Closure;

impl Closure {
    /// Creates a new `Closure` rule.
    #[must_use]
    pub const fn new() -> Self {
        Closure
    }

    fn propagate_locks(state: &mut DeductionState) -> Result<bool, SolverError> {
        let mut changed = false;
        let locked = state.candidates().locked_positions();
        for &position in &locked {
            let Some(element) = state.candidates().locked_element(position) else {
                continue;
            };
            changed |= state.confirm(element)?;
            if state.is_saturated(element) {
                let keep: Vec<usize> = locked
                    .iter()
                    .copied()
                    .filter(|&p| state.candidates().locked_element(p) == Some(element))
                    .collect();
                changed |= state.remove_except(element, &keep);
            }
        }
        Ok(changed)
    }

    fn eliminate_impossible(state: &mut DeductionState) -> Result<bool, SolverError> {
        let mut changed = false;
        for element in state.elements() {
            if state.is_eliminated(element) || !state.candidates().positions_of(element).is_empty()
            {
                continue;
            }
            if state.is_confirmed(element) {
                return Err(ContradictoryHistory::MissingElement { element }.into());
            }
            changed |= state.eliminate(element)?;
        }
        Ok(changed)
    }

    fn lock_forced_positions(state: &mut DeductionState) -> Result<bool, SolverError> {
        let mut changed = false;
        for element in state.elements() {
            let required = match state.exact_count(element) {
                Some(count) => usize::from(count),
                None => usize::from(state.is_confirmed(element)),
            };
            if required == 0 {
                continue;
            }
            let positions = state.candidates().positions_of(element);
            if positions.len() == required {
                for position in positions {
                    changed |= state.lock(position, element)?;
                }
            }
        }
        Ok(changed)
    }

    fn force_last_position(state: &mut DeductionState) -> Result<bool, SolverError> {
        let length = state.code_length();
        let locked = state.candidates().locked_positions();
        if locked.len() + 1 != length {
            return Ok(false);
        }
        let Some(open) = (0..length).find(|p| !locked.contains(p)) else {
            return Ok(false);
        };
        let remaining: ElementSet = state.candidates()[open]
            .iter()
            .filter(|&e| !state.is_saturated(e))
            .collect();
        if remaining.is_empty() {
            return Err(ContradictoryHistory::EmptyPosition { position: open }.into());
        }
        let Some(element) = remaining.as_single() else {
            return Ok(false);
        };
        if state.locked_count(element) > 0 && state.exact_count(element).is_none() {
            return Ok(false);
        }
        Ok(state.lock(open, element)?)
    }
}

impl Rule for Closure {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, state: &mut DeductionState) -> Result<bool, SolverError> {
        let mut changed = Self::propagate_locks(state)?;
        changed |= Self::eliminate_impossible(state)?;
        changed |= Self::lock_forced_positions(state)?;
        changed |= Self::force_last_position(state)?;
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RuleTester, elem};

    #[test]
    fn test_locked_position_confirms_element() {
        RuleTester::new(4, 3)
            .with_setup(|state| {
                for other in ['B', 'C', 'D'] {
                    state.remove(1, elem(other));
                }
                Ok(())
            })
            .apply_once(&Closure::new())
            .assert_confirmed('A')
            .assert_no_change(0);
    }

    #[test]
    fn test_saturated_element_removed_elsewhere() {
        RuleTester::new(4, 3)
            .with_setup(|state| {
                state.set_exact_count(elem('A'), 1)?;
                state.lock(1, elem('A'))?;
                Ok(())
            })
            .apply_once(&Closure::new())
            .assert_removed_exact(0, "A")
            .assert_removed_exact(2, "A");
    }

    #[test]
    fn test_element_possible_nowhere_is_eliminated() {
        RuleTester::new(4, 2)
            .with_setup(|state| {
                state.remove(0, elem('C'));
                state.remove(1, elem('C'));
                Ok(())
            })
            .apply_once(&Closure::new())
            .assert_eliminated('C')
            .assert_exact_count('C', 0);
    }

    #[test]
    fn test_confirmed_element_with_one_position_is_locked() {
        RuleTester::new(6, 4)
            .with_setup(|state| {
                state.confirm(elem('A'))?;
                for position in [0, 1, 3] {
                    state.remove(position, elem('A'));
                }
                Ok(())
            })
            .apply_once(&Closure::new())
            .assert_locked(2, 'A');
    }

    #[test]
    fn test_known_count_fills_its_positions() {
        RuleTester::new(6, 4)
            .with_setup(|state| {
                state.set_exact_count(elem('B'), 2)?;
                state.remove(0, elem('B'));
                state.remove(2, elem('B'));
                Ok(())
            })
            .apply_once(&Closure::new())
            .assert_locked(1, 'B')
            .assert_locked(3, 'B');
    }

    #[test]
    fn test_last_position_forced_after_saturation() {
        RuleTester::new(4, 3)
            .with_setup(|state| {
                state.set_exact_count(elem('A'), 1)?;
                state.set_exact_count(elem('B'), 1)?;
                state.lock(0, elem('A'))?;
                state.lock(1, elem('B'))?;
                state.remove(2, elem('D'));
                Ok(())
            })
            .apply_until_stuck(&Closure::new())
            .assert_locked(2, 'C');
    }

    #[test]
    fn test_last_position_stays_open_with_unknown_duplicate() {
        // A could repeat at position 2.
        RuleTester::new(3, 3)
            .with_setup(|state| {
                state.lock(0, elem('A'))?;
                state.lock(1, elem('B'))?;
                state.set_exact_count(elem('B'), 1)?;
                Ok(())
            })
            .apply_once(&Closure::new())
            .assert_removed_exact(2, "B");
    }

    #[test]
    fn test_confirmed_element_without_position() {
        let err = RuleTester::new(4, 2)
            .with_setup(|state| {
                state.confirm(elem('D'))?;
                state.remove(0, elem('D'));
                state.remove(1, elem('D'));
                Ok(())
            })
            .apply_err(&Closure::new());
        assert!(err.is_contradiction());
    }
}
