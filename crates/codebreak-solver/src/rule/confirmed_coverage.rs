use codebreak_core::ContradictoryHistory;

use super::{BoxedRule, Rule};
use crate::{DeductionState, SolverError};

const NAME: &str = "confirmed coverage";

/// A rule that removes an element elsewhere once its known count is locked.
///
/// If `A` is known to occur exactly `k` times and `k` positions are already
/// locked to `A`, no other position can hold it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfirmedCoverage;

impl ConfirmedCoverage {
    /// Creates a new `ConfirmedCoverage` rule.
    #[must_use]
    pub const fn new() -> Self {
        ConfirmedCoverage
    }
}

impl Rule for ConfirmedCoverage {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, state: &mut DeductionState) -> Result<bool, SolverError> {
        let mut changed = false;
        for element in state.elements() {
            let Some(count) = state.exact_count(element).filter(|&c| c > 0) else {
                continue;
            };
            let locked: Vec<usize> = (0..state.code_length())
                .filter(|&p| state.candidates().locked_element(p) == Some(element))
                .collect();
            if locked.len() > usize::from(count) {
                return Err(ContradictoryHistory::CountExceeded {
                    element,
                    count,
                    locked: locked.len(),
                }
                .into());
            }
            if locked.len() == usize::from(count) {
                changed |= state.remove_except(element, &locked);
            }
        }
        Ok(changed)
    }
}
