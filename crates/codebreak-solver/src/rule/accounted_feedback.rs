use super::{BoxedRule, Rule, multiplicity};
use crate::{DeductionState, SolverError};

const NAME: &str = "accounted feedback";

/// A rule eliminating guessed elements whose share of the feedback is
/// already taken.
///
/// An element `o` contributes `min(multiplicity in guess, count in secret)`
/// to a guess's total score. Known counts, locks and confirmations give a
/// lower bound on that contribution. When the bounds of the other distinct
/// guessed elements already reach the total, an unconfirmed element of the
/// guess contributes nothing and is eliminated.
///
/// # Examples
///
/// ```
/// use codebreak_core::Element;
/// use codebreak_solver::{
///     DeductionState,
///     rule::{AccountedFeedback, Rule},
/// };
///
/// let mut state = DeductionState::new(6, 4);
/// state.lock(0, Element::new(0))?;
/// assert!(!AccountedFeedback::new().apply(&mut state)?);
/// # Ok::<(), codebreak_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AccountedFeedback;

impl AccountedFeedback {
    /// Creates a new `AccountedFeedback` rule.
    #[must_use]
    pub const fn new() -> Self {
        AccountedFeedback
    }
}

impl Rule for AccountedFeedback {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, state: &mut DeductionState) -> Result<bool, SolverError> {
        let records = state.records().to_vec();
        let mut changed = false;
        for record in &records {
            let guess = record.guess();
            let total = usize::from(record.feedback().total());
            let distinct = guess.distinct();
            for element in distinct {
                if state.is_confirmed(element) || state.is_eliminated(element) {
                    continue;
                }
                let accounted: usize = distinct
                    .iter()
                    .filter(|&other| other != element)
                    .map(|other| {
                        usize::from(multiplicity(guess, other)).min(state.count_lower_bound(other))
                    })
                    .sum();
                if accounted >= total {
                    changed |= state.eliminate(element)?;
                }
            }
        }
        Ok(changed)
    }
}
