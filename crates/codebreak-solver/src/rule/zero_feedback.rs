use super::{BoxedRule, Rule};
use crate::{DeductionState, SolverError};

const NAME: &str = "zero feedback";

/// A rule that eliminates the element of a single-element guess scoring nothing.
///
/// A guess such as `AAAA` that receives `(0, 0)` proves `A` occurs nowhere
/// in the secret.
///
/// # Examples
///
/// ```
/// use codebreak_solver::{
///     DeductionState,
///     rule::{Rule, ZeroFeedback},
/// };
///
/// let mut state = DeductionState::new(6, 4);
/// let rule = ZeroFeedback::new();
///
/// // Nothing to derive without records.
/// assert!(!rule.apply(&mut state)?);
/// # Ok::<(), codebreak_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroFeedback;

impl ZeroFeedback {
    /// Creates a new `ZeroFeedback` rule.
    #[must_use]
    pub const fn new() -> Self {
        ZeroFeedback
    }
}

impl Rule for ZeroFeedback {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, state: &mut DeductionState) -> Result<bool, SolverError> {
        let elements: Vec<_> = state
            .records()
            .iter()
            .filter(|r| r.feedback().total() == 0)
            .filter_map(|r| r.guess().distinct().as_single())
            .collect();
        let mut changed = false;
        for element in elements {
            changed |= state.eliminate(element)?;
        }
        Ok(changed)
    }
}
