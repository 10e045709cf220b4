use super::{BoxedRule, Rule};
use crate::{DeductionState, SolverError};

const NAME: &str = "zero exact";

/// A rule that removes each guessed element from its guessed position when
/// the guess scored no exact matches.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroExact;

impl ZeroExact {
    /// Creates a new `ZeroExact` rule.
    #[must_use]
    pub const fn new() -> Self {
        ZeroExact
    }
}

impl Rule for ZeroExact {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, state: &mut DeductionState) -> Result<bool, SolverError> {
        let guesses: Vec<_> = state
            .records()
            .iter()
            .filter(|r| r.feedback().exact() == 0)
            .map(|r| r.guess().clone())
            .collect();
        let mut changed = false;
        for guess in guesses {
            for (position, element) in guess.iter().enumerate() {
                changed |= state.remove(position, element);
            }
        }
        Ok(changed)
    }
}
