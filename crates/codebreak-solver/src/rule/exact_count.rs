use super::{BoxedRule, Rule};
use crate::{DeductionState, SolverError};

const NAME: &str = "exact count";

/// A rule that reads an element's exact count off a single-element guess.
///
/// The total score of `AAAA` is the number of `A`s in the secret, so a
/// nonzero total fixes the count and confirms the element.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactCount;

impl ExactCount {
    /// Creates a new `ExactCount` rule.
    #[must_use]
    pub const fn new() -> Self {
        ExactCount
    }
}

impl Rule for ExactCount {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, state: &mut DeductionState) -> Result<bool, SolverError> {
        let counts: Vec<_> = state
            .records()
            .iter()
            .filter(|r| r.feedback().total() > 0)
            .filter_map(|r| {
                let element = r.guess().distinct().as_single()?;
                Some((element, r.feedback().total()))
            })
            .collect();
        let mut changed = false;
        for (element, count) in counts {
            changed |= state.set_exact_count(element, count)?;
        }
        Ok(changed)
    }
}
