use super::{BoxedRule, Rule, attribute_exact_delta, is_swap, two_position_pairs};
use crate::{DeductionState, SolverError};

const NAME: &str = "swap detection";

/// A rule comparing a guess with the same guess after swapping two
/// positions' distinct elements.
///
/// A drop of two exact matches proves both original placements, a rise of
/// two proves both swapped placements, and a change of one shows the worse
/// arrangement is wrong at both positions. Locking a placement also
/// confirms its element.
#[derive(Debug, Default, Clone, Copy)]
pub struct SwapDetection;

impl SwapDetection {
    /// Creates a new `SwapDetection` rule.
    #[must_use]
    pub const fn new() -> Self {
        SwapDetection
    }
}

impl Rule for SwapDetection {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, state: &mut DeductionState) -> Result<bool, SolverError> {
        let records = state.records().to_vec();
        let mut changed = false;
        for (before, after, positions) in two_position_pairs(&records) {
            if before.feedback() == after.feedback()
                || !is_swap(before.guess(), after.guess(), positions)
            {
                continue;
            }
            changed |= attribute_exact_delta(state, before, after, positions)?;
        }
        Ok(changed)
    }
}
