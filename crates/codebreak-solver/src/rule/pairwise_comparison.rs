use super::{BoxedRule, Rule, attribute_exact_delta, is_swap, two_position_pairs};
use crate::{DeductionState, SolverError};

const NAME: &str = "pairwise comparison";

/// A rule comparing two guesses that differ at exactly two positions.
///
/// Every other position contributes the same exact matches to both
/// guesses, so the change in exact score belongs to the two differing
/// positions:
///
/// - a change of two locks both values of the better guess
/// - a change of one removes the worse guess's values from both positions
///
/// Swaps are left to [`SwapDetection`](super::SwapDetection), and guesses differing at
/// more positions are never compared.
#[derive(Debug, Default, Clone, Copy)]
pub struct PairwiseComparison;

impl PairwiseComparison {
    /// Creates a new `PairwiseComparison` rule.
    #[must_use]
    pub const fn new() -> Self {
        PairwiseComparison
    }
}

impl Rule for PairwiseComparison {
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
                || is_swap(before.guess(), after.guess(), positions)
            {
                continue;
            }
            changed |= attribute_exact_delta(state, before, after, positions)?;
        }
        Ok(changed)
    }
}
