use super::{BoxedRule, Rule, multiplicity};
use crate::{DeductionState, SolverError};

const NAME: &str = "unique whites";

/// A rule for guesses whose every hit is a misplaced distinct element.
///
/// It fires on a guess with no exact matches whose partial score equals its
/// number of distinct elements `k`. An element `e` is confirmed when the
/// other guess positions could not account for `k` hits on their own, that
/// is when `k > L - multiplicity(e)`. For a guess of all-distinct elements
/// this confirms every guessed element exactly when `k == L`.
///
/// When `k == L` the guess names the whole multiset of the secret: each
/// guessed element occurs exactly as often as in the guess and every other
/// element is eliminated.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniqueWhites;

impl UniqueWhites {
    /// Creates a new `UniqueWhites` rule.
    #[must_use]
    pub const fn new() -> Self {
        UniqueWhites
    }
}

impl Rule for UniqueWhites {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, state: &mut DeductionState) -> Result<bool, SolverError> {
        let length = state.code_length();
        let guesses: Vec<_> = state
            .records()
            .iter()
            .filter(|r| {
                let feedback = r.feedback();
                feedback.exact() == 0
                    && usize::from(feedback.partial()) == r.guess().distinct().len()
            })
            .map(|r| r.guess().clone())
            .collect();

        let mut changed = false;
        for guess in guesses {
            let distinct = guess.distinct();
            let k = distinct.len();
            for element in distinct {
                if k + guess.count(element) > length {
                    changed |= state.confirm(element)?;
                }
            }
            if k == length {
                for element in distinct {
                    changed |= state.set_exact_count(element, multiplicity(&guess, element))?;
                }
                for element in state.elements() - distinct {
                    changed |= state.eliminate(element)?;
                }
            }
        }
        Ok(changed)
    }
}
