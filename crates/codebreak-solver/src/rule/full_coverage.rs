use super::{BoxedRule, Rule, multiplicity};
use crate::{DeductionState, SolverError};

const NAME: &str = "full coverage";

/// A rule for guesses whose total score equals the code length.
///
/// Such a guess is a rearrangement of the secret: every guessed element
/// occurs exactly as often as in the guess and the rest of the alphabet is
/// eliminated. A fully exact guess also locks every position.
#[derive(Debug, Default, Clone, Copy)]
pub struct FullCoverage;

impl FullCoverage {
    /// Creates a new `FullCoverage` rule.
    #[must_use]
    pub const fn new() -> Self {
        FullCoverage
    }
}

impl Rule for FullCoverage {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, state: &mut DeductionState) -> Result<bool, SolverError> {
        let length = state.code_length();
        let records: Vec<_> = state
            .records()
            .iter()
            .filter(|r| usize::from(r.feedback().total()) == length)
            .cloned()
            .collect();
        let mut changed = false;
        for record in records {
            let guess = record.guess();
            let distinct = guess.distinct();
            for element in distinct {
                changed |= state.set_exact_count(element, multiplicity(guess, element))?;
            }
            for element in state.elements() - distinct {
                changed |= state.eliminate(element)?;
            }
            if record.feedback().is_solved(length) {
                for (position, element) in guess.iter().enumerate() {
                    changed |= state.lock(position, element)?;
                }
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RuleTester;

    #[test]
    fn test_rearrangement_fixes_counts() {
        RuleTester::new(6, 4)
            .with_scored_guesses("BAAC", &["AABC"])
            .apply_once(&FullCoverage::new())
            .assert_exact_count('A', 2)
            .assert_exact_count('B', 1)
            .assert_exact_count('C', 1)
            .assert_eliminated('D')
            .assert_eliminated('F')
            .assert_removed_exact(0, "DEF")
            .assert_sound();
    }

    #[test]
    fn test_solved_guess_locks_everything() {
        RuleTester::new(6, 4)
            .with_scored_guesses("FACE", &["FACE"])
            .apply_once(&FullCoverage::new())
            .assert_locked(0, 'F')
            .assert_locked(1, 'A')
            .assert_locked(2, 'C')
            .assert_locked(3, 'E')
            .assert_removed_includes(1, "BDF")
            .assert_sound();
    }

    #[test]
    fn test_partial_cover_is_ignored() {
        RuleTester::new(6, 4)
            .with_scored_guesses("BAAD", &["AABC"])
            .apply_once(&FullCoverage::new())
            .assert_unchanged();
    }
}
