//! Deduction rules.
//!
//! Each rule implements the [`Rule`] trait and derives facts from the guess
//! records held by a [`DeductionState`]. A rule only ever removes candidates
//! or adds knowledge that every secret consistent with the history agrees
//! with, so the engine's candidates always contain the exhaustive solver's.

use std::fmt::Debug;

use codebreak_core::{Code, ContradictoryHistory, Element, GuessRecord};

pub use self::{
    accounted_feedback::AccountedFeedback, closure::Closure,
    confirmed_coverage::ConfirmedCoverage, exact_count::ExactCount, full_coverage::FullCoverage,
    pairwise_comparison::PairwiseComparison, swap_detection::SwapDetection,
    unique_whites::UniqueWhites, zero_exact::ZeroExact, zero_feedback::ZeroFeedback,
};
use crate::{DeductionState, SolverError};

mod accounted_feedback;
mod closure;
mod confirmed_coverage;
mod exact_count;
mod full_coverage;
mod pairwise_comparison;
mod swap_detection;
mod unique_whites;
mod zero_exact;
mod zero_feedback;

/// Returns all available rules in application order.
///
/// # Examples
///
/// ```
/// use codebreak_solver::rule;
///
/// let rules = rule::all_rules();
/// assert_eq!(rules[0].name(), "zero feedback");
/// assert_eq!(rules.len(), 10);
/// ```
#[must_use]
pub fn all_rules() -> Vec<BoxedRule> {
    let mut rules = core_rules();
    rules.push(Box::new(AccountedFeedback::new()));
    rules.push(Box::new(FullCoverage::new()));
    rules
}

/// Returns the core rules, without the supplementary feedback accounting.
///
/// This set is stable and serves as a baseline when measuring how much the
/// supplementary rules add.
#[must_use]
pub fn core_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(ZeroFeedback::new()),
        Box::new(ConfirmedCoverage::new()),
        Box::new(ExactCount::new()),
        Box::new(ZeroExact::new()),
        Box::new(UniqueWhites::new()),
        Box::new(PairwiseComparison::new()),
        Box::new(SwapDetection::new()),
        Box::new(Closure::new()),
    ]
}

/// A deduction rule over the shared [`DeductionState`].
pub trait Rule: Debug {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the rule.
    fn clone_box(&self) -> BoxedRule;

    /// Applies the rule to the state.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The rule derived something new and the state was updated
    /// * `Ok(false)` - The rule found nothing new
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if the rule proves the history
    /// admits no secret.
    fn apply(&self, state: &mut DeductionState) -> Result<bool, SolverError>;
}

/// A boxed rule.
pub type BoxedRule = Box<dyn Rule>;

impl Clone for BoxedRule {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Number of times `element` occurs in `code`.
#[allow(clippy::cast_possible_truncation)]
fn multiplicity(code: &Code, element: Element) -> u8 {
    // Records reach the state only through `DeductionEngine::analyze_guess`,
    // which rejects codes longer than MAX_CODE_LENGTH.
    debug_assert!(code.len() <= codebreak_core::MAX_CODE_LENGTH);
    code.count(element) as u8
}

/// Every pair of records whose guesses differ at exactly two positions.
fn two_position_pairs(records: &[GuessRecord]) -> Vec<(&GuessRecord, &GuessRecord, [usize; 2])> {
    let mut pairs = Vec::new();
    for (i, before) in records.iter().enumerate() {
        for after in &records[i + 1..] {
            if let [p, q] = before.guess().differing_positions(after.guess())[..] {
                pairs.push((before, after, [p, q]));
            }
        }
    }
    pairs
}

/// Returns `true` if the guesses exchange their elements at `positions`.
fn is_swap(before: &Code, after: &Code, [p, q]: [usize; 2]) -> bool {
    before[p] == after[q] && before[q] == after[p]
}

/// Attributes the exact-match change between two guesses to the positions
/// where they differ.
///
/// Matches at every other position are shared by both guesses, so a change
/// of two proves the improving guess correct at both positions and a change
/// of one proves the worsening guess wrong at both.
fn attribute_exact_delta(
    state: &mut DeductionState,
    before: &GuessRecord,
    after: &GuessRecord,
    positions: [usize; 2],
) -> Result<bool, SolverError> {
    let delta = i32::from(after.feedback().exact()) - i32::from(before.feedback().exact());
    let mut changed = false;
    match delta {
        0 => {}
        2 | -2 => {
            let better = if delta > 0 { after } else { before };
            for position in positions {
                changed |= state.lock(position, better.guess()[position])?;
            }
        }
        1 | -1 => {
            let worse = if delta > 0 { before } else { after };
            for position in positions {
                changed |= state.remove(position, worse.guess()[position]);
            }
        }
        _ => return Err(ContradictoryHistory::ImpossibleExactChange { delta }.into()),
    }
    Ok(changed)
}
