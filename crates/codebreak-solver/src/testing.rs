//! Test utilities for rule implementations.
//!
//! This module provides [`RuleTester`], a testing harness for verifying that
//! deduction rules derive what they should and nothing unsound.

use codebreak_core::{
    Alphabet, Code, Element, ElementSet, Feedback, GuessRecord, History, PositionCandidates,
};

use crate::{DeductionState, ExhaustiveSolver, HintSource as _, SolverError, rule::Rule};

/// Parses a letter into an element.
///
/// # Panics
///
/// Panics if `letter` is not `A`-`Z`.
#[track_caller]
pub fn elem(letter: char) -> Element {
    Element::from_letter(letter).unwrap()
}

fn elems(letters: &str) -> ElementSet {
    letters.chars().map(elem).collect()
}

/// A test harness for verifying rule implementations.
///
/// `RuleTester` tracks the initial and current state of a deduction, allowing
/// you to apply rules and assert that they produce the expected changes.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct RuleTester {
    initial: DeductionState,
    current: DeductionState,
}

impl RuleTester {
    /// Creates a tester with nothing known.
    pub fn new(alphabet_size: usize, code_length: usize) -> Self {
        let initial = DeductionState::new(alphabet_size, code_length);
        let current = initial.clone();
        Self { initial, current }
    }

    /// Adds a guess record with the given feedback.
    ///
    /// # Panics
    ///
    /// Panics if `guess` cannot be parsed.
    #[track_caller]
    pub fn with_record(mut self, guess: &str, exact: u8, partial: u8) -> Self {
        let guess: Code = guess.parse().unwrap();
        let record = GuessRecord::new(guess, Feedback::new(exact, partial));
        self.current.push_record(record);
        self.initial = self.current.clone();
        self
    }

    /// Adds records for `guesses`, scored against `secret`.
    ///
    /// # Panics
    ///
    /// Panics if a code cannot be parsed.
    #[track_caller]
    pub fn with_scored_guesses(mut self, secret: &str, guesses: &[&str]) -> Self {
        let secret: Code = secret.parse().unwrap();
        for guess in guesses {
            let guess: Code = guess.parse().unwrap();
            let feedback = Feedback::evaluate(&guess, &secret);
            self.current.push_record(GuessRecord::new(guess, feedback));
        }
        self.initial = self.current.clone();
        self
    }

    /// Prepares knowledge before any rule runs.
    ///
    /// # Panics
    ///
    /// Panics if `setup` fails.
    #[track_caller]
    pub fn with_setup<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut DeductionState) -> Result<(), SolverError>,
    {
        setup(&mut self.current).unwrap();
        self.initial = self.current.clone();
        self
    }

    /// Applies the rule once and returns self for chaining.
    ///
    /// # Panics
    ///
    /// Panics if the rule returns an error, or reports a change it did not
    /// make.
    #[track_caller]
    pub fn apply_once<T>(mut self, rule: &T) -> Self
    where
        T: Rule,
    {
        let before = self.current.clone();
        let changed = rule.apply(&mut self.current).unwrap();
        Self::assert_change_reported(rule, &before, &self.current, changed);
        self
    }

    /// Applies the rule repeatedly until it makes no more progress.
    ///
    /// # Panics
    ///
    /// Panics if the rule returns an error.
    #[track_caller]
    pub fn apply_until_stuck<T>(mut self, rule: &T) -> Self
    where
        T: Rule,
    {
        loop {
            let before = self.current.clone();
            let changed = rule.apply(&mut self.current).unwrap();
            Self::assert_change_reported(rule, &before, &self.current, changed);
            if !changed {
                break;
            }
        }
        self
    }

    /// Applies the rule and returns the error it reports.
    ///
    /// # Panics
    ///
    /// Panics if the rule succeeds.
    #[track_caller]
    pub fn apply_err<T>(mut self, rule: &T) -> SolverError
    where
        T: Rule,
    {
        match rule.apply(&mut self.current) {
            Ok(changed) => panic!(
                "Expected {} to fail, but it succeeded (changed: {changed})",
                rule.name()
            ),
            Err(err) => err,
        }
    }

    #[track_caller]
    fn assert_change_reported<T>(
        rule: &T,
        before: &DeductionState,
        after: &DeductionState,
        changed: bool,
    ) where
        T: Rule,
    {
        let name = rule.name();
        if changed {
            assert_ne!(before, after, "Expected {name} to change the state");
        } else {
            assert_eq!(before, after, "Expected {name} to leave the state unchanged");
        }
    }

    /// Asserts that a position was locked to the given element.
    ///
    /// # Panics
    ///
    /// Panics if the position was already locked initially or is not locked
    /// to `letter` now.
    #[track_caller]
    pub fn assert_locked(self, position: usize, letter: char) -> Self {
        let element = elem(letter);
        let initial = self.initial.candidates()[position];
        let current = self.current.candidates()[position];
        assert!(
            initial.len() > 1,
            "Expected position {position} to be open initially, but candidates are {initial:?}"
        );
        assert_eq!(
            current.as_single(),
            Some(element),
            "Expected position {position} to be locked to {element}, but candidates are {current:?}"
        );
        self
    }

    /// Asserts that all specified elements were removed from a position.
    ///
    /// Other candidates may also have been removed.
    ///
    /// # Panics
    ///
    /// Panics if any of them was not initially present or is still present.
    #[track_caller]
    pub fn assert_removed_includes(self, position: usize, letters: &str) -> Self {
        let elements = elems(letters);
        let initial = self.initial.candidates()[position];
        let current = self.current.candidates()[position];
        assert_eq!(
            initial & elements,
            elements,
            "Expected initial candidates at {position} to include {elements:?}, but they are {initial:?}"
        );
        assert!(
            (current & elements).is_empty(),
            "Expected {elements:?} to be removed from {position}, but {current:?} still contains {:?}",
            current & elements
        );
        self
    }

    /// Asserts that exactly the specified elements were removed from a position.
    ///
    /// # Panics
    ///
    /// Panics if the removed candidates differ from `letters`.
    #[track_caller]
    pub fn assert_removed_exact(self, position: usize, letters: &str) -> Self {
        let elements = elems(letters);
        let initial = self.initial.candidates()[position];
        let current = self.current.candidates()[position];
        let removed = initial - current;
        assert_eq!(
            removed, elements,
            "Expected exactly {elements:?} to be removed from {position}, but removed {removed:?} (initial: {initial:?}, current: {current:?})"
        );
        self
    }

    /// Asserts that a position's candidates have not changed.
    ///
    /// # Panics
    ///
    /// Panics if the candidates differ from the initial state.
    #[track_caller]
    pub fn assert_no_change(self, position: usize) -> Self {
        let initial = self.initial.candidates()[position];
        let current = self.current.candidates()[position];
        assert_eq!(
            initial, current,
            "Expected no change at {position}, but candidates changed from {initial:?} to {current:?}"
        );
        self
    }

    /// Asserts that nothing at all changed.
    ///
    /// # Panics
    ///
    /// Panics if the state differs from the initial state.
    #[track_caller]
    pub fn assert_unchanged(self) -> Self {
        assert_eq!(self.initial, self.current, "Expected the state to be unchanged");
        self
    }

    /// Asserts that an element is confirmed.
    ///
    /// # Panics
    ///
    /// Panics if it is not.
    #[track_caller]
    pub fn assert_confirmed(self, letter: char) -> Self {
        let knowledge = self.current.knowledge_of(elem(letter));
        assert!(
            knowledge.is_confirmed(),
            "Expected {letter} to be confirmed, but knowledge is {knowledge:?}"
        );
        self
    }

    /// Asserts that an element is eliminated and possible nowhere.
    ///
    /// # Panics
    ///
    /// Panics if it is not.
    #[track_caller]
    pub fn assert_eliminated(self, letter: char) -> Self {
        let element = elem(letter);
        let knowledge = self.current.knowledge_of(element);
        assert!(
            knowledge.is_eliminated(),
            "Expected {letter} to be eliminated, but knowledge is {knowledge:?}"
        );
        let positions = self.current.candidates().positions_of(element);
        assert!(
            positions.is_empty(),
            "Expected {letter} to be possible nowhere, but it is possible at {positions:?}"
        );
        self
    }

    /// Asserts that nothing is known about an element's presence.
    ///
    /// # Panics
    ///
    /// Panics if it was confirmed or eliminated.
    #[track_caller]
    pub fn assert_presence_unknown(self, letter: char) -> Self {
        let knowledge = self.current.knowledge_of(elem(letter));
        assert!(
            knowledge.presence().is_unknown(),
            "Expected presence of {letter} to be unknown, but knowledge is {knowledge:?}"
        );
        self
    }

    /// Asserts the known exact count of an element.
    ///
    /// # Panics
    ///
    /// Panics if the count is unknown or different.
    #[track_caller]
    pub fn assert_exact_count(self, letter: char, count: u8) -> Self {
        let known = self.current.exact_count(elem(letter));
        assert_eq!(
            known,
            Some(count),
            "Expected {letter} to occur exactly {count} times, but known count is {known:?}"
        );
        self
    }

    /// Asserts that the current candidates keep every element the exhaustive
    /// solver finds possible for the recorded history.
    ///
    /// # Panics
    ///
    /// Panics if the rule removed an element some surviving code needs.
    #[track_caller]
    pub fn assert_sound(self) -> Self {
        let code_length = self.current.code_length();
        let history = History::from_records(
            code_length,
            self.current
                .records()
                .iter()
                .map(|r| (r.guess().clone(), r.feedback())),
        )
        .unwrap();
        let alphabet = Alphabet::letters(self.current.alphabet_size());
        let exact: PositionCandidates = ExhaustiveSolver::new(&alphabet, code_length)
            .valid_choices(&history)
            .unwrap();
        assert!(
            self.current.candidates().is_superset(&exact),
            "Expected candidates {:?} to contain the solver's {exact:?}",
            self.current.candidates()
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::BoxedRule;

    #[derive(Debug)]
    struct NoOpRule;

    impl Rule for NoOpRule {
        fn name(&self) -> &'static str {
            "no-op"
        }

        fn clone_box(&self) -> BoxedRule {
            Box::new(NoOpRule)
        }

        fn apply(&self, _state: &mut DeductionState) -> Result<bool, SolverError> {
            Ok(false)
        }
    }

    #[derive(Debug)]
    struct LockFirstRule;

    impl Rule for LockFirstRule {
        fn name(&self) -> &'static str {
            "lock first"
        }

        fn clone_box(&self) -> BoxedRule {
            Box::new(LockFirstRule)
        }

        fn apply(&self, state: &mut DeductionState) -> Result<bool, SolverError> {
            Ok(state.lock(0, elem('A'))?)
        }
    }

    #[test]
    fn test_no_op_rule_leaves_state_unchanged() {
        RuleTester::new(6, 4)
            .with_record("ABCD", 0, 1)
            .apply_once(&NoOpRule)
            .assert_unchanged()
            .assert_no_change(0)
            .assert_presence_unknown('A');
    }

    #[test]
    fn test_lock_rule_is_observed() {
        RuleTester::new(6, 4)
            .apply_until_stuck(&LockFirstRule)
            .assert_locked(0, 'A')
            .assert_removed_exact(0, "BCDEF")
            .assert_confirmed('A');
    }

    #[test]
    #[should_panic(expected = "Expected position 0 to be locked")]
    fn test_assert_locked_fails_when_open() {
        RuleTester::new(6, 4)
            .apply_once(&NoOpRule)
            .assert_locked(0, 'A');
    }

    #[test]
    #[should_panic(expected = "to contain the solver's")]
    fn test_assert_sound_detects_unsound_removal() {
        RuleTester::new(3, 2)
            .with_record("AB", 2, 0)
            .apply_once(&NoOpRule)
            .with_setup(|state| {
                state.remove(0, elem('A'));
                Ok(())
            })
            .assert_sound();
    }
}
