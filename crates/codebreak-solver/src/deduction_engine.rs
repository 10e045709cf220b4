use codebreak_core::{
    Alphabet, Code, ContractViolation, Element, Feedback, GuessRecord, History, MAX_CODE_LENGTH,
    PositionCandidates,
};

use crate::{
    DeductionState, ElementKnowledge, HintSource, RuleBattery, RuleStats, SolverError,
    rule::{self, BoxedRule},
};

/// An incremental hint source that derives candidates with logical rules.
///
/// Every analyzed guess is appended to the engine's own history and the rule
/// battery is run to a fixpoint. The rules are sound, so the engine never
/// removes a candidate the [`ExhaustiveSolver`](crate::ExhaustiveSolver)
/// would keep, but it may keep candidates the solver removes.
///
/// Once a contradiction is reported, every later analysis or query returns
/// the same error until [`reset`](HintSource::reset), or until
/// [`valid_choices`](HintSource::valid_choices) receives a history that does
/// not extend the analyzed one.
///
/// # Examples
///
/// ```
/// use codebreak_core::{Alphabet, Code, Element, Feedback};
/// use codebreak_solver::DeductionEngine;
///
/// let mut engine = DeductionEngine::new(&Alphabet::letters(6), 4);
/// let secret: Code = "BADC".parse()?;
///
/// for guess in ["ABCD", "DCBA"] {
///     let guess: Code = guess.parse()?;
///     let feedback = Feedback::evaluate(&guess, &secret);
///     engine.analyze_guess(&guess, feedback).unwrap();
/// }
///
/// assert!(engine.is_confirmed(Element::new(0)));
/// assert!(engine.is_eliminated(Element::new(4)));
/// assert!(!engine.candidates()[0].contains(Element::new(0)));
/// # Ok::<(), codebreak_core::ParseCodeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DeductionEngine {
    alphabet_size: usize,
    code_length: usize,
    battery: RuleBattery,
    state: DeductionState,
    history: History,
    stats: RuleStats,
    contradiction: Option<SolverError>,
}

impl DeductionEngine {
    /// Creates an engine with all available rules.
    #[must_use]
    pub fn new(alphabet: &Alphabet, code_length: usize) -> Self {
        Self::with_rules(alphabet, code_length, rule::all_rules())
    }

    /// Creates an engine applying `rules` in the given order.
    #[must_use]
    pub fn with_rules(alphabet: &Alphabet, code_length: usize, rules: Vec<BoxedRule>) -> Self {
        let battery = RuleBattery::new(rules);
        let stats = battery.new_stats();
        Self {
            alphabet_size: alphabet.len(),
            code_length,
            battery,
            state: DeductionState::new(alphabet.len(), code_length),
            history: History::new(code_length),
            stats,
            contradiction: None,
        }
    }

    /// Analyzes one more guess and runs the rules to a fixpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contract`] if the engine's code length is out
    /// of range, the guess does not fit the engine, the feedback is
    /// impossible for the code length, or the guess was already analyzed
    /// this round. Returns [`SolverError::Contradiction`] if the history no
    /// longer admits a secret, and keeps returning it until the next reset.
    pub fn analyze_guess(&mut self, guess: &Code, feedback: Feedback) -> Result<(), SolverError> {
        if let Some(err) = self.contradiction {
            return Err(err);
        }
        self.check_code_length()?;
        guess.check(self.code_length, self.alphabet_size)?;
        if self.history.contains_guess(guess) {
            return Err(ContractViolation::DuplicateGuess.into());
        }
        self.history.push(guess.clone(), feedback)?;
        self.state.push_record(GuessRecord::new(guess.clone(), feedback));

        let steps_before = self.stats.total_steps();
        if let Err(err) = self.battery.run(&mut self.state, &mut self.stats) {
            log::debug!("analysis of {guess} {feedback} failed: {err}");
            self.contradiction = Some(err);
            return Err(err);
        }
        log::trace!(
            "analyzed {guess} {feedback}: {} rule steps, {} positions decided",
            self.stats.total_steps() - steps_before,
            self.state.candidates().locked_positions().len()
        );
        Ok(())
    }

    /// The current per-position candidates.
    #[must_use]
    pub fn candidates(&self) -> &PositionCandidates {
        self.state.candidates()
    }

    /// Everything known about `element`.
    #[must_use]
    pub fn knowledge(&self, element: Element) -> ElementKnowledge {
        self.state.knowledge_of(element)
    }

    /// Returns `true` if `element` is known to occur.
    #[must_use]
    pub fn is_confirmed(&self, element: Element) -> bool {
        self.state.is_confirmed(element)
    }

    /// Returns `true` if `element` is known not to occur.
    #[must_use]
    pub fn is_eliminated(&self, element: Element) -> bool {
        self.state.is_eliminated(element)
    }

    /// The known number of occurrences of `element`.
    #[must_use]
    pub fn exact_count(&self, element: Element) -> Option<u8> {
        self.state.exact_count(element)
    }

    /// The element proven to sit at `position`.
    #[must_use]
    pub fn deduced_element(&self, position: usize) -> Option<Element> {
        self.state.candidates().locked_element(position)
    }

    /// Every position whose element is proven.
    #[must_use]
    pub fn deduced_positions(&self) -> Vec<usize> {
        self.state.candidates().locked_positions()
    }

    /// Number of elements still possible at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not below the code length.
    #[must_use]
    pub fn possibility_count(&self, position: usize) -> usize {
        self.state.candidates()[position].len()
    }

    /// The guesses analyzed since the last reset.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// How often each rule made progress since the last reset.
    #[must_use]
    pub fn stats(&self) -> &RuleStats {
        &self.stats
    }

    /// The state the rules operate on.
    #[must_use]
    pub fn state(&self) -> &DeductionState {
        &self.state
    }

    /// The rule battery in application order.
    #[must_use]
    pub fn battery(&self) -> &RuleBattery {
        &self.battery
    }

    /// The contradiction reported since the last reset, if any.
    #[must_use]
    pub fn contradiction(&self) -> Option<SolverError> {
        self.contradiction
    }

    fn check_code_length(&self) -> Result<(), ContractViolation> {
        if self.code_length == 0 || self.code_length > MAX_CODE_LENGTH {
            return Err(ContractViolation::InvalidCodeLength {
                length: self.code_length,
            });
        }
        Ok(())
    }

    fn is_prefix_of(&self, history: &History) -> bool {
        history.records().starts_with(self.history.records())
    }
}

impl HintSource for DeductionEngine {
    fn name(&self) -> &'static str {
        "deduction"
    }

    fn reset(&mut self) {
        self.state = DeductionState::new(self.alphabet_size, self.code_length);
        self.history = History::new(self.code_length);
        self.stats = self.battery.new_stats();
        self.contradiction = None;
    }

    fn valid_choices(&mut self, history: &History) -> Result<PositionCandidates, SolverError> {
        self.check_code_length()?;
        if history.code_length() != self.code_length {
            return Err(ContractViolation::LengthMismatch {
                expected: self.code_length,
                actual: history.code_length(),
            }
            .into());
        }
        if !self.is_prefix_of(history) {
            log::debug!("history diverged from analyzed guesses, replaying");
            self.reset();
        }
        if let Some(err) = self.contradiction {
            return Err(err);
        }
        for record in &history.records()[self.history.len()..] {
            self.analyze_guess(record.guess(), record.feedback())?;
        }
        Ok(self.state.candidates().clone())
    }
}
