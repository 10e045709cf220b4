use std::sync::Arc;

use codebreak_core::{
    Alphabet, Code, ContractViolation, ContradictoryHistory, Feedback, History, MAX_CODE_LENGTH,
    PositionCandidates,
};

use crate::{CandidateSpace, CandidateSpaceCache, HintSource, SolverError};

/// The ground-truth hint source: filters every possible code against the history.
///
/// A code survives when, for every record, evaluating the recorded guess
/// against it reproduces the recorded feedback exactly. The candidates of a
/// position are the elements some survivor has there, so the solver is
/// exactly as strong as the information in the history.
///
/// The candidate space is generated lazily on the first query that needs it
/// and shared
/// through an `Arc`, optionally with other solvers via a
/// [`CandidateSpaceCache`].
///
/// # Examples
///
/// ```
/// use codebreak_core::{Alphabet, Code, Feedback, History};
/// use codebreak_solver::ExhaustiveSolver;
///
/// let secret: Code = "ABCD".parse()?;
/// let mut history = History::new(4);
/// for guess in ["AAAA", "BBBB"] {
///     let guess: Code = guess.parse()?;
///     history.push(guess.clone(), Feedback::evaluate(&guess, &secret)).unwrap();
/// }
///
/// let mut solver = ExhaustiveSolver::new(&Alphabet::letters(6), 4);
/// let survivors = solver.survivors(&history).unwrap();
/// assert!(survivors.contains(&secret));
/// assert!(survivors.iter().all(|code| code.count(secret[0]) == 1));
/// # Ok::<(), codebreak_core::ParseCodeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustiveSolver {
    alphabet_size: usize,
    code_length: usize,
    space: Option<Arc<CandidateSpace>>,
}

impl ExhaustiveSolver {
    /// Creates a solver for codes of `code_length` over `alphabet`.
    #[must_use]
    pub fn new(alphabet: &Alphabet, code_length: usize) -> Self {
        Self {
            alphabet_size: alphabet.len(),
            code_length,
            space: None,
        }
    }

    /// Creates a solver whose candidate space comes from `cache`.
    ///
    /// # Errors
    ///
    /// Returns the error of [`CandidateSpace::generate`].
    pub fn with_cache(
        alphabet: &Alphabet,
        code_length: usize,
        cache: &CandidateSpaceCache,
    ) -> Result<Self, ContractViolation> {
        let space = cache.get_or_generate(alphabet.len(), code_length)?;
        Ok(Self {
            alphabet_size: alphabet.len(),
            code_length,
            space: Some(space),
        })
    }

    /// Size of the alphabet.
    #[must_use]
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Length of the codes.
    #[must_use]
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    fn space(&mut self) -> Result<Arc<CandidateSpace>, ContractViolation> {
        if let Some(space) = &self.space {
            return Ok(Arc::clone(space));
        }
        let space = Arc::new(CandidateSpace::generate(
            self.alphabet_size,
            self.code_length,
        )?);
        self.space = Some(Arc::clone(&space));
        Ok(space)
    }

    fn check_history(&self, history: &History) -> Result<(), ContractViolation> {
        if self.code_length == 0 || self.code_length > MAX_CODE_LENGTH {
            return Err(ContractViolation::InvalidCodeLength {
                length: self.code_length,
            });
        }
        if history.code_length() != self.code_length {
            return Err(ContractViolation::LengthMismatch {
                expected: self.code_length,
                actual: history.code_length(),
            });
        }
        for record in history {
            record.guess().check(self.code_length, self.alphabet_size)?;
            record.feedback().check(self.code_length)?;
        }
        Ok(())
    }

    fn matches(code: &Code, history: &History) -> bool {
        history
            .iter()
            .all(|record| Feedback::evaluate(record.guess(), code) == record.feedback())
    }

    /// All codes consistent with `history`, in lexicographic order.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contract`] if the history does not fit the
    /// solver's parameters or the space is too large to enumerate.
    pub fn survivors(&mut self, history: &History) -> Result<Vec<Code>, SolverError> {
        self.check_history(history)?;
        let space = self.space()?;
        let survivors: Vec<Code> = space
            .codes()
            .iter()
            .filter(|code| Self::matches(code, history))
            .cloned()
            .collect();
        log::debug!(
            "{} surviving codes after {} guesses",
            survivors.len(),
            history.len()
        );
        Ok(survivors)
    }

    /// Number of codes consistent with `history`.
    ///
    /// # Errors
    ///
    /// Same as [`survivors`](Self::survivors).
    pub fn count_survivors(&mut self, history: &History) -> Result<usize, SolverError> {
        self.check_history(history)?;
        let space = self.space()?;
        Ok(space
            .codes()
            .iter()
            .filter(|code| Self::matches(code, history))
            .count())
    }

    /// The secret, when exactly one code survives `history`.
    ///
    /// # Errors
    ///
    /// Same as [`valid_choices`](HintSource::valid_choices).
    pub fn proven_code(&mut self, history: &History) -> Result<Option<Code>, SolverError> {
        Ok(self.valid_choices(history)?.proven_code())
    }
}

impl HintSource for ExhaustiveSolver {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn reset(&mut self) {
        // Survivors are recomputed from the full history on every query.
    }

    fn valid_choices(&mut self, history: &History) -> Result<PositionCandidates, SolverError> {
        self.check_history(history)?;
        if history.is_empty() {
            return Ok(PositionCandidates::full(self.alphabet_size, self.code_length));
        }
        let survivors = self.survivors(history)?;
        if survivors.is_empty() {
            log::debug!("history admits no code");
            return Err(ContradictoryHistory::NoSurvivingCodes.into());
        }
        Ok(PositionCandidates::from_codes(self.code_length, &survivors))
    }
}
