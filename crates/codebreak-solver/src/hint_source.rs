use std::fmt::Debug;

use codebreak_core::{History, PositionCandidates};

use crate::SolverError;

/// A strategy that computes per-position hints from a guess history.
///
/// Both [`ExhaustiveSolver`](crate::ExhaustiveSolver) and
/// [`DeductionEngine`](crate::DeductionEngine) implement this trait, so hint
/// consumers can be driven by either without knowing which one is in use.
///
/// # Examples
///
/// ```
/// use codebreak_core::{Alphabet, Code, Feedback, History};
/// use codebreak_solver::{DeductionEngine, ExhaustiveSolver, HintSource};
///
/// let alphabet = Alphabet::letters(6);
/// let secret: Code = "ABCD".parse()?;
/// let mut history = History::new(4);
/// let guess: Code = "ABCD".parse()?;
/// history.push(guess.clone(), Feedback::evaluate(&guess, &secret)).unwrap();
///
/// let mut sources: Vec<Box<dyn HintSource>> = vec![
///     Box::new(ExhaustiveSolver::new(&alphabet, 4)),
///     Box::new(DeductionEngine::new(&alphabet, 4)),
/// ];
/// for source in &mut sources {
///     let hints = source.valid_choices(&history).unwrap();
///     assert_eq!(hints.proven_code(), Some(secret.clone()), "{}", source.name());
/// }
/// # Ok::<(), codebreak_core::ParseCodeError>(())
/// ```
pub trait HintSource: Debug {
    /// Returns a short name identifying the strategy.
    fn name(&self) -> &'static str;

    /// Forgets everything derived from a previous round.
    fn reset(&mut self);

    /// Returns, for each position, the elements still possible given `history`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contract`] if the history does not fit the
    /// source's alphabet or code length, and [`SolverError::Contradiction`]
    /// if the history admits no secret code.
    fn valid_choices(&mut self, history: &History) -> Result<PositionCandidates, SolverError>;
}

/// A boxed hint source.
pub type BoxedHintSource = Box<dyn HintSource>;
