use codebreak_core::{Alphabet, MAX_CODE_LENGTH};
use codebreak_solver::{BoxedHintSource, DeductionEngine, ExhaustiveSolver, MAX_CANDIDATE_SPACE};

use crate::GameError;

/// Default number of positions in a code.
pub const DEFAULT_CODE_LENGTH: usize = 4;

/// Default number of guesses allowed per round.
pub const DEFAULT_MAX_GUESSES: usize = 10;

/// Which strategy a round uses to compute hints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum HintSourceKind {
    /// Filter the whole candidate space. Exact.
    #[default]
    Exhaustive,
    /// Apply the deduction rules. Incremental, possibly weaker.
    Deduction,
}

impl HintSourceKind {
    /// Creates a hint source of this kind.
    #[must_use]
    pub fn build(self, alphabet: &Alphabet, code_length: usize) -> BoxedHintSource {
        match self {
            Self::Exhaustive => Box::new(ExhaustiveSolver::new(alphabet, code_length)),
            Self::Deduction => Box::new(DeductionEngine::new(alphabet, code_length)),
        }
    }
}

/// Parameters of a round.
///
/// # Examples
///
/// ```
/// use codebreak_game::{HintSourceKind, RoundConfig};
///
/// let config = RoundConfig::default();
/// assert_eq!(config.alphabet.len(), 6);
/// assert_eq!(config.code_length, 4);
/// assert_eq!(config.max_guesses, 10);
/// assert!(config.hint_source.is_exhaustive());
/// assert!(config.validate().is_ok());
///
/// let config = RoundConfig {
///     code_length: 0,
///     ..RoundConfig::default()
/// };
/// assert!(config.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConfig {
    /// The elements codes are built from.
    pub alphabet: Alphabet,
    /// Number of positions in a code.
    pub code_length: usize,
    /// Guesses allowed before the round is lost.
    pub max_guesses: usize,
    /// Strategy used by [`Round::hints`](crate::Round::hints).
    pub hint_source: HintSourceKind,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            code_length: DEFAULT_CODE_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
            hint_source: HintSourceKind::default(),
        }
    }
}

impl RoundConfig {
    /// Checks that a round can be played with this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] if the code length is out of
    /// range, no guesses are allowed, or the exhaustive solver would have to
    /// enumerate too many codes.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.code_length == 0 || self.code_length > MAX_CODE_LENGTH {
            return Err(GameError::InvalidConfig {
                reason: "code length out of range",
            });
        }
        if self.max_guesses == 0 {
            return Err(GameError::InvalidConfig {
                reason: "at least one guess must be allowed",
            });
        }
        if self.hint_source.is_exhaustive() && !self.fits_candidate_space() {
            return Err(GameError::InvalidConfig {
                reason: "candidate space too large for exhaustive hints",
            });
        }
        Ok(())
    }

    fn fits_candidate_space(&self) -> bool {
        u32::try_from(self.code_length)
            .ok()
            .and_then(|exp| self.alphabet.len().checked_pow(exp))
            .is_some_and(|size| size <= MAX_CANDIDATE_SPACE)
    }
}
