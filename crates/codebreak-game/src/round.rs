use codebreak_core::{Code, ContractViolation, Feedback, History, PositionCandidates};
use codebreak_solver::BoxedHintSource;

use crate::{GameError, RoundConfig};

/// Progress of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum RoundStatus {
    /// Guesses are still accepted.
    InProgress,
    /// The secret was guessed.
    Won,
    /// The guess limit was reached without finding the secret.
    Lost,
}

/// Result of submitting a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// Score of the guess against the secret.
    pub feedback: Feedback,
    /// Status of the round after the guess.
    pub status: RoundStatus,
    /// Guesses left before the round is lost.
    pub guesses_remaining: usize,
}

/// A single round of code breaking against a fixed secret.
///
/// The round scores guesses, tracks the history and answers hint queries
/// through its [`HintSource`](codebreak_solver::HintSource).
///
/// # Examples
///
/// ```
/// use codebreak_core::Code;
/// use codebreak_game::{Round, RoundConfig, RoundStatus};
///
/// let secret: Code = "ABCD".parse()?;
/// let mut round = Round::new(RoundConfig::default(), secret)?;
///
/// let outcome = round.submit_guess(&"ABDC".parse()?)?;
/// assert_eq!((outcome.feedback.exact(), outcome.feedback.partial()), (2, 2));
/// assert!(outcome.status.is_in_progress());
///
/// let hints = round.hints()?;
/// assert!(hints[0].contains(codebreak_core::Element::new(0)));
///
/// let outcome = round.submit_guess(&"ABCD".parse()?)?;
/// assert_eq!(outcome.status, RoundStatus::Won);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Round {
    config: RoundConfig,
    secret: Code,
    history: History,
    status: RoundStatus,
    hint_source: BoxedHintSource,
}

impl Round {
    /// Starts a round using the hint source selected by the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] if the configuration is rejected
    /// by [`RoundConfig::validate`], or [`GameError::Contract`] if the secret
    /// does not fit the configured length and alphabet.
    pub fn new(config: RoundConfig, secret: Code) -> Result<Self, GameError> {
        let hint_source = config
            .hint_source
            .build(&config.alphabet, config.code_length);
        Self::with_hint_source(config, secret, hint_source)
    }

    /// Starts a round answering hint queries with `hint_source`.
    ///
    /// The source is reset and queried once with an empty history, which
    /// must allow every element of the configured alphabet at each position.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new). Also returns [`GameError::Solver`] if the
    /// source fails on an empty history, and [`GameError::InvalidConfig`] if
    /// it was built for another alphabet or code length.
    pub fn with_hint_source(
        config: RoundConfig,
        secret: Code,
        mut hint_source: BoxedHintSource,
    ) -> Result<Self, GameError> {
        config.validate()?;
        secret.check(config.code_length, config.alphabet.len())?;
        hint_source.reset();
        let initial = hint_source.valid_choices(&History::new(config.code_length))?;
        if initial != PositionCandidates::full(config.alphabet.len(), config.code_length) {
            return Err(GameError::InvalidConfig {
                reason: "hint source does not match the round's alphabet and code length",
            });
        }
        log::info!(
            "round started: {} elements, length {}, {} guesses, {} hints",
            config.alphabet.len(),
            config.code_length,
            config.max_guesses,
            hint_source.name()
        );
        Ok(Self {
            history: History::new(config.code_length),
            config,
            secret,
            status: RoundStatus::InProgress,
            hint_source,
        })
    }

    /// Scores `guess` against the secret and records it.
    ///
    /// # Errors
    ///
    /// - [`GameError::RoundOver`] if the round is already won or lost.
    /// - [`GameError::Contract`] if the guess has the wrong length, uses an
    ///   element outside the alphabet, or was already submitted.
    pub fn submit_guess(&mut self, guess: &Code) -> Result<GuessOutcome, GameError> {
        if !self.status.is_in_progress() {
            return Err(GameError::RoundOver);
        }
        guess.check(self.config.code_length, self.config.alphabet.len())?;
        if self.history.contains_guess(guess) {
            return Err(ContractViolation::DuplicateGuess.into());
        }

        let feedback = Feedback::evaluate(guess, &self.secret);
        self.history.push(guess.clone(), feedback)?;

        if feedback.is_solved(self.config.code_length) {
            self.finish(RoundStatus::Won);
        } else if self.guesses_remaining() == 0 {
            self.finish(RoundStatus::Lost);
        }

        Ok(GuessOutcome {
            feedback,
            status: self.status,
            guesses_remaining: self.guesses_remaining(),
        })
    }

    /// Returns the elements still possible at each position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Solver`] if the hint source fails. A history
    /// scored by the round itself is always consistent, so a contradiction
    /// here means a caller-supplied hint source is unsound.
    pub fn hints(&mut self) -> Result<PositionCandidates, GameError> {
        let hints = self
            .hint_source
            .valid_choices(&self.history)
            .inspect_err(|err| {
                log::error!("{} hint source failed: {err}", self.hint_source.name());
            })?;
        Ok(hints)
    }

    /// Starts a new round with the same configuration and a new secret.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Contract`] if the secret does not fit the
    /// configured length and alphabet. The current round is left unchanged.
    pub fn restart(&mut self, secret: Code) -> Result<(), GameError> {
        secret.check(self.config.code_length, self.config.alphabet.len())?;
        self.secret = secret;
        self.history = History::new(self.config.code_length);
        self.status = RoundStatus::InProgress;
        self.hint_source.reset();
        log::info!("round restarted");
        Ok(())
    }

    fn finish(&mut self, status: RoundStatus) {
        self.status = status;
        log::info!(
            "round {} after {} guesses",
            if status.is_won() { "won" } else { "lost" },
            self.history.len()
        );
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Returns the guesses submitted so far.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns how many more guesses are accepted.
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.history.len())
    }

    /// Returns the round configuration.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Returns the secret code.
    #[must_use]
    pub fn secret(&self) -> &Code {
        &self.secret
    }
}
