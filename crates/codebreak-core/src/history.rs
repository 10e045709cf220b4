//! The append-only guess history of a round.

use crate::{Code, ContractViolation, Feedback};

/// An immutable guess together with the feedback it received.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    guess: Code,
    feedback: Feedback,
}

impl GuessRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(guess: Code, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// The guessed code.
    #[must_use]
    pub fn guess(&self) -> &Code {
        &self.guess
    }

    /// The feedback the guess received.
    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// The ordered guess records of one round.
///
/// Records can only be appended; a history is never edited or truncated
/// within a round. Every record has the history's code length and a
/// feedback that is possible for that length.
///
/// # Examples
///
/// ```
/// use codebreak_core::{Code, Feedback, History};
///
/// let secret: Code = "ABCD".parse()?;
/// let mut history = History::new(4);
///
/// let guess: Code = "AAAA".parse()?;
/// let feedback = Feedback::evaluate(&guess, &secret);
/// history.push(guess, feedback).unwrap();
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.records()[0].feedback(), Feedback::new(1, 0));
/// # Ok::<(), codebreak_core::ParseCodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    code_length: usize,
    records: Vec<GuessRecord>,
}

impl History {
    /// Creates an empty history for codes of `code_length` positions.
    #[must_use]
    pub fn new(code_length: usize) -> Self {
        Self {
            code_length,
            records: Vec::new(),
        }
    }

    /// Creates a history from `(guess, feedback)` pairs.
    ///
    /// # Errors
    ///
    /// Returns the first contract violation found, as [`push`](Self::push).
    pub fn from_records<I>(code_length: usize, records: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = (Code, Feedback)>,
    {
        let mut history = Self::new(code_length);
        for (guess, feedback) in records {
            history.push(guess, feedback)?;
        }
        Ok(history)
    }

    /// Code length of every record.
    #[must_use]
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Appends a record.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::LengthMismatch`] if the guess has the
    /// wrong length, or [`ContractViolation::InvalidFeedback`] if the
    /// feedback exceeds the code length.
    pub fn push(&mut self, guess: Code, feedback: Feedback) -> Result<(), ContractViolation> {
        if guess.len() != self.code_length {
            return Err(ContractViolation::LengthMismatch {
                expected: self.code_length,
                actual: guess.len(),
            });
        }
        feedback.check(self.code_length)?;
        self.records.push(GuessRecord::new(guess, feedback));
        Ok(())
    }

    /// All records in submission order.
    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    /// The most recent record.
    #[must_use]
    pub fn latest(&self) -> Option<&GuessRecord> {
        self.records.last()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no guess has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` if `guess` was already recorded.
    #[must_use]
    pub fn contains_guess(&self, guess: &Code) -> bool {
        self.records.iter().any(|r| r.guess() == guess)
    }

    /// Iterates over the records in submission order.
    pub fn iter(&self) -> std::slice::Iter<'_, GuessRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a GuessRecord;
    type IntoIter = std::slice::Iter<'a, GuessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
