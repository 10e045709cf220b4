//! Feedback evaluation for a guess against a secret.
//!
//! Feedback counts exact matches (right element, right position) and partial
//! matches (right element, wrong position). Both the exhaustive solver and the
//! game compute feedback through [`Feedback::evaluate`], so repeated elements
//! are scored identically everywhere.

use std::fmt::{self, Display};

use crate::{Code, ContractViolation, MAX_CODE_LENGTH, element::MAX_ELEMENTS};

/// The `(exact, partial)` score of a guess.
///
/// # Examples
///
/// ```
/// use codebreak_core::{Code, Feedback};
///
/// let guess: Code = "AABB".parse()?;
/// let secret: Code = "ABCA".parse()?;
///
/// let feedback = Feedback::evaluate(&guess, &secret);
/// assert_eq!(feedback, Feedback::new(1, 2));
/// assert_eq!(feedback.total(), 3);
/// # Ok::<(), codebreak_core::ParseCodeError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

impl Feedback {
    /// Creates feedback from raw counts.
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// Feedback of a guess identical to a secret of `length` positions.
    ///
    /// # Panics
    ///
    /// Panics if `length` does not fit in a `u8`.
    #[must_use]
    pub fn solved(length: usize) -> Self {
        let exact = u8::try_from(length).expect("code length fits in u8");
        Self::new(exact, 0)
    }

    /// Number of exact matches.
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of partial matches.
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Number of guessed elements present in the secret, exact or partial.
    #[must_use]
    pub const fn total(self) -> u8 {
        self.exact + self.partial
    }

    /// Returns `true` if every one of `length` positions matched exactly.
    #[must_use]
    pub fn is_solved(self, length: usize) -> bool {
        usize::from(self.exact) == length
    }

    /// Checks that the feedback is possible for codes of `length` positions.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::InvalidFeedback`] if
    /// `exact + partial > length`.
    pub fn check(self, length: usize) -> Result<(), ContractViolation> {
        if usize::from(self.exact) + usize::from(self.partial) > length {
            return Err(ContractViolation::InvalidFeedback {
                feedback: self,
                code_length: length,
            });
        }
        Ok(())
    }

    /// Scores `guess` against `secret`.
    ///
    /// Exact matches are counted first and removed from both sides; each
    /// remaining guess element, in position order, then scores a partial
    /// match if an unmatched instance is left in the secret, consuming it.
    ///
    /// # Panics
    ///
    /// Panics if the codes have different lengths or are longer than
    /// [`MAX_CODE_LENGTH`].
    #[must_use]
    pub fn evaluate(guess: &Code, secret: &Code) -> Self {
        assert_eq!(
            guess.len(),
            secret.len(),
            "guess and secret must have the same length"
        );
        assert!(
            secret.len() <= MAX_CODE_LENGTH,
            "code length {} exceeds {MAX_CODE_LENGTH}",
            secret.len()
        );

        let mut remaining = [0u8; MAX_ELEMENTS];
        let mut exact = 0;
        for (g, s) in guess.iter().zip(secret.iter()) {
            if g == s {
                exact += 1;
            } else {
                remaining[s.index()] += 1;
            }
        }

        let mut partial = 0;
        for (g, s) in guess.iter().zip(secret.iter()) {
            if g != s && remaining[g.index()] > 0 {
                remaining[g.index()] -= 1;
                partial += 1;
            }
        }

        Self { exact, partial }
    }

    /// Scores `guess` against `secret`, reporting bad lengths as errors.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::LengthMismatch`] if the lengths differ,
    /// or [`ContractViolation::InvalidCodeLength`] if the codes are longer
    /// than [`MAX_CODE_LENGTH`].
    pub fn try_evaluate(guess: &Code, secret: &Code) -> Result<Self, ContractViolation> {
        if guess.len() != secret.len() {
            return Err(ContractViolation::LengthMismatch {
                expected: secret.len(),
                actual: guess.len(),
            });
        }
        if secret.len() > MAX_CODE_LENGTH {
            return Err(ContractViolation::InvalidCodeLength {
                length: secret.len(),
            });
        }
        Ok(Self::evaluate(guess, secret))
    }
}

impl Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.exact, self.partial)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Element;

    fn score(guess: &str, secret: &str) -> Feedback {
        Feedback::evaluate(&guess.parse().unwrap(), &secret.parse().unwrap())
    }

    #[test]
    fn test_exact_and_partial() {
        assert_eq!(score("ABCD", "ABCD"), Feedback::new(4, 0));
        assert_eq!(score("ABCD", "DCBA"), Feedback::new(0, 4));
        assert_eq!(score("ABCD", "EEEE"), Feedback::new(0, 0));
        assert_eq!(score("ABEF", "ABCD"), Feedback::new(2, 0));
    }

    #[test]
    fn test_repeated_elements_do_not_double_count() {
        // Only one A in the secret: one exact, no partial for the other As.
        assert_eq!(score("AAAA", "ABCD"), Feedback::new(1, 0));
        // Exact match consumes the secret's A before the partial pass.
        assert_eq!(score("AABB", "ABCA"), Feedback::new(1, 2));
        assert_eq!(score("ABBB", "BAAA"), Feedback::new(0, 2));
        assert_eq!(score("CAAA", "AACC"), Feedback::new(1, 2));
    }

    #[test]
    fn test_single_element_alphabet() {
        let only = Code::repeated(Element::new(0), 5);
        assert_eq!(Feedback::evaluate(&only, &only), Feedback::solved(5));
    }

    #[test]
    fn test_try_evaluate_rejects_length_mismatch() {
        let err = Feedback::try_evaluate(&"ABC".parse().unwrap(), &"ABCD".parse().unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            ContractViolation::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_rejects_overlong_codes() {
        let long = Code::repeated(Element::new(0), 300);
        assert_eq!(
            Feedback::try_evaluate(&long, &long),
            Err(ContractViolation::InvalidCodeLength { length: 300 })
        );
        let longest = Code::repeated(Element::new(1), MAX_CODE_LENGTH);
        assert_eq!(
            Feedback::evaluate(&longest, &longest),
            Feedback::solved(MAX_CODE_LENGTH)
        );
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_evaluate_panics_on_overlong_codes() {
        let long = Code::repeated(Element::new(0), 300);
        let _ = Feedback::evaluate(&long, &long);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_evaluate_panics_on_length_mismatch() {
        let _ = score("AB", "ABC");
    }

    #[test]
    fn test_check() {
        assert!(Feedback::new(2, 2).check(4).is_ok());
        assert!(Feedback::new(3, 2).check(4).unwrap_err().is_invalid_feedback());
        assert!(Feedback::solved(4).is_solved(4));
        assert!(!Feedback::new(3, 1).is_solved(4));
    }

    fn code_pair() -> impl Strategy<Value = (Code, Code)> {
        (1usize..=8, 1usize..=6).prop_flat_map(|(alphabet, length)| {
            let code = prop::collection::vec(0..alphabet, length)
                .prop_map(|v| v.into_iter().map(Element::new).collect::<Code>());
            (code.clone(), code)
        })
    }

    proptest! {
        #[test]
        fn prop_total_bounded_by_length((guess, secret) in code_pair()) {
            let feedback = Feedback::evaluate(&guess, &secret);
            prop_assert!(usize::from(feedback.total()) <= guess.len());
            prop_assert!(feedback.check(guess.len()).is_ok());
        }

        #[test]
        fn prop_identical_codes_are_solved((code, _) in code_pair()) {
            prop_assert_eq!(Feedback::evaluate(&code, &code), Feedback::solved(code.len()));
        }

        #[test]
        fn prop_evaluate_is_deterministic((guess, secret) in code_pair()) {
            prop_assert_eq!(
                Feedback::evaluate(&guess, &secret),
                Feedback::evaluate(&guess, &secret)
            );
        }

        #[test]
        fn prop_total_matches_multiset_overlap((guess, secret) in code_pair()) {
            let overlap: usize = guess
                .distinct()
                .iter()
                .map(|e| guess.count(e).min(secret.count(e)))
                .sum();
            prop_assert_eq!(usize::from(Feedback::evaluate(&guess, &secret).total()), overlap);
        }
    }
}
