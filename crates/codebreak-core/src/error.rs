//! Error types shared by the deduction crates.

use crate::{Element, Feedback};

/// A violation of an API contract by the caller.
///
/// These errors indicate a programming error in the caller (for example a
/// guess of the wrong length) and are not recoverable within the round.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum ContractViolation {
    /// A code has a different length than the one the round was built for.
    #[display("code length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Length required by the receiver.
        expected: usize,
        /// Length of the offending code.
        actual: usize,
    },
    /// A code contains an element outside the alphabet.
    #[display("element {element} is outside an alphabet of {alphabet_size} elements")]
    UnknownElement {
        /// The offending element.
        element: Element,
        /// Size of the alphabet in use.
        alphabet_size: usize,
    },
    /// Feedback counts exceed the code length.
    #[display("feedback {feedback} is impossible for code length {code_length}")]
    InvalidFeedback {
        /// The offending feedback.
        feedback: Feedback,
        /// The code length in use.
        code_length: usize,
    },
    /// The same guess was submitted twice within one round.
    #[display("guess was already analyzed in this round")]
    DuplicateGuess,
    /// The alphabet is empty, too large, or has repeated names.
    #[display("invalid alphabet: {reason}")]
    InvalidAlphabet {
        /// Human readable reason.
        reason: &'static str,
    },
    /// The code length is zero or too large.
    #[display("invalid code length {length}")]
    InvalidCodeLength {
        /// The offending length.
        length: usize,
    },
    /// The candidate space is too large to enumerate.
    #[display("search space of {alphabet_size}^{code_length} codes is too large to enumerate")]
    SearchSpaceTooLarge {
        /// Size of the alphabet.
        alphabet_size: usize,
        /// Length of the codes.
        code_length: usize,
    },
}

/// A guess/feedback history that admits no secret code.
///
/// Under correct feedback computation this is unreachable; it signals an
/// upstream defect and must never be coerced into a fallback value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum ContradictoryHistory {
    /// No code of the candidate space matches every history entry.
    #[display("no code is consistent with the history")]
    NoSurvivingCodes,
    /// A position has no remaining candidate.
    #[display("position {position} has no remaining candidate")]
    EmptyPosition {
        /// The emptied position.
        position: usize,
    },
    /// An element must be present but fits nowhere.
    #[display("element {element} is confirmed but has no possible position")]
    MissingElement {
        /// The confirmed element.
        element: Element,
    },
    /// An element was found both present and absent.
    #[display("element {element} is both confirmed and eliminated")]
    PresenceConflict {
        /// The conflicting element.
        element: Element,
    },
    /// Two different exact counts were inferred for the same element.
    #[display("element {element} occurs {known} times but {inferred} times was inferred")]
    CountConflict {
        /// The conflicting element.
        element: Element,
        /// Previously established count.
        known: u8,
        /// Newly inferred count.
        inferred: u8,
    },
    /// More positions are locked to an element than it occurs.
    #[display("element {element} is locked at {locked} positions but occurs {count} times")]
    CountExceeded {
        /// The over-locked element.
        element: Element,
        /// Known exact count.
        count: u8,
        /// Number of positions locked to the element.
        locked: usize,
    },
    /// Two guesses differing in two positions report an impossible exact change.
    #[display("exact matches changed by {delta} between guesses differing in two positions")]
    ImpossibleExactChange {
        /// Signed change in exact matches.
        delta: i32,
    },
}
