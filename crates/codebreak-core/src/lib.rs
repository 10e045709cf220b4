//! Core data structures for Mastermind-style code breaking.
//!
//! This crate provides the fundamental types shared by the hint engines and
//! the round session:
//!
//! - [`Element`] and [`Alphabet`]: the finite set of values a code is built from
//! - [`ElementSet`]: a compact bitset of elements
//! - [`Code`]: an ordered, fixed-length sequence of elements
//! - [`Feedback`]: the `(exact, partial)` score of a guess, and its evaluator
//! - [`GuessRecord`] and [`History`]: the append-only record of a round
//! - [`PositionCandidates`]: the elements still possible at each position
//! - [`ContractViolation`] and [`ContradictoryHistory`]: the two error families
//!
//! # Examples
//!
//! ```
//! use codebreak_core::{Code, Feedback, History};
//!
//! let secret: Code = "ABCD".parse()?;
//! let mut history = History::new(secret.len());
//!
//! for guess in ["AAAA", "BBBB", "ABCD"] {
//!     let guess: Code = guess.parse()?;
//!     let feedback = Feedback::evaluate(&guess, &secret);
//!     history.push(guess, feedback).unwrap();
//! }
//!
//! assert!(history.latest().unwrap().feedback().is_solved(4));
//! # Ok::<(), codebreak_core::ParseCodeError>(())
//! ```

pub use self::{
    code::{Code, MAX_CODE_LENGTH, ParseCodeError},
    element::{Alphabet, Element, MAX_ELEMENTS},
    element_set::ElementSet,
    error::{ContractViolation, ContradictoryHistory},
    feedback::Feedback,
    history::{GuessRecord, History},
    position_candidates::PositionCandidates,
};

pub mod element_set;

mod code;
mod element;
mod error;
mod feedback;
mod history;
mod position_candidates;
