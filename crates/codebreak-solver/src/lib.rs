//! Hint engines for Mastermind-style code breaking.
//!
//! Two strategies compute, from a guess history, the elements still possible
//! at each code position:
//!
//! - [`ExhaustiveSolver`]: filters every code of the [`CandidateSpace`]
//!   against the history. Exact, and the authority on what is possible.
//! - [`DeductionEngine`]: applies an ordered battery of sound logical
//!   [rules](rule) to a [`DeductionState`]. Incremental and explainable, but
//!   may keep candidates the solver would remove.
//!
//! Both implement [`HintSource`], so consumers can switch between them.
//!
//! # Examples
//!
//! ```
//! use codebreak_core::{Alphabet, Code, Feedback, History};
//! use codebreak_solver::{DeductionEngine, ExhaustiveSolver, HintSource};
//!
//! let alphabet = Alphabet::letters(6);
//! let secret: Code = "ABCD".parse()?;
//! let mut history = History::new(4);
//! for guess in ["AAAA", "BBBB", "ABCD"] {
//!     let guess: Code = guess.parse()?;
//!     history.push(guess.clone(), Feedback::evaluate(&guess, &secret)).unwrap();
//! }
//!
//! let exact = ExhaustiveSolver::new(&alphabet, 4).valid_choices(&history).unwrap();
//! let deduced = DeductionEngine::new(&alphabet, 4).valid_choices(&history).unwrap();
//! assert_eq!(exact.proven_code(), Some(secret));
//! assert!(deduced.is_superset(&exact));
//! # Ok::<(), codebreak_core::ParseCodeError>(())
//! ```

pub use self::{
    candidate_space::*, deduction_engine::*, deduction_state::*, error::*, exhaustive_solver::*,
    hint_source::*, knowledge::*, rule_battery::*,
};

mod candidate_space;
mod deduction_engine;
mod deduction_state;
mod error;
mod exhaustive_solver;
mod hint_source;
mod knowledge;
pub mod rule;
mod rule_battery;

#[cfg(test)]
mod testing;
