//! Round management for Mastermind-style code breaking.
//!
//! A [`Round`] holds a secret, scores submitted guesses, tracks whether the
//! round is won or lost, and answers hint queries through a
//! [`HintSource`](codebreak_solver::HintSource) chosen by [`RoundConfig`].
//! Generating secrets is left to the caller.
//!
//! # Examples
//!
//! ```
//! use codebreak_core::Code;
//! use codebreak_game::{HintSourceKind, Round, RoundConfig};
//!
//! let config = RoundConfig {
//!     max_guesses: 6,
//!     hint_source: HintSourceKind::Deduction,
//!     ..RoundConfig::default()
//! };
//! let mut round = Round::new(config, "CAFE".parse()?)?;
//! round.submit_guess(&"ABCD".parse()?)?;
//! assert_eq!(round.guesses_remaining(), 5);
//!
//! let hints = round.hints()?;
//! assert_eq!(hints.len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{config::*, error::*, round::*};

mod config;
mod error;
mod round;
