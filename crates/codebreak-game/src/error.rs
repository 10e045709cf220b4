use codebreak_core::ContractViolation;
use codebreak_solver::SolverError;

/// Errors that can occur while playing a round.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum GameError {
    /// The hint source failed.
    #[display("hint source failed: {_0}")]
    Solver(#[from] SolverError),
    /// The caller broke an API contract, such as submitting a repeated guess.
    #[display("contract violation: {_0}")]
    Contract(#[from] ContractViolation),
    /// The round is already won or lost.
    #[display("the round is already over")]
    RoundOver,
    /// The round configuration cannot be played.
    #[display("invalid round configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration was rejected.
        reason: &'static str,
    },
}
