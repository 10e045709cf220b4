use codebreak_core::{ContractViolation, ContradictoryHistory};

/// Errors reported by the hint engines.
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
pub enum SolverError {
    /// The caller broke an API contract.
    #[display("contract violation: {_0}")]
    Contract(#[from] ContractViolation),
    /// The history admits no secret code.
    #[display("contradictory history: {_0}")]
    Contradiction(#[from] ContradictoryHistory),
}
