//! Error types for boundary checks.
//!
//! Building a trace never fails; these errors come from the guards callers
//! place in front of a build (input size) or in front of a replay (seeking).

use thiserror::Error;

/// Result type alias for fallible `lcs-trace` operations.
pub type Result<T> = std::result::Result<T, TraceError>;

/// Which of the two inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::First => f.write_str("first"),
            Operand::Second => f.write_str("second"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// An input is longer than the configured comfort limit.
    #[error("{operand} sequence has {len} characters, above the limit of {limit}")]
    InputTooLong {
        operand: Operand,
        len: usize,
        limit: usize,
    },

    /// A replay seek past the last step.
    #[error("step {requested} out of range for a trace of {len} steps")]
    StepOutOfRange { requested: usize, len: usize },
}
