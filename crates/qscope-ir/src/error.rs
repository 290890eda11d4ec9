//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur while interpreting a circuit descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// The gate name is not in the closed gate set.
    #[error("Unknown gate '{0}'")]
    UnknownGate(String),

    /// A two-qubit gate arrived without its target qubit.
    #[error("Gate '{gate}' requires a target qubit but none was given")]
    MissingTarget {
        /// Name of the offending gate.
        gate: String,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
