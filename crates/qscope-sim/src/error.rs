//! Error types for the simulation engine.

use qscope_ir::IrError;
use thiserror::Error;

/// Errors produced while executing a circuit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Circuit descriptor could not be interpreted.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] IrError),

    /// A gate references a qubit outside the state vector.
    #[error("Gate references qubit {qubit} but the state vector only has {n_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: u32,
        /// Width of the state vector.
        n_qubits: u32,
    },

    /// A CNOT uses the same qubit as control and target.
    #[error("CNOT control and target are both qubit {qubit}")]
    DuplicateQubit {
        /// The duplicated qubit index.
        qubit: u32,
    },

    /// The circuit is wider than the simulator allows.
    #[error("Circuit has {n_qubits} qubits but the simulator only supports {max_qubits}")]
    CircuitTooWide {
        /// Inferred circuit width.
        n_qubits: u32,
        /// Configured width cap.
        max_qubits: u32,
    },
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
