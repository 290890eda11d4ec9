//! Qscope Circuit Intermediate Representation
//!
//! This crate provides the data structures for describing the small
//! gate-based circuits that the Qscope simulation core executes. It is the
//! boundary between the circuit editor (which produces JSON descriptors)
//! and the engine in `qscope-sim`.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] for addressing qubits by index
//! - **Gates**: [`GateKind`] — the closed set {H, X, Y, Z, I, CNOT} — and
//!   their canonical matrices ([`GateMatrix`])
//! - **Operations**: [`GateOp`] wire descriptors combining a gate name with
//!   its operands and timeline position
//! - **Circuit**: [`Circuit`] container with qubit-count inference and
//!   stable position ordering
//! - **Statistics**: [`CircuitStats`] summary data for analytics consumers
//!
//! # Example: Building a Bell Circuit
//!
//! ```rust
//! use qscope_ir::{Circuit, GateKind, GateOp};
//!
//! let circuit = Circuit::from_ops([
//!     GateOp::single(GateKind::H, 0u32, 0),
//!     GateOp::cnot(0u32, 1u32, 1),
//! ]);
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.sorted_ops().len(), 2);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod op;
pub mod qubit;
pub mod stats;

pub use circuit::{Circuit, MIN_QUBITS};
pub use error::{IrError, IrResult};
pub use gate::{GateKind, GateMatrix};
pub use op::GateOp;
pub use qubit::QubitId;
pub use stats::CircuitStats;
