//! `qscope-sim` — exact statevector simulation for small circuits.
//!
//! Executes a `qscope_ir::Circuit` over the closed {H, X, Y, Z, I, CNOT}
//! gate set and derives the metric bundle the Qscope frontend renders:
//! per-qubit Bloch coordinates, the measurement-probability distribution,
//! purity/fidelity scalars, an entanglement estimate and Bell-pair
//! detection.
//!
//! The representation is deliberately dense — 2^n amplitudes, exact
//! arithmetic, no sampling noise — which keeps the engine trivial to
//! reason about at the interactive widths it targets (the default cap is
//! [`MAX_QUBITS`] qubits).
//!
//! # Quick start
//!
//! ```rust
//! use qscope_ir::{Circuit, GateKind, GateOp};
//! use qscope_sim::Simulator;
//!
//! // Bell state: H on q0, then CNOT(q0 → q1).
//! let circuit = Circuit::from_ops([
//!     GateOp::single(GateKind::H, 0u32, 0),
//!     GateOp::cnot(0u32, 1u32, 1),
//! ]);
//!
//! let result = Simulator::new().run(&circuit).unwrap();
//! assert!((result.entanglement - 1.0).abs() < 1e-9);
//! assert_eq!(result.entangled_pairs.len(), 1);
//! ```
//!
//! # Failure handling
//!
//! [`Simulator::run`] is the typed channel: malformed descriptors come
//! back as [`SimError`]. [`Simulator::simulate`] preserves the historical
//! frontend contract instead, absorbing any failure into the fixed
//! ground-state fallback result ([`SimulationResult::fallback`]).

pub mod error;
pub mod metrics;
pub mod result;
pub mod simulator;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use result::{
    BlochVector, EntangledPair, EntanglementClass, QubitState, SimulationResult,
};
pub use simulator::{MAX_QUBITS, Simulator, simulate};
pub use statevector::StateVector;
