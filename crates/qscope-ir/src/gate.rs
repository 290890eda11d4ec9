//! Quantum gate kinds and their canonical matrices.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;

use crate::error::{IrError, IrResult};

/// A 2×2 unitary matrix over complex entries.
///
/// Entries are always [`Complex64`], even for purely real gates, so that
/// gates with imaginary entries (Y) flow through the same arithmetic as
/// everything else.
pub type GateMatrix = [[Complex64; 2]; 2];

/// The closed set of gates understood by the simulation core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Identity gate.
    I,
    /// Controlled-NOT gate.
    Cnot,
}

impl GateKind {
    /// Get the wire name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::H => "H",
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
            GateKind::I => "I",
            GateKind::Cnot => "CNOT",
        }
    }

    /// Resolve a wire name into a gate kind.
    ///
    /// Unknown names are an error; the gate set is closed, so this is the
    /// only place a malformed circuit descriptor can surface.
    pub fn from_name(name: &str) -> IrResult<GateKind> {
        match name {
            "H" => Ok(GateKind::H),
            "X" => Ok(GateKind::X),
            "Y" => Ok(GateKind::Y),
            "Z" => Ok(GateKind::Z),
            "I" => Ok(GateKind::I),
            "CNOT" => Ok(GateKind::Cnot),
            other => Err(IrError::UnknownGate(other.to_string())),
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            GateKind::H | GateKind::X | GateKind::Y | GateKind::Z | GateKind::I => 1,
            GateKind::Cnot => 2,
        }
    }

    /// Get the canonical 2×2 matrix for a single-qubit gate.
    ///
    /// Returns `None` for CNOT, which is applied as a basis permutation
    /// rather than a matrix.
    pub fn matrix(&self) -> Option<GateMatrix> {
        let re = |x: f64| Complex64::new(x, 0.0);
        let im = |y: f64| Complex64::new(0.0, y);
        match self {
            GateKind::H => Some([
                [re(FRAC_1_SQRT_2), re(FRAC_1_SQRT_2)],
                [re(FRAC_1_SQRT_2), re(-FRAC_1_SQRT_2)],
            ]),
            GateKind::X => Some([[re(0.0), re(1.0)], [re(1.0), re(0.0)]]),
            GateKind::Y => Some([[re(0.0), im(-1.0)], [im(1.0), re(0.0)]]),
            GateKind::Z => Some([[re(1.0), re(0.0)], [re(0.0), re(-1.0)]]),
            GateKind::I => Some([[re(1.0), re(0.0)], [re(0.0), re(1.0)]]),
            GateKind::Cnot => None,
        }
    }
}
