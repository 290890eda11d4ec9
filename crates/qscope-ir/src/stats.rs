//! Circuit statistics for dashboards and analytics consumers.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::circuit::Circuit;

/// Summary statistics over a circuit descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitStats {
    /// Total number of gate operations.
    pub total_gates: usize,
    /// Operation count per gate name.
    pub gate_counts: FxHashMap<String, usize>,
    /// Circuit depth: highest position + 1, or 0 for an empty circuit.
    pub depth: i64,
    /// Inferred circuit width.
    pub num_qubits: u32,
    /// Gates per (qubit × timeline slot).
    pub density: f64,
}

impl CircuitStats {
    /// Compute statistics for a circuit.
    pub fn from_circuit(circuit: &Circuit) -> Self {
        let mut gate_counts: FxHashMap<String, usize> = FxHashMap::default();
        for op in &circuit.gates {
            *gate_counts.entry(op.gate.clone()).or_insert(0) += 1;
        }

        let depth = circuit
            .gates
            .iter()
            .map(|op| op.position)
            .max()
            .map_or(0, |p| p + 1);
        let num_qubits = circuit.num_qubits();

        let slots = num_qubits as i64 * depth;
        let density = if slots > 0 {
            circuit.len() as f64 / slots as f64
        } else {
            0.0
        };

        Self {
            total_gates: circuit.len(),
            gate_counts,
            depth,
            num_qubits,
            density,
        }
    }
}
