//! Circuit container with qubit-count inference and position ordering.

use serde::{Deserialize, Serialize};

use crate::op::GateOp;

/// The minimum circuit width. A circuit that references fewer qubits is
/// still simulated on two so the editor always has a pair to render.
pub const MIN_QUBITS: u32 = 2;

/// A quantum circuit: an unordered collection of gate operations.
///
/// Ordering along the timeline is carried by each operation's `position`
/// field; [`Circuit::sorted_ops`] re-establishes it. Operations sharing a
/// position are assumed pre-resolved by the editor and are not
/// deduplicated here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// The gate operations, in insertion order.
    pub gates: Vec<GateOp>,
}

impl Circuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a circuit from a list of operations.
    pub fn from_ops(gates: impl IntoIterator<Item = GateOp>) -> Self {
        Self {
            gates: gates.into_iter().collect(),
        }
    }

    /// Append an operation.
    pub fn push(&mut self, op: GateOp) {
        self.gates.push(op);
    }

    /// Number of operations in the circuit.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the circuit has no operations.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Infer the circuit width from the highest referenced qubit index.
    ///
    /// Both `qubit` and `targetQubit` count, so a CNOT whose target sits
    /// above every control still widens the state space. The result is a
    /// pure function of the circuit, floored at [`MIN_QUBITS`].
    pub fn num_qubits(&self) -> u32 {
        let max_index = self
            .gates
            .iter()
            .flat_map(|op| {
                std::iter::once(op.qubit.0).chain(op.target_qubit.map(|t| t.0))
            })
            .max();
        match max_index {
            Some(idx) => (idx + 1).max(MIN_QUBITS),
            None => MIN_QUBITS,
        }
    }

    /// Operations sorted by position.
    ///
    /// The sort is stable: operations sharing a position keep their
    /// insertion order. The circuit itself is left untouched.
    pub fn sorted_ops(&self) -> Vec<&GateOp> {
        let mut ops: Vec<&GateOp> = self.gates.iter().collect();
        ops.sort_by_key(|op| op.position);
        ops
    }
}
