//! Gate operations as they arrive on the wire.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::GateKind;
use crate::qubit::QubitId;

/// A single gate operation in a circuit descriptor.
///
/// This mirrors the external JSON schema produced by the circuit editor:
/// the gate is a name string, `qubit` is the target (or the control, for
/// CNOT), and `position` is the ordering key along the timeline. The name
/// stays a string until simulation time so that an unknown gate fails
/// during execution rather than during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateOp {
    /// Wire name of the gate ("H", "X", "Y", "Z", "I", "CNOT").
    pub gate: String,
    /// The qubit this gate acts on; the control qubit for CNOT.
    pub qubit: QubitId,
    /// The target qubit, present only for CNOT.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_qubit: Option<QubitId>,
    /// Ordering key; the core sorts a copy of the circuit by this value.
    pub position: i64,
    /// Opaque identifier assigned by the editor.
    pub id: String,
}

impl GateOp {
    /// Create a single-qubit gate operation.
    pub fn single(kind: GateKind, qubit: impl Into<QubitId>, position: i64) -> Self {
        let qubit = qubit.into();
        Self {
            gate: kind.name().to_string(),
            qubit,
            target_qubit: None,
            position,
            id: format!("{}-{}-{}", kind.name(), qubit.0, position),
        }
    }

    /// Create a CNOT operation.
    pub fn cnot(control: impl Into<QubitId>, target: impl Into<QubitId>, position: i64) -> Self {
        let control = control.into();
        let target = target.into();
        Self {
            gate: GateKind::Cnot.name().to_string(),
            qubit: control,
            target_qubit: Some(target),
            position,
            id: format!("CNOT-{}-{}-{}", control.0, target.0, position),
        }
    }

    /// Resolve the gate name into a kind.
    pub fn kind(&self) -> IrResult<GateKind> {
        GateKind::from_name(&self.gate)
    }

    /// The target qubit of a CNOT, or an error if it is missing.
    pub fn cnot_target(&self) -> IrResult<QubitId> {
        self.target_qubit.ok_or_else(|| IrError::MissingTarget {
            gate: self.gate.clone(),
        })
    }
}
