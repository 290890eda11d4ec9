//! Simulation result wire types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bloch-sphere coordinates of a single qubit's reduced state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BlochVector {
    /// The |0⟩ pole.
    pub fn ground() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        }
    }
}

/// One qubit's entry in the simulation result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QubitState {
    /// Qubit index.
    pub id: u32,
    /// Bloch coordinates of the qubit's reduced state.
    pub bloch: BlochVector,
}

/// A detected entangled pair with its Bell-signature strength.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntangledPair {
    /// First qubit of the pair.
    pub from: u32,
    /// Second qubit of the pair.
    pub to: u32,
    /// Probability mass on the matched Bell signature.
    pub strength: f64,
    /// Stable identifier, `"{from}-{to}"`.
    pub id: String,
}

/// Coarse entanglement label for consumers that render a badge rather
/// than a number. Thresholds follow the analytics backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntanglementClass {
    Separable,
    WeaklyEntangled,
    ModeratelyEntangled,
    StronglyEntangled,
}

impl EntanglementClass {
    /// Classify an entanglement measure in [0, 1].
    pub fn from_measure(measure: f64) -> Self {
        if measure < 0.1 {
            EntanglementClass::Separable
        } else if measure < 0.5 {
            EntanglementClass::WeaklyEntangled
        } else if measure < 0.9 {
            EntanglementClass::ModeratelyEntangled
        } else {
            EntanglementClass::StronglyEntangled
        }
    }
}

impl fmt::Display for EntanglementClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntanglementClass::Separable => "separable",
            EntanglementClass::WeaklyEntangled => "weakly entangled",
            EntanglementClass::ModeratelyEntangled => "moderately entangled",
            EntanglementClass::StronglyEntangled => "strongly entangled",
        };
        f.write_str(s)
    }
}

/// The derived output of a simulation run.
///
/// Read-only once returned; the engine never retains a reference to it.
/// Field names serialize in the camelCase form the frontend schema uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Per-qubit Bloch coordinates.
    pub qubits: Vec<QubitState>,
    /// Entanglement estimate in [0, 1].
    pub entanglement: f64,
    /// Detected Bell pairs (two-qubit circuits only).
    pub entangled_pairs: Vec<EntangledPair>,
    /// Full-state purity, Σ p_i².
    pub purity: f64,
    /// sqrt(purity).
    pub fidelity: f64,
    /// Probability of each basis state; sums to ≈ 1.
    pub measurement_probabilities: Vec<f64>,
}

impl SimulationResult {
    /// The fixed single-qubit ground-state result used when a run is
    /// absorbed at the orchestrator boundary.
    pub fn fallback() -> Self {
        Self {
            qubits: vec![QubitState {
                id: 0,
                bloch: BlochVector::ground(),
            }],
            entanglement: 0.0,
            entangled_pairs: vec![],
            purity: 1.0,
            fidelity: 1.0,
            measurement_probabilities: vec![1.0, 0.0],
        }
    }

    /// Coarse label for the entanglement estimate.
    pub fn entanglement_class(&self) -> EntanglementClass {
        EntanglementClass::from_measure(self.entanglement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_shape() {
        let r = SimulationResult::fallback();
        assert_eq!(r.qubits.len(), 1);
        assert_eq!(r.qubits[0].bloch, BlochVector::ground());
        assert_eq!(r.measurement_probabilities, vec![1.0, 0.0]);
        assert_eq!(r.entanglement_class(), EntanglementClass::Separable);
    }

    #[test]
    fn test_entanglement_classes() {
        assert_eq!(
            EntanglementClass::from_measure(0.05),
            EntanglementClass::Separable
        );
        assert_eq!(
            EntanglementClass::from_measure(0.3),
            EntanglementClass::WeaklyEntangled
        );
        assert_eq!(
            EntanglementClass::from_measure(0.7),
            EntanglementClass::ModeratelyEntangled
        );
        assert_eq!(
            EntanglementClass::from_measure(0.99),
            EntanglementClass::StronglyEntangled
        );
    }
}
