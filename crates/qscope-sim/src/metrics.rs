//! Read-only metric derivation over a final statevector.
//!
//! Everything here is a pure function of the state (or of its probability
//! distribution); nothing mutates the input. Two of the measures are
//! deliberately simplified relative to the textbook definitions and are
//! kept that way for output compatibility with the frontend:
//!
//! - the per-qubit Bloch x/y come from a coherence sum rather than a full
//!   partial trace, which is exact only for unentangled qubits;
//! - `purity` is Σ p_i² over the *full* distribution, not the reduced
//!   subsystem purity, and `fidelity` is its square root.

use num_complex::Complex64;
use qscope_ir::QubitId;

use crate::result::{BlochVector, EntangledPair, QubitState, SimulationResult};
use crate::statevector::StateVector;

/// Tolerance for matching the four Bell probability signatures.
pub const BELL_TOLERANCE: f64 = 0.1;

/// Above this peak probability a wide state is assumed unentangled by the
/// n>2 heuristic.
const PEAK_PROBABILITY_CUTOFF: f64 = 0.8;

/// Bloch coordinates of one qubit's reduced state.
///
/// `z` is exact: the probability imbalance of the qubit's marginal. `x`
/// and `y` sum the coherence terms `amp_i · conj(amp_{i⊕mask})` over the
/// half of the basis where the qubit is 0 — a shortcut that coincides
/// with the partial trace only for product states.
pub fn bloch_vector(state: &StateVector, qubit: QubitId) -> BlochVector {
    let mask = qubit.mask();
    let amps = state.amplitudes();

    let mut prob0 = 0.0;
    let mut x = 0.0;
    let mut y = 0.0;
    for (i, amp) in amps.iter().enumerate() {
        if i & mask == 0 {
            prob0 += amp.norm_sqr();
            let c = amp * amps[i | mask].conj();
            x += 2.0 * c.re;
            y += -2.0 * c.im;
        }
    }
    let prob1 = 1.0 - prob0;

    BlochVector {
        x,
        y,
        z: prob0 - prob1,
    }
}

/// Full-state purity, Σ p_i².
pub fn purity(probabilities: &[f64]) -> f64 {
    probabilities.iter().map(|p| p * p).sum()
}

/// Entanglement estimate in [0, 1].
///
/// For two qubits: the Shannon entropy of the first qubit's marginal
/// distribution, which reaches 1 on the Bell states. For wider circuits
/// no exact computation is attempted — a flat distribution scores 0.5
/// and a peaked one 0.
pub fn entanglement_estimate(probabilities: &[f64], num_qubits: u32) -> f64 {
    if num_qubits < 2 {
        return 0.0;
    }

    if num_qubits == 2 {
        let prob0: f64 = probabilities
            .iter()
            .enumerate()
            .filter(|(i, _)| i & 1 == 0)
            .map(|(_, p)| p)
            .sum();
        let prob1 = 1.0 - prob0;

        let mut entropy = 0.0;
        for p in [prob0, prob1] {
            if p > 0.0 {
                entropy -= p * p.log2();
            }
        }
        return entropy.clamp(0.0, 1.0);
    }

    let peak = probabilities.iter().cloned().fold(0.0, f64::max);
    if peak < PEAK_PROBABILITY_CUTOFF { 0.5 } else { 0.0 }
}

/// Detect a Bell pair from a two-qubit probability distribution.
///
/// The four probabilities are matched against the canonical signatures
/// within [`BELL_TOLERANCE`]: |Φ±⟩ puts equal mass on |00⟩ and |11⟩,
/// |Ψ±⟩ on |01⟩ and |10⟩. On a match the single pair `{0, 1}` is
/// reported with the matched mass as its strength. Wider circuits have
/// no detection path.
pub fn detect_entangled_pairs(probabilities: &[f64], num_qubits: u32) -> Vec<EntangledPair> {
    if num_qubits != 2 || probabilities.len() != 4 {
        return vec![];
    }

    let p00 = probabilities[0];
    let p01 = probabilities[1];
    let p10 = probabilities[2];
    let p11 = probabilities[3];

    let phi = (p00 - p11).abs() < BELL_TOLERANCE && p01 < BELL_TOLERANCE && p10 < BELL_TOLERANCE;
    let psi = (p01 - p10).abs() < BELL_TOLERANCE && p00 < BELL_TOLERANCE && p11 < BELL_TOLERANCE;

    let strength = if phi {
        p00 + p11
    } else if psi {
        p01 + p10
    } else {
        return vec![];
    };

    vec![EntangledPair {
        from: 0,
        to: 1,
        strength,
        id: "0-1".to_string(),
    }]
}

/// Derive the full result bundle from a final state.
pub fn derive(state: &StateVector) -> SimulationResult {
    let num_qubits = state.num_qubits();
    let probabilities = state.probabilities();

    let qubits = (0..num_qubits)
        .map(|q| QubitState {
            id: q,
            bloch: bloch_vector(state, QubitId(q)),
        })
        .collect();

    let purity = purity(&probabilities);
    let entanglement = entanglement_estimate(&probabilities, num_qubits);
    let entangled_pairs = detect_entangled_pairs(&probabilities, num_qubits);

    SimulationResult {
        qubits,
        entanglement,
        entangled_pairs,
        purity,
        fidelity: purity.sqrt(),
        measurement_probabilities: probabilities,
    }
}
