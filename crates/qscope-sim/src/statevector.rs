//! Dense statevector representation and gate application.

use num_complex::Complex64;
use qscope_ir::{GateMatrix, QubitId};

use crate::error::{SimError, SimResult};

/// A statevector over `num_qubits` qubits.
///
/// Holds 2^n complex amplitudes indexed by basis bitmask: bit k of an
/// index is qubit k's classical value in that basis component. Gate
/// application is functional — each gate produces a new statevector and
/// the caller discards the old one — so a vector handed out is never
/// mutated behind the caller's back.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: u32,
}

impl StateVector {
    /// Create the ground state |0...0⟩ on `num_qubits` qubits.
    pub fn ground(num_qubits: u32) -> Self {
        let size = 1usize << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Number of basis states (2^n).
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Whether the vector is empty. Never true for a constructed state.
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Measurement probability of each basis state: |amp_i|².
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Total squared norm, Σ|amp_i|². Stays ≈ 1 under every gate.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    fn check_qubit(&self, qubit: QubitId) -> SimResult<()> {
        if qubit.0 >= self.num_qubits {
            return Err(SimError::QubitOutOfRange {
                qubit: qubit.0,
                n_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    /// Apply a 2×2 unitary to one qubit, producing a new statevector.
    ///
    /// Equivalent to `(I ⊗ … ⊗ M ⊗ … ⊗ I) · state` without materializing
    /// the tensor-product matrix: each source amplitude scatters into the
    /// two basis states that differ only in the target qubit's bit.
    pub fn apply_single(&self, m: &GateMatrix, qubit: QubitId) -> SimResult<StateVector> {
        self.check_qubit(qubit)?;
        let mask = qubit.mask();
        let mut new = vec![Complex64::new(0.0, 0.0); self.amplitudes.len()];

        for (i, &amp) in self.amplitudes.iter().enumerate() {
            if i & mask == 0 {
                new[i] += amp * m[0][0];
                new[i | mask] += amp * m[1][0];
            } else {
                new[i & !mask] += amp * m[0][1];
                new[i] += amp * m[1][1];
            }
        }

        Ok(StateVector {
            amplitudes: new,
            num_qubits: self.num_qubits,
        })
    }

    /// Apply CNOT, producing a new statevector.
    ///
    /// A pure permutation of basis indices: wherever the control bit is 1
    /// the amplitude moves to the index with the target bit flipped.
    /// Applying the same CNOT twice restores the input exactly.
    pub fn apply_cnot(&self, control: QubitId, target: QubitId) -> SimResult<StateVector> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(SimError::DuplicateQubit { qubit: control.0 });
        }

        let ctrl_mask = control.mask();
        let tgt_mask = target.mask();
        let mut new = vec![Complex64::new(0.0, 0.0); self.amplitudes.len()];

        for (i, &amp) in self.amplitudes.iter().enumerate() {
            if i & ctrl_mask != 0 {
                new[i ^ tgt_mask] = amp;
            } else {
                new[i] = amp;
            }
        }

        Ok(StateVector {
            amplitudes: new,
            num_qubits: self.num_qubits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qscope_ir::GateKind;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_ground_state() {
        let sv = StateVector::ground(2);
        assert_eq!(sv.len(), 4);
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_hadamard() {
        let h = GateKind::H.matrix().unwrap();
        let sv = StateVector::ground(1).apply_single(&h, QubitId(0)).unwrap();

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(sqrt2_inv, 0.0)));
        assert!((sv.norm_sqr() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_y_gate_produces_imaginary_amplitude() {
        let y = GateKind::Y.matrix().unwrap();
        let sv = StateVector::ground(1).apply_single(&y, QubitId(0)).unwrap();

        // Y|0⟩ = i|1⟩; a real-only matrix would leave the state zeroed out.
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 1.0)));
        assert!((sv.norm_sqr() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_x_twice_is_identity_exactly() {
        let x = GateKind::X.matrix().unwrap();
        let sv = StateVector::ground(2);
        let back = sv
            .apply_single(&x, QubitId(1))
            .unwrap()
            .apply_single(&x, QubitId(1))
            .unwrap();
        assert_eq!(back.amplitudes, sv.amplitudes);
    }

    #[test]
    fn test_bell_state_amplitudes() {
        let h = GateKind::H.matrix().unwrap();
        let sv = StateVector::ground(2)
            .apply_single(&h, QubitId(0))
            .unwrap()
            .apply_cnot(QubitId(0), QubitId(1))
            .unwrap();

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_cnot_involution_exact() {
        let h = GateKind::H.matrix().unwrap();
        let sv = StateVector::ground(2).apply_single(&h, QubitId(0)).unwrap();
        let back = sv
            .apply_cnot(QubitId(0), QubitId(1))
            .unwrap()
            .apply_cnot(QubitId(0), QubitId(1))
            .unwrap();
        assert_eq!(back.amplitudes, sv.amplitudes);
    }

    #[test]
    fn test_qubit_out_of_range() {
        let h = GateKind::H.matrix().unwrap();
        let sv = StateVector::ground(2);
        assert!(matches!(
            sv.apply_single(&h, QubitId(2)),
            Err(SimError::QubitOutOfRange { qubit: 2, n_qubits: 2 })
        ));
    }

    #[test]
    fn test_cnot_rejects_same_qubit() {
        let sv = StateVector::ground(2);
        assert!(matches!(
            sv.apply_cnot(QubitId(1), QubitId(1)),
            Err(SimError::DuplicateQubit { qubit: 1 })
        ));
    }
}
