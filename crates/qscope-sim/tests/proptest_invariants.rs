//! Property-based tests for the simulation invariants.
//!
//! Norm preservation under every gate, and the involution identities for
//! the self-inverse gates, over randomly generated circuits.

use proptest::prelude::*;
use qscope_ir::{Circuit, GateKind, GateOp};
use qscope_sim::Simulator;

const WIDTH: u32 = 4;

/// A random operation on a fixed-width register.
fn arb_op() -> impl Strategy<Value = GateOp> {
    let single = (
        prop::sample::select(vec![
            GateKind::H,
            GateKind::X,
            GateKind::Y,
            GateKind::Z,
            GateKind::I,
        ]),
        0..WIDTH,
        0i64..32,
    )
        .prop_map(|(kind, q, pos)| GateOp::single(kind, q, pos));

    // Control and target kept distinct by construction.
    let cnot = (0..WIDTH, 1..WIDTH, 0i64..32)
        .prop_map(|(c, off, pos)| GateOp::cnot(c, (c + off) % WIDTH, pos));

    prop_oneof![4 => single, 1 => cnot]
}

fn arb_circuit() -> impl Strategy<Value = Circuit> {
    prop::collection::vec(arb_op(), 0..=12).prop_map(|ops| {
        let mut circuit = Circuit::from_ops(ops);
        // Pin the inferred width so appended gates never widen the state.
        circuit.push(GateOp::single(GateKind::I, WIDTH - 1, 0));
        circuit
    })
}

proptest! {
    #[test]
    fn every_circuit_simulates_and_preserves_norm(circuit in arb_circuit()) {
        let result = Simulator::new().run(&circuit).unwrap();
        let sum: f64 = result.measurement_probabilities.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "norm drifted: {sum}");
    }

    #[test]
    fn x_involution(circuit in arb_circuit(), q in 0..WIDTH) {
        // Appending X·X on any qubit is a no-op, exactly.
        let mut doubled = circuit.clone();
        doubled.push(GateOp::single(GateKind::X, q, 100));
        doubled.push(GateOp::single(GateKind::X, q, 101));

        let base = Simulator::new().run(&circuit).unwrap();
        let twice = Simulator::new().run(&doubled).unwrap();
        prop_assert_eq!(
            base.measurement_probabilities,
            twice.measurement_probabilities
        );
    }

    #[test]
    fn cnot_involution(circuit in arb_circuit(), c in 0..WIDTH, off in 1..WIDTH) {
        let t = (c + off) % WIDTH;
        let mut doubled = circuit.clone();
        doubled.push(GateOp::cnot(c, t, 100));
        doubled.push(GateOp::cnot(c, t, 101));

        let base = Simulator::new().run(&circuit).unwrap();
        let twice = Simulator::new().run(&doubled).unwrap();
        prop_assert_eq!(
            base.measurement_probabilities,
            twice.measurement_probabilities
        );
    }

    #[test]
    fn h_involution_up_to_rounding(circuit in arb_circuit(), q in 0..WIDTH) {
        let mut doubled = circuit.clone();
        doubled.push(GateOp::single(GateKind::H, q, 100));
        doubled.push(GateOp::single(GateKind::H, q, 101));

        let base = Simulator::new().run(&circuit).unwrap();
        let twice = Simulator::new().run(&doubled).unwrap();
        for (a, b) in base
            .measurement_probabilities
            .iter()
            .zip(&twice.measurement_probabilities)
        {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn purity_and_fidelity_stay_in_range(circuit in arb_circuit()) {
        let result = Simulator::new().run(&circuit).unwrap();
        prop_assert!(result.purity > 0.0 && result.purity <= 1.0 + 1e-9);
        prop_assert!((result.fidelity - result.purity.sqrt()).abs() < 1e-12);
        prop_assert!((0.0..=1.0).contains(&result.entanglement));
    }
}
