#[macro_use]
extern crate approx;
extern crate num_complex;
extern crate proptest;
extern crate qubit_sim;
extern crate rand;

use num_complex::Complex64;
use proptest::prelude::*;
use qubit_sim::{apply_gate, initialize, measure, Gate, Outcome, Qubit, NORM_TOLERANCE};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Normalized state from two magnitudes-before-normalization and two phases.
fn arb_qubit() -> impl Strategy<Value = Qubit> {
    (0.01f64..1.0, 0.0f64..1.0, -3.2f64..3.2, -3.2f64..3.2).prop_map(|(x, y, pa, pb)| {
        let n = (x * x + y * y).sqrt();
        Qubit::from_components(
            Complex64::from_polar(x / n, pa),
            Complex64::from_polar(y / n, pb),
        )
        .unwrap()
    })
}

fn arb_gate() -> impl Strategy<Value = Gate> {
    prop_oneof![
        Just(Gate::hadamard()),
        Just(Gate::pauli_x()),
        Just(Gate::pauli_y()),
        Just(Gate::pauli_z()),
        (-3.2f64..3.2).prop_map(Gate::phase_shift),
    ]
}

fn total_probability(q: &Qubit) -> f64 {
    let (zp, op) = q.probabilities();
    zp + op
}

proptest! {
    #[test]
    fn gate_sequences_stay_normalized(gates in prop::collection::vec(arb_gate(), 0..200)) {
        let mut q = initialize();
        for gate in &gates {
            q = apply_gate(&q, gate);
            prop_assert!((total_probability(&q) - 1.0).abs() < NORM_TOLERANCE);
        }
    }

    #[test]
    fn hadamard_is_an_involution(q in arb_qubit()) {
        let h = Gate::hadamard();
        let back = apply_gate(&apply_gate(&q, &h), &h);
        prop_assert!(abs_diff_eq!(back, q, epsilon = 1e-12));
    }

    #[test]
    fn pauli_x_is_an_involution(q in arb_qubit()) {
        let x = Gate::pauli_x();
        prop_assert_eq!(apply_gate(&apply_gate(&q, &x), &x), q);
    }

    #[test]
    fn measurement_yields_a_bit(q in arb_qubit(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..16 {
            let bit = measure(&q, &mut rng).bit();
            prop_assert!(bit == 0 || bit == 1);
        }
    }

    #[test]
    fn collapse_matches_outcome(q in arb_qubit(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (outcome, collapsed) = q.measure_and_collapse(&mut rng);
        prop_assert_eq!(collapsed, outcome.basis_state());
    }
}

#[test]
fn hadamard_on_zero() {
    let q = apply_gate(&initialize(), &Gate::hadamard());
    let half = std::f64::consts::FRAC_1_SQRT_2;
    assert_relative_eq!(q.zero_amplitude().re, half);
    assert_relative_eq!(q.one_amplitude().re, half);
    assert_eq!(q.zero_amplitude().im, 0.0);
    assert_eq!(q.one_amplitude().im, 0.0);
}

#[test]
fn pauli_x_on_zero() {
    assert_eq!(apply_gate(&initialize(), &Gate::pauli_x()), Qubit::ONE);
}

#[test]
fn measuring_zero_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(2024);
    let q = initialize();
    assert!((0..10_000).all(|_| measure(&q, &mut rng) == Outcome::Zero));
}

#[test]
fn measuring_plus_is_fair() {
    let n = 100_000;
    let mut rng = StdRng::seed_from_u64(17);
    let q = apply_gate(&initialize(), &Gate::hadamard());
    let zeros = (0..n)
        .filter(|_| measure(&q, &mut rng) == Outcome::Zero)
        .count();
    let freq = zeros as f64 / n as f64;
    assert!((freq - 0.5).abs() < 0.01, "frequency of |0> was {}", freq);
}
