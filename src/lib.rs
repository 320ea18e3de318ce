#[macro_use]
extern crate approx;
extern crate nalgebra;
extern crate num_complex;
extern crate num_traits;
extern crate rand;
#[macro_use]
extern crate tracing;

pub mod command;
pub mod error;
pub mod gate;
pub mod plot;
pub mod session;

use std::fmt::{self, Debug, Display, Formatter};

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::Vector2;
use num_complex::Complex64;
use rand::Rng;

pub use command::{Command, Response};
pub use error::{GateDefect, QubitError, Result};
pub use gate::Gate;
pub use plot::{state_label, PlotData};
pub use session::{Counts, Session, SessionConfig};

/// How far `|a|^2 + |b|^2` (or `U^† U`) may drift from 1 (or `I`).
pub const NORM_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Copy, PartialEq)]
pub struct Qubit {
    a: Complex64,
    b: Complex64,
}

impl Qubit {
    /// |0>
    pub const ZERO: Qubit = Qubit {
        a: Complex64 { re: 1f64, im: 0f64 },
        b: Complex64 { re: 0f64, im: 0f64 },
    };

    /// |1>
    pub const ONE: Qubit = Qubit {
        a: Complex64 { re: 0f64, im: 0f64 },
        b: Complex64 { re: 1f64, im: 0f64 },
    };

    /// |+>
    pub const PLUS: Qubit = Qubit {
        a: Complex64 {
            re: std::f64::consts::FRAC_1_SQRT_2,
            im: 0f64,
        },
        b: Complex64 {
            re: std::f64::consts::FRAC_1_SQRT_2,
            im: 0f64,
        },
    };

    /// |->
    pub const MINUS: Qubit = Qubit {
        a: Complex64 {
            re: std::f64::consts::FRAC_1_SQRT_2,
            im: 0f64,
        },
        b: Complex64 {
            re: -std::f64::consts::FRAC_1_SQRT_2,
            im: 0f64,
        },
    };

    pub fn new() -> Qubit {
        Qubit::ZERO
    }

    /// Builds `a|0> + b|1>`, rejecting amplitudes whose probabilities do
    /// not sum to 1.
    pub fn from_components(a: Complex64, b: Complex64) -> Result<Qubit> {
        let norm = a.norm_sqr() + b.norm_sqr();
        if !abs_diff_eq!(norm, 1f64, epsilon = NORM_TOLERANCE) {
            return Err(QubitError::InvalidState { norm });
        }
        Ok(Qubit { a, b })
    }

    pub fn zero_amplitude(&self) -> Complex64 {
        self.a
    }

    pub fn one_amplitude(&self) -> Complex64 {
        self.b
    }

    pub fn amplitudes(&self) -> [Complex64; 2] {
        [self.a, self.b]
    }

    /// `(|a|^2, |b|^2)`
    pub fn probabilities(&self) -> (f64, f64) {
        (self.a.norm_sqr(), self.b.norm_sqr())
    }

    /// `gate · self`. The result is not renormalized.
    pub fn apply(&self, gate: &Gate) -> Qubit {
        let v = gate.matrix() * Vector2::new(self.a, self.b);
        let q = Qubit { a: v[0], b: v[1] };
        trace!(from = %self, to = %q, "applied {:?}", gate);
        q
    }

    /// Samples an outcome with probabilities `|a|^2` and `|b|^2`.
    ///
    /// The state itself is left untouched, so repeated calls are
    /// independent draws from the same distribution.
    pub fn measure<R: Rng + ?Sized>(&self, rng: &mut R) -> Outcome {
        let (zp, _) = self.probabilities();
        let r = rng.gen::<f64>();
        let outcome = if r < zp { Outcome::Zero } else { Outcome::One };
        debug!(p0 = zp, r, outcome = outcome.bit(), "measured");
        outcome
    }

    /// Like [`Qubit::measure`], but also returns the basis state the qubit
    /// collapses to.
    pub fn measure_and_collapse<R: Rng + ?Sized>(&self, rng: &mut R) -> (Outcome, Qubit) {
        let outcome = self.measure(rng);
        (outcome, outcome.basis_state())
    }
}

impl Default for Qubit {
    fn default() -> Qubit {
        Qubit::new()
    }
}

impl Debug for Qubit {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Qubit({}, {})", self.a, self.b)
    }
}

impl Display for Qubit {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let (zp, op) = self.probabilities();
        if abs_diff_eq!(zp, 1f64, epsilon = NORM_TOLERANCE) {
            write!(f, "|0>")
        } else if abs_diff_eq!(op, 1f64, epsilon = NORM_TOLERANCE) {
            write!(f, "|1>")
        } else {
            write!(f, "{}|0> + {}|1>", self.a, self.b)
        }
    }
}

impl AbsDiffEq for Qubit {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        <f64 as AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.a.re.abs_diff_eq(&other.a.re, epsilon)
            && self.a.im.abs_diff_eq(&other.a.im, epsilon)
            && self.b.re.abs_diff_eq(&other.b.re, epsilon)
            && self.b.im.abs_diff_eq(&other.b.im, epsilon)
    }
}

impl RelativeEq for Qubit {
    fn default_max_relative() -> Self::Epsilon {
        <f64 as RelativeEq>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.a.re.relative_eq(&other.a.re, epsilon, max_relative)
            && self.a.im.relative_eq(&other.a.im, epsilon, max_relative)
            && self.b.re.relative_eq(&other.b.re, epsilon, max_relative)
            && self.b.im.relative_eq(&other.b.im, epsilon, max_relative)
    }
}

/// Result of measuring a qubit in the computational basis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Zero,
    One,
}

impl Outcome {
    pub fn bit(self) -> u8 {
        match self {
            Outcome::Zero => 0,
            Outcome::One => 1,
        }
    }

    pub fn basis_state(self) -> Qubit {
        match self {
            Outcome::Zero => Qubit::ZERO,
            Outcome::One => Qubit::ONE,
        }
    }
}

impl From<bool> for Outcome {
    fn from(b: bool) -> Outcome {
        if b {
            Outcome::One
        } else {
            Outcome::Zero
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "|{}>", self.bit())
    }
}

/// The |0> state a fresh session starts from.
pub fn initialize() -> Qubit {
    Qubit::new()
}

pub fn apply_gate(state: &Qubit, gate: &Gate) -> Qubit {
    state.apply(gate)
}

pub fn measure<R: Rng + ?Sized>(state: &Qubit, rng: &mut R) -> Outcome {
    state.measure(rng)
}

pub fn measure_and_collapse<R: Rng + ?Sized>(state: &Qubit, rng: &mut R) -> (Outcome, Qubit) {
    state.measure_and_collapse(rng)
}
