use std::fmt::{self, Debug, Formatter};

use nalgebra::Matrix2;
use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::error::{GateDefect, QubitError, Result};
use crate::NORM_TOLERANCE;

/// A single-qubit gate: a unitary 2x2 complex matrix.
///
/// The built-in constructors are unitary by construction. Matrices coming
/// from elsewhere go through [`Gate::new`] or [`Gate::from_row_slice`],
/// which reject anything that is not.
#[derive(Clone, PartialEq)]
pub struct Gate(Matrix2<Complex64>);

impl Debug for Gate {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Gate({:?})", self.0)
    }
}

impl Gate {
    pub fn new(m: Matrix2<Complex64>) -> Result<Gate> {
        if !m.iter().all(|c| c.is_finite()) {
            return Err(QubitError::InvalidGate(GateDefect::NonFinite));
        }
        let deviation = unitarity_deviation(&m);
        if !(deviation <= NORM_TOLERANCE) {
            return Err(QubitError::InvalidGate(GateDefect::NotUnitary {
                deviation,
            }));
        }
        Ok(Gate(m))
    }

    /// Builds a gate from 4 entries in row-major order.
    pub fn from_row_slice(entries: &[Complex64]) -> Result<Gate> {
        if entries.len() != 4 {
            return Err(QubitError::InvalidGate(GateDefect::Shape {
                len: entries.len(),
            }));
        }
        Gate::new(Matrix2::from_row_slice(entries))
    }

    pub fn matrix(&self) -> &Matrix2<Complex64> {
        &self.0
    }

    pub fn identity() -> Gate {
        Gate(Matrix2::identity())
    }

    /// (1/√2)·[[1, 1], [1, -1]]
    pub fn hadamard() -> Gate {
        let v = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0f64);
        Gate(Matrix2::new(v, v, v, -v))
    }

    /// [[0, 1], [1, 0]]
    pub fn pauli_x() -> Gate {
        let (l, o) = (Complex64::one(), Complex64::zero());
        Gate(Matrix2::new(o, l, l, o))
    }

    pub fn pauli_y() -> Gate {
        let o = Complex64::zero();
        Gate(Matrix2::new(o, -Complex64::i(), Complex64::i(), o))
    }

    pub fn pauli_z() -> Gate {
        let (l, o) = (Complex64::one(), Complex64::zero());
        Gate(Matrix2::new(l, o, o, -l))
    }

    pub fn phase_shift(phi: f64) -> Gate {
        let (l, o) = (Complex64::one(), Complex64::zero());
        Gate(Matrix2::new(l, o, o, Complex64::from_polar(1f64, phi)))
    }

    /// Matrix product `self · rhs`, i.e. `rhs` is applied first.
    pub fn compose(&self, rhs: &Gate) -> Gate {
        Gate(self.0 * rhs.0)
    }
}

/// Largest entry magnitude of `U^† U - I`.
fn unitarity_deviation(m: &Matrix2<Complex64>) -> f64 {
    (m.adjoint() * m - Matrix2::<Complex64>::identity())
        .iter()
        .map(|c| c.norm())
        .fold(0f64, f64::max)
}
