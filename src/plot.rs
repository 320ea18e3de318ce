//! Data a renderer needs to draw a qubit.
//!
//! Nothing here draws anything. [`PlotData`] holds a sampled unit circle and
//! the two amplitudes as points on the complex plane, which is all a
//! front end needs to produce the usual picture.

use std::f64::consts::PI;

use crate::Qubit;

/// Points used to trace the unit circle.
pub const CIRCLE_SAMPLES: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct PlotData {
    /// `(cos t, sin t)` for `t` evenly spaced over `[0, 2π]`, both ends included.
    pub circle: Vec<(f64, f64)>,
    /// `(re, im)` of the |0> amplitude
    pub zero: (f64, f64),
    /// `(re, im)` of the |1> amplitude
    pub one: (f64, f64),
}

impl PlotData {
    pub fn new(state: &Qubit) -> PlotData {
        let a = state.zero_amplitude();
        let b = state.one_amplitude();
        PlotData {
            circle: unit_circle(CIRCLE_SAMPLES),
            zero: (a.re, a.im),
            one: (b.re, b.im),
        }
    }
}

fn unit_circle(samples: usize) -> Vec<(f64, f64)> {
    let step = 2f64 * PI / (samples - 1) as f64;
    (0..samples)
        .map(|i| {
            let t = i as f64 * step;
            (t.cos(), t.sin())
        })
        .collect()
}

/// Short status label: `|0⟩` when the |0> amplitude has the larger real
/// part, `|1⟩` otherwise (ties included).
pub fn state_label(state: &Qubit) -> &'static str {
    if state.zero_amplitude().re > state.one_amplitude().re {
        "|0⟩"
    } else {
        "|1⟩"
    }
}
