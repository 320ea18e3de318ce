//! A single interactive session: one qubit plus the random source its
//! measurements draw from.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::command::{Command, Response};
use crate::plot::{state_label, PlotData};
use crate::{Gate, Outcome, Qubit};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionConfig {
    /// Seed for the measurement RNG; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Replace the state with the observed basis state after each `measure`.
    pub collapse_on_measure: bool,
}

/// Largest shot count the `sample` command accepts.
pub const MAX_SHOTS: usize = 10_000_000;

/// Tally of repeated measurements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub zeros: usize,
    pub ones: usize,
}

impl Counts {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Zero => self.zeros += 1,
            Outcome::One => self.ones += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.zeros + self.ones
    }
}

pub struct Session<R = StdRng> {
    state: Qubit,
    rng: R,
    collapse_on_measure: bool,
}

impl Session<StdRng> {
    pub fn new(config: &SessionConfig) -> Session<StdRng> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        info!(
            seed = ?config.seed,
            collapse = config.collapse_on_measure,
            "starting session"
        );
        Session::with_rng(rng, config.collapse_on_measure)
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(rng: R, collapse_on_measure: bool) -> Session<R> {
        Session {
            state: Qubit::new(),
            rng,
            collapse_on_measure,
        }
    }

    pub fn state(&self) -> &Qubit {
        &self.state
    }

    pub fn apply(&mut self, gate: &Gate) -> &Qubit {
        self.state = self.state.apply(gate);
        debug!(state = %self.state, "gate applied");
        &self.state
    }

    pub fn hadamard(&mut self) -> &Qubit {
        self.apply(&Gate::hadamard())
    }

    pub fn pauli_x(&mut self) -> &Qubit {
        self.apply(&Gate::pauli_x())
    }

    pub fn measure(&mut self) -> Outcome {
        if self.collapse_on_measure {
            let (outcome, collapsed) = self.state.measure_and_collapse(&mut self.rng);
            self.state = collapsed;
            outcome
        } else {
            self.state.measure(&mut self.rng)
        }
    }

    /// Measures `shots` times without collapsing, whatever the session config.
    ///
    /// Runs in time linear in `shots`; text commands are capped at [`MAX_SHOTS`].
    pub fn sample(&mut self, shots: usize) -> Counts {
        let mut counts = Counts::default();
        for _ in 0..shots {
            counts.record(self.state.measure(&mut self.rng));
        }
        debug!(shots, zeros = counts.zeros, ones = counts.ones, "sampled");
        counts
    }

    pub fn reset(&mut self) {
        self.state = Qubit::new();
        debug!("session reset");
    }

    pub fn label(&self) -> &'static str {
        state_label(&self.state)
    }

    pub fn plot_data(&self) -> PlotData {
        PlotData::new(&self.state)
    }

    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Apply(gate) => {
                self.apply(&gate);
                Response::State {
                    label: self.label(),
                    state: self.state,
                }
            }
            Command::Measure => Response::Measured(self.measure()),
            Command::Sample(shots) => Response::Sampled(self.sample(shots)),
            Command::Reset => {
                self.reset();
                Response::State {
                    label: self.label(),
                    state: self.state,
                }
            }
            Command::Show => Response::State {
                label: self.label(),
                state: self.state,
            },
            Command::Plot => Response::Plot(self.plot_data()),
        }
    }
}
