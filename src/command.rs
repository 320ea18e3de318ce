//! Text commands driving a [`Session`](crate::Session), one per line.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::QubitError;
use crate::plot::PlotData;
use crate::session::{Counts, MAX_SHOTS};
use crate::{Gate, Outcome, Qubit};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Apply(Gate),
    Measure,
    Sample(usize),
    Reset,
    Show,
    Plot,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    State { label: &'static str, state: Qubit },
    Measured(Outcome),
    Sampled(Counts),
    Plot(PlotData),
}

impl FromStr for Command {
    type Err = QubitError;

    fn from_str(s: &str) -> Result<Command, QubitError> {
        let mut words = s.split_whitespace();
        let name = match words.next() {
            Some(name) => name.to_ascii_lowercase(),
            None => return Err(QubitError::UnknownCommand(s.to_owned())),
        };
        let command = match name.as_str() {
            "h" | "hadamard" => Command::Apply(Gate::hadamard()),
            "x" | "pauli-x" => Command::Apply(Gate::pauli_x()),
            "y" | "pauli-y" => Command::Apply(Gate::pauli_y()),
            "z" | "pauli-z" => Command::Apply(Gate::pauli_z()),
            "m" | "measure" => Command::Measure,
            "sample" => {
                let arg = words.next().unwrap_or("");
                match arg.parse::<usize>() {
                    Ok(shots) if shots <= MAX_SHOTS => Command::Sample(shots),
                    _ => return Err(QubitError::InvalidShots(arg.to_owned())),
                }
            }
            "reset" => Command::Reset,
            "show" => Command::Show,
            "plot" => Command::Plot,
            _ => return Err(QubitError::UnknownCommand(s.trim().to_owned())),
        };
        if words.next().is_some() {
            return Err(QubitError::UnknownCommand(s.trim().to_owned()));
        }
        Ok(command)
    }
}

impl Display for Response {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Response::State { label, state } => {
                write!(f, "Quantum State: {}  ({})", label, state)
            }
            Response::Measured(outcome) => write!(f, "Measurement outcome: {}", outcome),
            Response::Sampled(counts) => write!(
                f,
                "{} shots: |0> x {}, |1> x {}",
                counts.total(),
                counts.zeros,
                counts.ones
            ),
            Response::Plot(data) => {
                writeln!(f, "|0> at ({:.6}, {:.6})", data.zero.0, data.zero.1)?;
                write!(
                    f,
                    "|1> at ({:.6}, {:.6}), unit circle: {} points",
                    data.one.0,
                    data.one.1,
                    data.circle.len()
                )
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("h".parse::<Command>(), Ok(Command::Apply(Gate::hadamard())));
        assert_eq!("Hadamard".parse::<Command>(), Ok(Command::Apply(Gate::hadamard())));
        assert_eq!("  x ".parse::<Command>(), Ok(Command::Apply(Gate::pauli_x())));
        assert_eq!("pauli-z".parse::<Command>(), Ok(Command::Apply(Gate::pauli_z())));
        assert_eq!("M".parse::<Command>(), Ok(Command::Measure));
        assert_eq!("sample 250".parse::<Command>(), Ok(Command::Sample(250)));
        assert_eq!("reset".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("show".parse::<Command>(), Ok(Command::Show));
        assert_eq!("plot".parse::<Command>(), Ok(Command::Plot));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "cnot".parse::<Command>(),
            Err(QubitError::UnknownCommand("cnot".into()))
        );
        assert_eq!(
            "".parse::<Command>(),
            Err(QubitError::UnknownCommand("".into()))
        );
        assert_eq!(
            "h h".parse::<Command>(),
            Err(QubitError::UnknownCommand("h h".into()))
        );
        assert_eq!(
            "sample".parse::<Command>(),
            Err(QubitError::InvalidShots("".into()))
        );
        assert_eq!(
            "sample -3".parse::<Command>(),
            Err(QubitError::InvalidShots("-3".into()))
        );
        assert_eq!(
            "sample 18446744073709551615".parse::<Command>(),
            Err(QubitError::InvalidShots("18446744073709551615".into()))
        );
        let over = (MAX_SHOTS + 1).to_string();
        assert_eq!(
            format!("sample {}", over).parse::<Command>(),
            Err(QubitError::InvalidShots(over))
        );
        assert_eq!(
            format!("sample {}", MAX_SHOTS).parse::<Command>(),
            Ok(Command::Sample(MAX_SHOTS))
        );
    }

    #[test]
    fn test_display() {
        let response = Response::State {
            label: "|1⟩",
            state: Qubit::ONE,
        };
        assert_eq!(response.to_string(), "Quantum State: |1⟩  (|1>)");
        assert_eq!(
            Response::Measured(Outcome::Zero).to_string(),
            "Measurement outcome: |0>"
        );
        assert_eq!(
            Response::Sampled(Counts { zeros: 2, ones: 1 }).to_string(),
            "3 shots: |0> x 2, |1> x 1"
        );
    }
}
