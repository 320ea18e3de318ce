extern crate clap;
extern crate qubit_sim;
#[macro_use]
extern crate tracing;
extern crate tracing_subscriber;

use std::io::{self, BufRead};

use clap::Parser;
use qubit_sim::{Command, Session, SessionConfig};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "qubit-sim")]
#[command(about = "Single-qubit playground: apply gates, measure, inspect the state")]
struct Args {
    /// Seed for measurements (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Collapse the state to the observed basis state on `measure`
    #[arg(long, default_value_t = false)]
    collapse: bool,

    /// Log level: off, trace, debug, info, warn, error.
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Commands to run in order (h, x, y, z, measure, sample N, reset, show, plot).
    /// Read from stdin, one per line, when none are given.
    commands: Vec<String>,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut session = Session::new(&SessionConfig {
        seed: args.seed,
        collapse_on_measure: args.collapse,
    });

    if !args.commands.is_empty() {
        for line in &args.commands {
            run_line(&mut session, line);
        }
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => run_line(&mut session, &line),
            Err(e) => {
                error!("failed to read stdin: {}", e);
                break;
            }
        }
    }
}

fn run_line(session: &mut Session, line: &str) {
    match line.parse::<Command>() {
        Ok(command) => println!("{}", session.execute(command)),
        Err(e) => {
            warn!(line, "rejected command: {}", e);
            eprintln!("error: {}", e);
        }
    }
}
