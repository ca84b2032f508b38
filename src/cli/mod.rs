//! The casebook command-line interface.
//!
//! This module is the entry point for all CLI commands: it parses arguments,
//! dispatches to the harness and reporters, and maps outcomes to exit codes.
//! A run with failing cases exits 1; a configuration error exits 2 with a
//! rendered diagnostic.

use std::io;
use std::process;
use std::time::Duration;

use clap::Parser;
use miette::IntoDiagnostic;

use crate::cli::args::{CasebookArgs, Command};
use crate::harness::Harness;
use crate::report::{ConsoleReporter, JsonReporter, Reporter};
use crate::suite::{demo_suite, DEMO_INFO};

pub mod args;

/// Delay between cases when `--paced` is set. Display rhythm only.
const PACING_DELAY: Duration = Duration::from_millis(400);

/// The main entry point for the CLI.
pub fn run() {
    let args = CasebookArgs::parse();
    match dispatch(args.command) {
        Ok(failed) if failed > 0 => process::exit(1),
        Ok(_) => {}
        Err(report) => {
            eprintln!("{report:?}");
            process::exit(2);
        }
    }
}

/// Executes one subcommand and returns the number of failed cases.
fn dispatch(command: Command) -> miette::Result<usize> {
    match command {
        Command::Run {
            filter,
            json,
            no_color,
            paced,
        } => {
            let mut harness = Harness::new(demo_suite()?)?;
            if let Some(needle) = filter.as_deref() {
                harness = harness.filter(needle);
            }
            if paced {
                harness = harness.with_pacing(PACING_DELAY);
            }
            let run = harness.run();

            if json {
                JsonReporter::new(io::stdout().lock())
                    .report(&run)
                    .into_diagnostic()?;
            } else {
                let mut reporter = ConsoleReporter::new(DEMO_INFO);
                if no_color {
                    reporter = reporter.no_color();
                }
                reporter.report(&run).into_diagnostic()?;
            }
            Ok(run.summary.failed)
        }
        Command::List => {
            for case in demo_suite()? {
                println!("{}", case.name());
            }
            Ok(0)
        }
    }
}
