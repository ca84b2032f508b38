//! Defines the command-line arguments and subcommands for the casebook CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "casebook",
    version,
    about = "A minimal inline test-runner and reporting harness."
)]
pub struct CasebookArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the built-in demo suite and print a report.
    Run {
        /// Only run cases whose name contains this substring (case-insensitive).
        #[arg(long)]
        filter: Option<String>,
        /// Emit the results and summary as JSON instead of the console report.
        #[arg(long)]
        json: bool,
        /// Disable colored output.
        #[arg(long)]
        no_color: bool,
        /// Pause briefly between cases for display pacing.
        #[arg(long)]
        paced: bool,
    },
    /// List the names of the built-in demo cases without running them.
    List,
}
