pub use crate::errors::HarnessError;
pub use crate::harness::{Harness, RunSummary, TestCase, TestResult, TestRun};

pub mod checks;
pub mod cli;
pub mod errors;
pub mod harness;
pub mod report;
pub mod suite;
