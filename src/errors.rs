//! Unified error type for harness configuration failures.
//!
//! Only suite *assembly* can fail: a predicate that returns `false` or panics
//! during execution is recorded in its `TestResult` and never surfaces here.
//! A malformed case is a programmer error and fails fast with a diagnostic
//! instead of being silently skipped.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while assembling a suite of test cases.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    /// A case was given a blank description.
    #[error("test case name must not be empty")]
    #[diagnostic(
        code(casebook::harness::empty_name),
        help("give every case a short human-readable description; it labels the row in the report")
    )]
    EmptyCaseName,

    /// Two cases in the same suite share a description.
    #[error("duplicate test case name: {name:?}")]
    #[diagnostic(
        code(casebook::harness::duplicate_name),
        help("case names identify rows in the report; make each one unique")
    )]
    DuplicateCaseName { name: String },
}
