//! Casebook Test Harness
//!
//! Provides the core run loop: an ordered suite of named test cases is
//! executed strictly sequentially, each case under panic isolation, and the
//! outcomes are collected into structured results plus an aggregate summary.
//!
//! # Execution model
//!
//! 1. **Assembly**: cases are validated at construction time (blank or
//!    duplicate names are configuration errors, not run failures).
//! 2. **Execution**: each predicate runs in definition order under
//!    `catch_unwind`; a panic in one case never prevents later cases from
//!    running.
//! 3. **Summary**: counts, pass rate, and wall-clock timing are derived once
//!    after the last case completes.
//!
//! The harness performs no I/O of its own. Rendering is delegated entirely to
//! a [`Reporter`](crate::report::Reporter), which receives the completed
//! [`TestRun`].
//!
//! # Example
//!
//! ```rust
//! use casebook::harness::{Harness, TestCase};
//!
//! let cases = vec![TestCase::new("arithmetic still works", || 1 + 1 == 2).unwrap()];
//! let run = Harness::new(cases).unwrap().run();
//! assert_eq!(run.summary.passed, 1);
//! ```

use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe, UnwindSafe};
use std::thread;
use std::time::{Duration, Instant, SystemTime};

use serde::Serialize;

use crate::errors::HarnessError;

/// A zero-argument check. Must return a strict boolean; a panic is recorded
/// as a failure with the payload captured as the error text.
pub type Predicate = Box<dyn FnOnce() -> bool + UnwindSafe>;

/// A named, self-contained check. Immutable once defined; consumed by the run.
pub struct TestCase {
    name: String,
    predicate: Predicate,
}

impl TestCase {
    /// Creates a case, rejecting a blank name at construction time.
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Result<Self, HarnessError>
    where
        F: FnOnce() -> bool + UnwindSafe + 'static,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(HarnessError::EmptyCaseName);
        }
        Ok(Self {
            name,
            predicate: Box::new(predicate),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The recorded outcome of executing one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    /// Panic detail when the predicate panicked instead of returning `false`.
    pub error: Option<String>,
}

/// Aggregate statistics over a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Wall-clock time captured immediately before the first case.
    pub started_at: SystemTime,
    /// Wall-clock time captured immediately after the last case.
    pub ended_at: SystemTime,
    pub duration: Duration,
}

impl RunSummary {
    /// Fraction of cases that passed, in `[0.0, 1.0]`.
    ///
    /// Defined as `0.0` for an empty run rather than dividing by zero.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.passed as f64 / self.total as f64
        }
    }
}

/// The ordered results and summary of one completed run.
#[derive(Debug)]
pub struct TestRun {
    pub results: Vec<TestResult>,
    pub summary: RunSummary,
}

/// Owns an ordered suite of cases for exactly one run.
///
/// [`Harness::run`] consumes the harness, so repeating or sharing a run
/// requires building a fresh instance; there is no cross-run state.
#[derive(Debug)]
pub struct Harness {
    cases: Vec<TestCase>,
    pacing: Option<Duration>,
}

impl Harness {
    /// Assembles a harness, rejecting duplicate case names.
    pub fn new(cases: Vec<TestCase>) -> Result<Self, HarnessError> {
        let mut seen = HashSet::new();
        for case in &cases {
            if !seen.insert(case.name.as_str()) {
                return Err(HarnessError::DuplicateCaseName {
                    name: case.name.clone(),
                });
            }
        }
        Ok(Self {
            cases,
            pacing: None,
        })
    }

    /// Sleeps for `delay` between consecutive cases. Display pacing only;
    /// the delay is not counted as part of any individual case.
    pub fn with_pacing(mut self, delay: Duration) -> Self {
        self.pacing = Some(delay);
        self
    }

    /// Retains only cases whose name contains `needle`, case-insensitively.
    pub fn filter(mut self, needle: &str) -> Self {
        let needle = needle.to_lowercase();
        self.cases.retain(|c| c.name.to_lowercase().contains(&needle));
        self
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Executes every case in definition order and derives the summary.
    ///
    /// Each predicate runs under `catch_unwind`: a returned boolean becomes
    /// the pass/fail status, and a panic becomes a failure with the payload
    /// captured as the error text. One panicking case never aborts the run.
    pub fn run(self) -> TestRun {
        let started_at = SystemTime::now();
        let clock = Instant::now();
        let pacing = self.pacing;
        let last = self.cases.len().saturating_sub(1);

        let mut results = Vec::with_capacity(self.cases.len());
        for (index, case) in self.cases.into_iter().enumerate() {
            results.push(execute(case));
            if let (Some(delay), true) = (pacing, index < last) {
                thread::sleep(delay);
            }
        }

        let passed = results.iter().filter(|r| r.passed).count();
        let summary = RunSummary {
            total: results.len(),
            passed,
            failed: results.len() - passed,
            started_at,
            ended_at: SystemTime::now(),
            duration: clock.elapsed(),
        };
        TestRun { results, summary }
    }
}

/// Runs one predicate with panic isolation and records its outcome.
fn execute(case: TestCase) -> TestResult {
    let TestCase { name, predicate } = case;
    match panic::catch_unwind(AssertUnwindSafe(predicate)) {
        Ok(passed) => TestResult {
            name,
            passed,
            error: None,
        },
        Err(payload) => TestResult {
            name,
            passed: false,
            error: Some(panic_message(payload.as_ref())),
        },
    }
}

/// Extracts a readable message from a panic payload.
///
/// `panic!` with a literal yields `&str`; `panic!` with formatting yields
/// `String`. Anything else is opaque and reported as such.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        format!("panicked: {text}")
    } else if let Some(text) = payload.downcast_ref::<String>() {
        format!("panicked: {text}")
    } else {
        "panicked: <non-string payload>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(
            TestCase::new("   ", || true),
            Err(HarnessError::EmptyCaseName)
        ));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let cases = vec![
            TestCase::new("same", || true).unwrap(),
            TestCase::new("same", || false).unwrap(),
        ];
        let err = Harness::new(cases).unwrap_err();
        assert!(matches!(err, HarnessError::DuplicateCaseName { name } if name == "same"));
    }

    #[test]
    fn empty_suite_yields_zeroed_summary() {
        let run = Harness::new(Vec::new()).unwrap().run();
        assert!(run.results.is_empty());
        assert_eq!(run.summary.total, 0);
        assert_eq!(run.summary.passed, 0);
        assert_eq!(run.summary.failed, 0);
        assert_eq!(run.summary.pass_rate(), 0.0);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let cases = vec![
            TestCase::new("Alpha check", || true).unwrap(),
            TestCase::new("beta check", || true).unwrap(),
        ];
        let harness = Harness::new(cases).unwrap().filter("ALPHA");
        assert_eq!(harness.len(), 1);
    }
}
