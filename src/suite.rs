//! The built-in demo suite: five hard-coded cases over the `checks` helpers,
//! plus the static metadata the console reporter renders in its header and
//! environment panel.

use crate::checks::{join_with_semicolon, validate_process_code};
use crate::errors::HarnessError;
use crate::harness::TestCase;

/// Static run metadata shown by the console reporter.
#[derive(Debug, Clone, Copy)]
pub struct SuiteInfo {
    pub product: &'static str,
    pub team: &'static str,
    pub environment: &'static str,
    pub version: &'static str,
}

/// Metadata for the built-in demo suite.
pub const DEMO_INFO: SuiteInfo = SuiteInfo {
    product: "Agibot Process QA",
    team: "Process IT & Quality Operations",
    environment: "pre-production",
    version: "V1.0.0",
};

/// Builds the demo cases in their reporting order.
///
/// Assembly goes through [`TestCase::new`], so a malformed case is caught
/// here rather than mid-run.
pub fn demo_suite() -> Result<Vec<TestCase>, HarnessError> {
    Ok(vec![
        TestCase::new("process code: valid AG-123456", || {
            validate_process_code("AG-123456")
        })?,
        TestCase::new("process code: wrong length AG-12345", || {
            !validate_process_code("AG-12345")
        })?,
        TestCase::new("process code: missing AG- prefix", || {
            !validate_process_code("123456")
        })?,
        TestCase::new("join: team roster", || {
            join_with_semicolon(["process IT", "quality ops", "core robotics"])
                == "process IT;quality ops;core robotics"
        })?,
        TestCase::new("join: empty roster", || {
            join_with_semicolon::<_, &str>([]).is_empty()
        })?,
    ])
}
