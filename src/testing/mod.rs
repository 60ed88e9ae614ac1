//! Script test runner.
//!
//! Scripts are `.lspy` files evaluated line by line. A line ending in
//! `; => <text>` is a test case: the printed result must equal `<text>`.

pub mod discovery;
pub mod runner;

pub use discovery::{TestCase, TestDiscoverer};
pub use runner::{run_case, run_suite, CaseResult, TestSummary};
