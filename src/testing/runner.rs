use std::path::Path;

use log::{debug, info};

use super::discovery::{TestCase, TestDiscoverer};
use crate::engine::ExecutionPipeline;
use crate::errors::LispyError;

/// Outcome of running one script line.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub case: TestCase,
    pub actual: String,
}

impl CaseResult {
    /// `None` when the line had no expectation to check.
    pub fn passed(&self) -> Option<bool> {
        self.case.expected.as_ref().map(|expected| *expected == self.actual)
    }
}

/// All results of a suite run.
#[derive(Debug, Default)]
pub struct TestSummary {
    pub results: Vec<CaseResult>,
}

impl TestSummary {
    pub fn checked(&self) -> usize {
        self.results.iter().filter(|r| r.passed().is_some()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results.iter().filter(|r| r.passed() == Some(false))
    }

    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// `Err(TestFailure)` if any expectation failed.
    pub fn into_result(self) -> Result<Self, LispyError> {
        match self.failed() {
            0 => Ok(self),
            failed => Err(LispyError::TestFailure {
                failed,
                total: self.checked(),
            }),
        }
    }
}

/// Runs a single case. A line the grammar rejects reports its parse error as
/// the actual output rather than aborting the suite.
pub fn run_case(pipeline: &ExecutionPipeline, case: TestCase) -> CaseResult {
    let actual = match pipeline.eval_line(&case.source, &case.location()) {
        Ok(value) => value.to_string(),
        Err(error) => error.to_string(),
    };
    debug!("{} => {}", case.location(), actual);
    CaseResult { case, actual }
}

/// Discovers every script under `root` and runs all of its lines.
pub fn run_suite(pipeline: &ExecutionPipeline, root: &Path) -> Result<TestSummary, LispyError> {
    let mut summary = TestSummary::default();
    for file in TestDiscoverer::discover_test_files(root)? {
        let cases = TestDiscoverer::extract_tests_from_file(&file)?;
        info!("{}: {} lines", file.display(), cases.len());
        summary
            .results
            .extend(cases.into_iter().map(|case| run_case(pipeline, case)));
    }
    Ok(summary)
}
