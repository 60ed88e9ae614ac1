// Lispy Integration Test Runner
// Runs every .lspy script in tests/scripts/ two ways: line expectations through
// the test runner, and whole-script output against a sibling .expected file.

use std::fs;
use std::path::{Path, PathBuf};

use lispy::engine::{ExecutionPipeline, OutputBuffer};
use lispy::testing::{run_suite, TestDiscoverer};

const SCRIPTS: &str = "tests/scripts";

fn read_file_trimmed(path: &Path) -> String {
    fs::read_to_string(path)
        .expect("Failed to read file")
        .replace("\r\n", "\n")
        .trim()
        .to_string()
}

fn scripts_with_expected_output() -> Vec<(PathBuf, PathBuf)> {
    TestDiscoverer::discover_test_files(SCRIPTS)
        .expect("Failed to discover scripts")
        .into_iter()
        .filter_map(|script| {
            let expected = script.with_extension("expected");
            expected.exists().then_some((script, expected))
        })
        .collect()
}

#[test]
fn line_expectations() {
    let summary = run_suite(&ExecutionPipeline::default(), Path::new(SCRIPTS)).unwrap();
    assert!(summary.checked() > 0, "No expectations found in {}", SCRIPTS);
    for failure in summary.failures() {
        eprintln!(
            "{}: expected {:?}, got {:?}",
            failure.case.location(),
            failure.case.expected,
            failure.actual
        );
    }
    assert!(summary.is_success(), "{} expectations failed", summary.failed());
}

#[test]
fn whole_script_output() {
    let scripts = scripts_with_expected_output();
    assert!(!scripts.is_empty(), "No .expected files found in {}", SCRIPTS);

    for (script, expected) in scripts {
        let mut output = OutputBuffer::new();
        ExecutionPipeline::default()
            .execute_file(&script, &mut output)
            .expect("Script failed to parse");
        assert_eq!(
            output.as_str().trim(),
            read_file_trimmed(&expected),
            "output mismatch for {}",
            script.display()
        );
    }
}
