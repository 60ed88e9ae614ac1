use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::engine::script_lines;
use crate::errors::LispyError;

/// Marker separating an expression from its expected printed result.
pub const EXPECT_MARKER: &str = "; =>";

/// File extension of Lispy scripts.
pub const SCRIPT_EXTENSION: &str = "lspy";

/// One line of a script, optionally carrying an expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub file: PathBuf,
    pub line: usize,
    pub source: String,
    pub expected: Option<String>,
}

impl TestCase {
    /// Splits `(+ 1 2) ; => 3` into its expression and expectation.
    pub fn from_line(file: &Path, line: usize, text: &str) -> Self {
        let (source, expected) = match text.find(EXPECT_MARKER) {
            Some(at) => (
                &text[..at],
                Some(text[at + EXPECT_MARKER.len()..].trim().to_string()),
            ),
            None => (text, None),
        };
        Self {
            file: file.to_path_buf(),
            line,
            source: source.trim().to_string(),
            expected,
        }
    }

    /// `path:line` label used in reports and diagnostics.
    pub fn location(&self) -> String {
        format!("{}:{}", self.file.display(), self.line)
    }
}

/// Discovers test scripts within a directory tree.
#[derive(Debug)]
pub struct TestDiscoverer;

impl TestDiscoverer {
    fn is_script_file(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == SCRIPT_EXTENSION)
    }

    /// Recursively scans a directory for `.lspy` files.
    ///
    /// The returned list of files is sorted to ensure deterministic execution order.
    pub fn discover_test_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>, LispyError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root.as_ref()) {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map_or_else(|| root.as_ref().to_path_buf(), Path::to_path_buf);
                LispyError::io(path, e.into())
            })?;
            if entry.file_type().is_file() && Self::is_script_file(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }
        files.sort();
        Ok(files)
    }

    /// Reads a script and turns each code line into a test case.
    pub fn extract_tests_from_file<P: AsRef<Path>>(
        file_path: P,
    ) -> Result<Vec<TestCase>, LispyError> {
        let path = file_path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| LispyError::io(path, e))?;
        Ok(script_lines(&source)
            .map(|(line, text)| TestCase::from_line(path, line, text))
            .collect())
    }
}
