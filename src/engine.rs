//! Execution pipeline: parse, read, evaluate, print.
//!
//! Everything above the evaluator that is shared by the REPL, the `run` and
//! `eval` commands, and the script test runner lives here.

use std::path::Path;

use log::{debug, info};

use crate::atoms::BuiltinRegistry;
use crate::errors::LispyError;
use crate::runtime::{evaluate, read, EvalContext, EvalOptions, Value};
use crate::syntax::{self, SyntaxNode};

// ============================================================================
// OUTPUT SINKS
// ============================================================================

/// Destination for printed results, injectable so runs are testable.
pub trait OutputSink {
    fn emit(&mut self, text: &str);
}

/// Collects output into a String for tests or programmatic capture.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    pub buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Emitted lines, in order.
    pub fn lines(&self) -> Vec<&str> {
        self.buffer.lines().collect()
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, text: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(text);
    }
}

/// Writes each emitted text to stdout on its own line.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, text: &str) {
        println!("{}", text);
    }
}

// ============================================================================
// EXECUTION PIPELINE
// ============================================================================

/// The single entry point from source text to printed values.
#[derive(Clone)]
pub struct ExecutionPipeline {
    pub options: EvalOptions,
    registry: BuiltinRegistry,
}

impl Default for ExecutionPipeline {
    fn default() -> Self {
        Self::new(EvalOptions::default())
    }
}

impl ExecutionPipeline {
    pub fn new(options: EvalOptions) -> Self {
        Self {
            options,
            registry: BuiltinRegistry::standard().clone(),
        }
    }

    pub fn registry(&self) -> &BuiltinRegistry {
        &self.registry
    }

    /// Parses one line into its syntax tree.
    pub fn parse_line(&self, line: &str, source_name: &str) -> Result<SyntaxNode, LispyError> {
        syntax::parse(line, source_name)
    }

    /// Reads and evaluates an already parsed line.
    pub fn eval_tree(&self, tree: &SyntaxNode) -> Value {
        let mut context = EvalContext::new(&self.registry, self.options);
        evaluate(read(tree), &mut context)
    }

    /// Parses, reads and evaluates one line.
    ///
    /// Language errors come back as `Ok(Value::Error(..))`; only a line the
    /// grammar rejects is an `Err`.
    pub fn eval_line(&self, line: &str, source_name: &str) -> Result<Value, LispyError> {
        let tree = self.parse_line(line, source_name)?;
        let value = self.eval_tree(&tree);
        debug!("{} => {}", line.trim(), value);
        Ok(value)
    }

    /// Runs every line of a script, emitting each printed result.
    ///
    /// Blank and comment-only lines are skipped. A line that fails to parse
    /// stops the run.
    pub fn execute_source(
        &self,
        source: &str,
        source_name: &str,
        sink: &mut dyn OutputSink,
    ) -> Result<usize, LispyError> {
        let mut evaluated = 0;
        for (number, line) in script_lines(source) {
            let value = self.eval_line(line, &format!("{}:{}", source_name, number))?;
            sink.emit(&value.to_string());
            evaluated += 1;
        }
        info!("{}: evaluated {} lines", source_name, evaluated);
        Ok(evaluated)
    }

    /// Reads a script from disk and runs it.
    pub fn execute_file(&self, path: &Path, sink: &mut dyn OutputSink) -> Result<usize, LispyError> {
        let source = std::fs::read_to_string(path).map_err(|e| LispyError::io(path, e))?;
        self.execute_source(&source, &path.display().to_string(), sink)
    }
}

/// Lines of a script that contain code, with 1-based line numbers.
pub fn script_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| {
            let code = line.trim_start();
            !code.is_empty() && !code.starts_with(';')
        })
}
