//! Lispy REPL (Read-Eval-Print Loop)
//!
//! Each input line is evaluated on its own; nothing carries over between lines
//! except the line editor's history.

use std::path::PathBuf;

use log::warn;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use crate::engine::{ExecutionPipeline, OutputSink};
use crate::errors::{print_error, LispyError};

pub const PROMPT: &str = "lispy> ";

/// REPL state that persists across lines.
pub struct ReplState {
    pipeline: ExecutionPipeline,
    line_number: usize,
}

impl ReplState {
    pub fn new(pipeline: ExecutionPipeline) -> Self {
        Self {
            pipeline,
            line_number: 1,
        }
    }

    /// Evaluate one line, sending the printed value to `sink`.
    ///
    /// Parse errors are returned so the caller decides how to show them.
    pub fn eval_line(&mut self, input: &str, sink: &mut dyn OutputSink) -> Result<(), LispyError> {
        let source_name = format!("<stdin:{}>", self.line_number);
        self.line_number += 1;
        let value = self.pipeline.eval_line(input, &source_name)?;
        sink.emit(&value.to_string());
        Ok(())
    }
}

/// Main REPL entry point.
pub fn run_repl(
    pipeline: ExecutionPipeline,
    history: Option<PathBuf>,
    sink: &mut dyn OutputSink,
) -> Result<(), LispyError> {
    println!("Lispy version {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+c to cancel a line, Ctrl+d to exit\n");

    let mut editor = Editor::<()>::new();
    if let Some(path) = &history {
        if editor.load_history(path).is_err() {
            warn!("no history loaded from {}", path.display());
        }
    }

    let mut state = ReplState::new(pipeline);
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                editor.add_history_entry(line.as_str());
                if let Err(e) = state.eval_line(&line, sink) {
                    print_error(e);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &history {
        if let Err(e) = editor.save_history(path) {
            warn!("could not save history to {}: {}", path.display(), e);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::OutputBuffer;

    #[test]
    fn test_lines_are_independent() {
        let mut state = ReplState::new(ExecutionPipeline::default());
        let mut out = OutputBuffer::new();
        state.eval_line("(/ 1 0)", &mut out).unwrap();
        state.eval_line("(+ 1 2)", &mut out).unwrap();
        state.eval_line("", &mut out).unwrap();
        assert_eq!(out.lines(), vec!["Error: division by zero", "3", "()"]);
    }

    #[test]
    fn test_parse_error_does_not_emit() {
        let mut state = ReplState::new(ExecutionPipeline::default());
        let mut out = OutputBuffer::new();
        assert!(state.eval_line("(+ 1", &mut out).is_err());
        assert!(out.as_str().is_empty());
        assert_eq!(state.line_number, 2);
    }
}
