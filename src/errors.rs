//! Lispy Error Handling
//!
//! Two families of errors live here and they never mix:
//!
//! - [`LispError`] is a *language* error. It is carried inside
//!   [`Value::Error`](crate::runtime::Value::Error) and flows through evaluation
//!   as an ordinary value.
//! - [`LispyError`] is a *host* error: the grammar rejected a line, a file could
//!   not be read, the line editor failed. These are returned as `Err` and rendered
//!   through `miette`.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

// ============================================================================
// LANGUAGE ERRORS - carried as values
// ============================================================================

/// Every way evaluation of a Lispy expression can fail.
///
/// The `Display` text is the message printed after `Error: `.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LispError {
    #[error("invalid number '{literal}'")]
    BadNumber { literal: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("cannot operate on non-number; '{operator}' passed {found}")]
    NonNumericOperand {
        operator: String,
        found: &'static str,
    },

    #[error("function '{func}' passed incorrect type; expected {expected}, got {found}")]
    WrongType {
        func: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("function '{func}' passed incorrect number of arguments; expected {expected}, got {actual}")]
    WrongArity {
        func: String,
        expected: String,
        actual: usize,
    },

    #[error("function '{func}' passed {{}}")]
    EmptyList { func: &'static str },

    #[error("S-expression does not start with symbol; found {found}")]
    NotAFunction { found: &'static str },

    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },

    #[error("integer overflow in '{operator}'")]
    IntegerOverflow { operator: String },

    #[error("recursion limit of {limit} exceeded")]
    RecursionLimit { limit: usize },

    #[error("unexpected syntax node '{tag}'")]
    UnexpectedNode { tag: String },
}

// ============================================================================
// HOST ERRORS - returned as Err and reported with miette
// ============================================================================

/// Failures outside the language itself.
#[derive(Debug, Error, Diagnostic)]
pub enum LispyError {
    #[error("Parse error: {message}")]
    #[diagnostic(code(lispy::parse), help("expressions are numbers, symbols, (s-expressions) or {{q-expressions}}"))]
    Parse {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("IO error: could not read '{path}'")]
    #[diagnostic(code(lispy::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Readline error: {0}")]
    #[diagnostic(code(lispy::readline))]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("Test failure: {failed} of {total} expectations failed")]
    #[diagnostic(code(lispy::test))]
    TestFailure { failed: usize, total: usize },
}

impl LispyError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LispyError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Render a host error to stderr with its full diagnostic.
pub fn print_error(error: LispyError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}
