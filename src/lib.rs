//! Lispy: a small Lisp with S-expressions, Q-expressions and built-in
//! list and arithmetic functions.
//!
//! ```rust
//! use lispy::engine::ExecutionPipeline;
//! let pipeline = ExecutionPipeline::default();
//! let value = pipeline.eval_line("eval (head {(+ 1 2) (+ 10 20)})", "doc").unwrap();
//! assert_eq!(value.to_string(), "3");
//! ```

pub use crate::errors::{LispError, LispyError};
pub use crate::runtime::Value;

pub mod atoms;
pub mod cli;
pub mod engine;
pub mod errors;
pub mod repl;
pub mod runtime;
pub mod syntax;
pub mod testing;
