//! Runtime module for the Lispy language
//!
//! This module provides the value model, the reader that builds values from
//! syntax trees, and the evaluator that reduces them.

pub mod eval;
pub mod reader;
pub mod value;

pub use eval::{eval, evaluate, EvalContext, EvalOptions, DEFAULT_MAX_DEPTH};
pub use reader::read;
pub use value::Value;
