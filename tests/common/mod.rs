//! Shared helpers for the Lispy integration tests.

#![allow(dead_code)]

use lispy::engine::ExecutionPipeline;
use lispy::{LispError, Value};

/// Evaluates one line and renders the result the way the REPL prints it.
pub fn eval_str(source: &str) -> String {
    eval_value(source).to_string()
}

/// Evaluates one line, panicking on a parse error.
pub fn eval_value(source: &str) -> Value {
    ExecutionPipeline::default()
        .eval_line(source, "test")
        .unwrap_or_else(|e| panic!("failed to parse {:?}: {}", source, e))
}

/// The language error produced by a line, if any.
pub fn eval_error(source: &str) -> Option<LispError> {
    match eval_value(source) {
        Value::Error(e) => Some(e),
        _ => None,
    }
}

pub fn num(n: i64) -> Value {
    Value::Number(n)
}

pub fn qexpr(items: Vec<Value>) -> Value {
    Value::QExpr(items)
}
