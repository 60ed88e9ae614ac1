//! Core evaluation engine.
//!
//! Only S-expressions are reduced; every other value evaluates to itself.
//! Errors are values here: a reduction that fails returns `Value::Error` and
//! the enclosing reduction passes it on, dropping its siblings.

use log::trace;

use super::Value;
use crate::atoms::BuiltinRegistry;
use crate::errors::LispError;

/// Default nesting limit for S-expression reduction.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Tunable evaluation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
    pub max_depth: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// State threaded through one top-level evaluation.
pub struct EvalContext<'a> {
    pub registry: &'a BuiltinRegistry,
    pub max_depth: usize,
    depth: usize,
}

impl<'a> EvalContext<'a> {
    pub fn new(registry: &'a BuiltinRegistry, options: EvalOptions) -> Self {
        Self {
            registry,
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    /// Current S-expression nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Evaluate `value` with the default builtins and options.
pub fn eval(value: Value) -> Value {
    let mut context = EvalContext::new(BuiltinRegistry::standard(), EvalOptions::default());
    evaluate(value, &mut context)
}

/// Main evaluation entry point.
pub fn evaluate(value: Value, context: &mut EvalContext) -> Value {
    match value {
        Value::SExpr(cells) => evaluate_sexpr(cells, context),
        other => other,
    }
}

fn evaluate_sexpr(cells: Vec<Value>, context: &mut EvalContext) -> Value {
    if context.depth >= context.max_depth {
        return Value::error(LispError::RecursionLimit {
            limit: context.max_depth,
        });
    }

    context.depth += 1;
    let result = reduce(cells, context);
    context.depth -= 1;
    result
}

fn reduce(cells: Vec<Value>, context: &mut EvalContext) -> Value {
    let mut cells: Vec<Value> = cells
        .into_iter()
        .map(|cell| evaluate(cell, context))
        .collect();

    if let Some(index) = cells.iter().position(Value::is_error) {
        return cells.remove(index);
    }

    // `()` stays empty, `(x)` reduces to `x`.
    if cells.len() <= 1 {
        return Value::SExpr(cells)
            .take(0)
            .unwrap_or_else(|| Value::SExpr(Vec::new()));
    }

    match cells.remove(0) {
        Value::Symbol(name) => {
            trace!("depth {}: applying '{}' to {} args", context.depth, name, cells.len());
            let registry = context.registry;
            registry.dispatch(&name, cells, context)
        }
        other => Value::error(LispError::NotAFunction {
            found: other.type_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(x: i64) -> Value {
        Value::Number(x)
    }

    fn sym(s: &str) -> Value {
        Value::symbol(s)
    }

    #[test]
    fn test_atoms_evaluate_to_themselves() {
        let values = vec![
            n(4),
            sym("head"),
            Value::QExpr(vec![sym("+"), n(1), n(2)]),
            Value::error(LispError::DivisionByZero),
        ];
        for v in values {
            assert_eq!(eval(v.clone()), v);
        }
    }

    #[test]
    fn test_empty_and_single_sexpr() {
        assert_eq!(eval(Value::SExpr(vec![])), Value::SExpr(vec![]));
        assert_eq!(eval(Value::SExpr(vec![n(5)])), n(5));
        assert_eq!(
            eval(Value::SExpr(vec![Value::SExpr(vec![n(5)])])),
            n(5)
        );
    }

    #[test]
    fn test_single_container_element_is_unwrapped_once() {
        let list = Value::QExpr(vec![n(1), n(2)]);
        assert_eq!(eval(Value::SExpr(vec![list.clone()])), list);
        assert_eq!(
            eval(Value::SExpr(vec![Value::SExpr(vec![])])),
            Value::SExpr(vec![])
        );
    }

    #[test]
    fn test_call() {
        let expr = Value::SExpr(vec![sym("+"), n(1), n(2), n(3)]);
        assert_eq!(eval(expr), n(6));
    }

    #[test]
    fn test_first_error_in_scan_order_wins() {
        let expr = Value::SExpr(vec![
            sym("+"),
            Value::SExpr(vec![sym("foo"), n(1), n(1)]),
            Value::SExpr(vec![sym("/"), n(1), n(0)]),
        ]);
        assert_eq!(
            eval(expr),
            Value::error(LispError::UnknownFunction { name: "foo".into() })
        );
    }

    #[test]
    fn test_not_a_function() {
        let expr = Value::SExpr(vec![n(1), n(2)]);
        assert_eq!(
            eval(expr),
            Value::error(LispError::NotAFunction { found: "Number" })
        );
    }

    #[test]
    fn test_lone_symbol_reduces_to_itself() {
        assert_eq!(eval(Value::SExpr(vec![sym("+")])), sym("+"));
    }

    #[test]
    fn test_recursion_limit() {
        let mut expr = n(1);
        for _ in 0..10 {
            expr = Value::SExpr(vec![expr]);
        }
        let registry = BuiltinRegistry::standard();
        let mut context = EvalContext::new(registry, EvalOptions { max_depth: 5 });
        assert_eq!(
            evaluate(expr, &mut context),
            Value::error(LispError::RecursionLimit { limit: 5 })
        );
        assert_eq!(context.depth(), 0);
    }
}
