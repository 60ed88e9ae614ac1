//! Argument checks shared by all atoms.
//!
//! Each check returns the error to hand back as-is; the caller drops its
//! arguments simply by returning.

use crate::errors::LispError;
use crate::runtime::Value;

/// Result of an argument check: the error is already wrapped as a value.
pub type CheckResult = Result<(), Value>;

/// Requires at least `minimum` arguments.
pub fn require_min_arity(func: &str, args: &[Value], minimum: usize) -> CheckResult {
    if args.len() < minimum {
        return Err(Value::error(LispError::WrongArity {
            func: func.to_string(),
            expected: format!("at least {}", minimum),
            actual: args.len(),
        }));
    }
    Ok(())
}

/// Unwraps the only argument of a one-argument atom.
pub fn single_arg(func: &str, args: Vec<Value>) -> Result<Value, Value> {
    let [arg]: [Value; 1] = args.try_into().map_err(|args: Vec<Value>| {
        Value::error(LispError::WrongArity {
            func: func.to_string(),
            expected: "1".to_string(),
            actual: args.len(),
        })
    })?;
    Ok(arg)
}

/// Unwraps the elements of a Q-expression argument.
pub fn qexpr_cells(func: &'static str, arg: Value) -> Result<Vec<Value>, Value> {
    match arg {
        Value::QExpr(cells) => Ok(cells),
        other => Err(Value::error(LispError::WrongType {
            func,
            expected: "Q-Expression",
            found: other.type_name(),
        })),
    }
}

/// Collapses an atom's internal result; errors are already values.
pub fn into_value(result: Result<Value, Value>) -> Value {
    result.unwrap_or_else(|error| error)
}

/// Requires `arg` to be a Q-expression.
pub fn require_qexpr(func: &'static str, arg: &Value) -> CheckResult {
    match arg {
        Value::QExpr(_) => Ok(()),
        other => Err(Value::error(LispError::WrongType {
            func,
            expected: "Q-Expression",
            found: other.type_name(),
        })),
    }
}

/// Requires a list to hold at least one element.
pub fn require_non_empty(func: &'static str, cells: &[Value]) -> CheckResult {
    if cells.is_empty() {
        return Err(Value::error(LispError::EmptyList { func }));
    }
    Ok(())
}

/// Collects every argument as a number, or fails on the first non-number.
pub fn extract_numbers(operator: &str, args: &[Value]) -> Result<Vec<i64>, Value> {
    args.iter()
        .map(|arg| {
            arg.as_number().ok_or_else(|| {
                Value::error(LispError::NonNumericOperand {
                    operator: operator.to_string(),
                    found: arg.type_name(),
                })
            })
        })
        .collect()
}
