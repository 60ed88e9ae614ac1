//! # Mathematical Operations
//!
//! Integer arithmetic atoms. Every operator folds its arguments left to right
//! starting from the first one; `-` with a single argument negates it.
//!
//! ## Atoms Provided
//!
//! - `+`, `-`, `*`, `/`, `%`, `^`
//!
//! All arithmetic is checked: leaving the 64-bit range yields
//! `IntegerOverflow` instead of wrapping.

use super::helpers::{extract_numbers, into_value, require_min_arity};
use super::{Atom, BuiltinRegistry};
use crate::errors::LispError;
use crate::runtime::{EvalContext, Value};

/// A binary step of the fold. `Err` aborts the whole fold.
type StepFn = fn(i64, i64) -> Result<i64, LispError>;

fn overflow(operator: &str) -> LispError {
    LispError::IntegerOverflow {
        operator: operator.to_string(),
    }
}

/// Shared driver for every arithmetic atom.
fn fold_numbers(operator: &str, args: Vec<Value>, step: StepFn) -> Value {
    into_value(apply_fold(operator, &args, step))
}

fn apply_fold(operator: &str, args: &[Value], step: StepFn) -> Result<Value, Value> {
    let numbers = extract_numbers(operator, args)?;
    require_min_arity(operator, args, 1)?;

    if operator == "-" && numbers.len() == 1 {
        return numbers[0]
            .checked_neg()
            .map(Value::Number)
            .ok_or_else(|| Value::error(overflow(operator)));
    }

    let mut rest = numbers.into_iter();
    let first = rest.next().unwrap_or_default();
    rest.try_fold(first, step)
        .map(Value::Number)
        .map_err(Value::error)
}

fn add(x: i64, y: i64) -> Result<i64, LispError> {
    x.checked_add(y).ok_or_else(|| overflow("+"))
}

fn sub(x: i64, y: i64) -> Result<i64, LispError> {
    x.checked_sub(y).ok_or_else(|| overflow("-"))
}

fn mul(x: i64, y: i64) -> Result<i64, LispError> {
    x.checked_mul(y).ok_or_else(|| overflow("*"))
}

fn div(x: i64, y: i64) -> Result<i64, LispError> {
    if y == 0 {
        return Err(LispError::DivisionByZero);
    }
    x.checked_div(y).ok_or_else(|| overflow("/"))
}

fn rem(x: i64, y: i64) -> Result<i64, LispError> {
    if y == 0 {
        return Err(LispError::DivisionByZero);
    }
    // i64::MIN % -1 overflows in the intermediate division only.
    Ok(x.checked_rem(y).unwrap_or(0))
}

/// Exact integer power. A negative exponent truncates the fraction toward zero.
fn pow(base: i64, exponent: i64) -> Result<i64, LispError> {
    if exponent < 0 {
        return match base {
            0 => Err(LispError::DivisionByZero),
            1 => Ok(1),
            -1 if exponent % 2 == 0 => Ok(1),
            -1 => Ok(-1),
            _ => Ok(0),
        };
    }
    match base {
        0 | 1 => Ok(if exponent == 0 { 1 } else { base }),
        -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => u32::try_from(exponent)
            .ok()
            .and_then(|e| base.checked_pow(e))
            .ok_or_else(|| overflow("^")),
    }
}

/// Adds numbers.
///
/// Usage: (+ <a> <b> ...)
///
/// Example:
///   (+ 1 2 3) ; => 6
pub fn atom_add(args: Vec<Value>, _context: &mut EvalContext) -> Value {
    fold_numbers("+", args, add)
}

/// Subtracts, or negates a single argument.
///
/// Usage: (- <a> <b> ...)
///
/// Example:
///   (- 10 3 2) ; => 5
///   (- 5) ; => -5
pub fn atom_sub(args: Vec<Value>, _context: &mut EvalContext) -> Value {
    fold_numbers("-", args, sub)
}

/// Multiplies numbers.
///
/// Usage: (* <a> <b> ...)
///
/// Example:
///   (* 2 3 4) ; => 24
pub fn atom_mul(args: Vec<Value>, _context: &mut EvalContext) -> Value {
    fold_numbers("*", args, mul)
}

/// Truncating integer division.
///
/// Usage: (/ <a> <b> ...)
///
/// Example:
///   (/ 7 2) ; => 3
/// Note: Errors on division by zero.
pub fn atom_div(args: Vec<Value>, _context: &mut EvalContext) -> Value {
    fold_numbers("/", args, div)
}

/// Integer remainder; the sign follows the dividend.
///
/// Usage: (% <a> <b> ...)
///
/// Example:
///   (% 10 3) ; => 1
pub fn atom_mod(args: Vec<Value>, _context: &mut EvalContext) -> Value {
    fold_numbers("%", args, rem)
}

/// Raises to a power.
///
/// Usage: (^ <base> <exponent> ...)
///
/// Example:
///   (^ 2 10) ; => 1024
pub fn atom_pow(args: Vec<Value>, _context: &mut EvalContext) -> Value {
    fold_numbers("^", args, pow)
}

pub fn register_math_atoms(registry: &mut BuiltinRegistry) {
    let atoms: [(&'static str, &'static str, super::AtomFn); 6] = [
        ("+", "add numbers", atom_add),
        ("-", "subtract numbers, or negate one", atom_sub),
        ("*", "multiply numbers", atom_mul),
        ("/", "divide numbers, truncating", atom_div),
        ("%", "remainder of division", atom_mod),
        ("^", "raise to a power", atom_pow),
    ];
    for (name, doc, func) in atoms {
        registry.register(Atom { name, doc, func });
    }
}
