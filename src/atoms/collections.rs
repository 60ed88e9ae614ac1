//! Collection operations for the Lispy language.
//!
//! These atoms treat Q-expressions as plain data: they take lists apart, put
//! them together, and hand them back to the evaluator with `eval`.

use super::helpers::{into_value, qexpr_cells, require_non_empty, require_qexpr, single_arg};
use super::{Atom, BuiltinRegistry};
use crate::runtime::{evaluate, EvalContext, Value};

/// Checks shared by `head` and `tail`, returning the list's elements.
fn non_empty_list(func: &'static str, args: Vec<Value>) -> Result<Vec<Value>, Value> {
    let cells = qexpr_cells(func, single_arg(func, args)?)?;
    require_non_empty(func, &cells)?;
    Ok(cells)
}

/// Wraps its arguments in a Q-expression.
///
/// Usage: (list <a> <b> ...)
///
/// Example:
///   (list 1 2 3) ; => {1 2 3}
pub fn atom_list(args: Vec<Value>, _context: &mut EvalContext) -> Value {
    Value::SExpr(args).into_qexpr()
}

/// First element of a Q-expression, still wrapped in a Q-expression.
///
/// Usage: (head <qexpr>)
///
/// Example:
///   (head {1 2 3}) ; => {1}
pub fn atom_head(args: Vec<Value>, _context: &mut EvalContext) -> Value {
    into_value(
        non_empty_list("head", args)
            .map(|cells| Value::QExpr(Value::QExpr(cells).take(0).into_iter().collect())),
    )
}

/// A Q-expression with its first element removed.
///
/// Usage: (tail <qexpr>)
///
/// Example:
///   (tail {1 2 3}) ; => {2 3}
pub fn atom_tail(args: Vec<Value>, _context: &mut EvalContext) -> Value {
    into_value(non_empty_list("tail", args).map(|cells| {
        let mut list = Value::QExpr(cells);
        list.pop(0);
        list
    }))
}

/// Evaluates a Q-expression as if it were an S-expression.
///
/// Usage: (eval <qexpr>)
///
/// Example:
///   (eval {+ 1 2}) ; => 3
pub fn atom_eval(args: Vec<Value>, context: &mut EvalContext) -> Value {
    match single_arg("eval", args).and_then(|arg| qexpr_cells("eval", arg)) {
        Ok(cells) => evaluate(Value::SExpr(cells), context),
        Err(e) => e,
    }
}

/// Concatenates Q-expressions.
///
/// Usage: (join <qexpr> <qexpr> ...)
///
/// Example:
///   (join {1 2} {3 4}) ; => {1 2 3 4}
pub fn atom_join(args: Vec<Value>, _context: &mut EvalContext) -> Value {
    if let Some(e) = args.iter().find_map(|arg| require_qexpr("join", arg).err()) {
        return e;
    }
    args.into_iter()
        .fold(Value::QExpr(Vec::new()), |joined, next| joined.join(next))
}

pub fn register_collection_atoms(registry: &mut BuiltinRegistry) {
    registry.register(Atom {
        name: "list",
        doc: "wrap the arguments in a Q-expression",
        func: atom_list,
    });
    registry.register(Atom {
        name: "head",
        doc: "first element of a Q-expression, as a Q-expression",
        func: atom_head,
    });
    registry.register(Atom {
        name: "tail",
        doc: "a Q-expression without its first element",
        func: atom_tail,
    });
    registry.register(Atom {
        name: "join",
        doc: "concatenate Q-expressions",
        func: atom_join,
    });
    registry.register(Atom {
        name: "eval",
        doc: "evaluate a Q-expression as an S-expression",
        func: atom_eval,
    });
}
