use std::fmt;

use crate::errors::LispError;

/// Represents a value in the Lispy runtime.
///
/// Every node is owned by exactly one parent, so a `Value` is always a tree.
/// `SExpr` and `QExpr` share a representation and differ only in whether the
/// evaluator reduces them.
///
/// # Examples
///
/// ```rust
/// use lispy::runtime::Value;
/// let n = Value::Number(3);
/// assert_eq!(n.type_name(), "Number");
/// let q = Value::QExpr(vec![Value::Number(1), Value::Symbol("+".into())]);
/// assert_eq!(q.to_string(), "{1 +}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Error(LispError),
    Symbol(String),
    SExpr(Vec<Value>),
    QExpr(Vec<Value>),
}

impl Value {
    /// Shorthand for wrapping a language error.
    pub fn error(error: LispError) -> Self {
        Value::Error(error)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Elements of an S- or Q-expression, `None` for atoms.
    pub fn cells(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    fn cells_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    /// Number of elements; zero for atoms.
    pub fn count(&self) -> usize {
        self.cells().map_or(0, <[Value]>::len)
    }

    // ------------------------------------------------------------------------
    // Ownership-moving list operations
    // ------------------------------------------------------------------------

    /// Appends `x` to the end of a container. Atoms are left unchanged.
    pub fn push(&mut self, x: Value) {
        if let Some(cells) = self.cells_mut() {
            cells.push(x);
        }
    }

    /// Removes and returns the element at `index`, shifting the rest left.
    pub fn pop(&mut self, index: usize) -> Option<Value> {
        let cells = self.cells_mut()?;
        (index < cells.len()).then(|| cells.remove(index))
    }

    /// Extracts the element at `index` and drops the rest of the container.
    pub fn take(self, index: usize) -> Option<Value> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => cells.into_iter().nth(index),
            _ => None,
        }
    }

    /// Moves every element of `other` onto the end of `self`, in order.
    pub fn join(mut self, other: Value) -> Value {
        if let (Some(cells), Value::SExpr(mut more) | Value::QExpr(mut more)) =
            (self.cells_mut(), other)
        {
            cells.append(&mut more);
        }
        self
    }

    /// Retags an S-expression as a Q-expression.
    pub fn into_qexpr(self) -> Value {
        match self {
            Value::SExpr(cells) => Value::QExpr(cells),
            other => other,
        }
    }

    /// Retags a Q-expression as an S-expression.
    pub fn into_sexpr(self) -> Value {
        match self {
            Value::QExpr(cells) => Value::SExpr(cells),
            other => other,
        }
    }

    // ------------------------------------------------------------------------
    // Display formatting helpers
    // ------------------------------------------------------------------------

    fn fmt_cells(f: &mut fmt::Formatter<'_>, items: &[Value], open: char, close: char) -> fmt::Result {
        write!(f, "{}", open)?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "{}", close)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(e) => write!(f, "Error: {}", e),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::SExpr(items) => Value::fmt_cells(f, items, '(', ')'),
            Value::QExpr(items) => Value::fmt_cells(f, items, '{', '}'),
        }
    }
}
