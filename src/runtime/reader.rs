//! Reader: syntax tree to value tree.
//!
//! The reader is driven entirely by node tags, so it accepts any tree with the
//! shape produced by [`crate::syntax::parse`].

use log::debug;

use super::Value;
use crate::errors::LispError;
use crate::syntax::{SyntaxNode, MARKER_TAG};

/// Converts one syntax node into a value.
///
/// A malformed literal becomes an `Error` value in place; reading never fails
/// as a whole.
pub fn read(node: &SyntaxNode) -> Value {
    if node.tag.contains("number") {
        return read_number(&node.contents);
    }
    if node.tag.contains("symbol") {
        return Value::Symbol(node.contents.clone());
    }

    let mut list = if node.is_root() || node.tag.contains("sexpr") {
        Value::SExpr(Vec::new())
    } else if node.tag.contains("qexpr") {
        Value::QExpr(Vec::new())
    } else {
        debug!("reader hit unexpected node tag {:?}", node.tag);
        return Value::error(LispError::UnexpectedNode {
            tag: node.tag.clone(),
        });
    };

    for child in node.children.iter().filter(|c| is_structural(c)) {
        list.push(read(child));
    }
    list
}

fn read_number(literal: &str) -> Value {
    match literal.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => {
            debug!("number literal {:?} out of range", literal);
            Value::error(LispError::BadNumber {
                literal: literal.to_string(),
            })
        }
    }
}

/// Delimiters and lexical markers carry no value.
fn is_structural(child: &SyntaxNode) -> bool {
    !matches!(child.contents.as_str(), "(" | ")" | "{" | "}") && child.tag != MARKER_TAG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{parse, CHAR_TAG};

    fn read_str(source: &str) -> Value {
        read(&parse(source, "test").unwrap())
    }

    #[test]
    fn test_root_is_sexpr() {
        assert_eq!(read_str(""), Value::SExpr(vec![]));
        assert_eq!(
            read_str("+ 1"),
            Value::SExpr(vec![Value::symbol("+"), Value::Number(1)])
        );
    }

    #[test]
    fn test_nested_lists() {
        let v = read_str("(head {1 (2)})");
        assert_eq!(
            v,
            Value::SExpr(vec![Value::SExpr(vec![
                Value::symbol("head"),
                Value::QExpr(vec![
                    Value::Number(1),
                    Value::SExpr(vec![Value::Number(2)]),
                ]),
            ])])
        );
    }

    #[test]
    fn test_out_of_range_number_is_error_in_place() {
        let v = read_str("1 99999999999999999999");
        assert_eq!(
            v,
            Value::SExpr(vec![
                Value::Number(1),
                Value::error(LispError::BadNumber {
                    literal: "99999999999999999999".into()
                }),
            ])
        );
    }

    #[test]
    fn test_extreme_numbers() {
        assert_eq!(
            read(&SyntaxNode::leaf("expr|number|regex", "-9223372036854775808")),
            Value::Number(i64::MIN)
        );
    }

    #[test]
    fn test_skips_delimiters_and_markers() {
        let node = SyntaxNode::branch(
            "expr|qexpr|>",
            vec![
                SyntaxNode::leaf(CHAR_TAG, "{"),
                SyntaxNode::leaf(MARKER_TAG, ""),
                SyntaxNode::leaf("expr|symbol|regex", "tail"),
                SyntaxNode::leaf(CHAR_TAG, "}"),
            ],
        );
        assert_eq!(read(&node), Value::QExpr(vec![Value::symbol("tail")]));
    }

    #[test]
    fn test_unknown_tag() {
        let v = read(&SyntaxNode::leaf("string", "\"hi\""));
        assert!(matches!(v, Value::Error(LispError::UnexpectedNode { .. })));
    }
}
