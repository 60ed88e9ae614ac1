//! Lispy Parser
//!
//! Converts one line of Lispy source into a [`SyntaxNode`] tree. This parser is
//! purely syntactic: number literals are not range-checked here, that is the
//! reader's job.

use log::trace;
use miette::{NamedSource, SourceSpan};
use pest::{error::InputLocation, iterators::Pair, Parser};
use pest_derive::Parser;

use super::{SyntaxNode, CHAR_TAG};
use crate::errors::LispyError;

#[derive(Parser)]
#[grammar = "syntax/grammar.pest"]
struct LispyParser;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parse a line of source into its syntax tree.
///
/// `source_name` only labels diagnostics (e.g. `<stdin>` or `script.lspy:3`).
pub fn parse(source: &str, source_name: &str) -> Result<SyntaxNode, LispyError> {
    let mut pairs = LispyParser::parse(Rule::lispy, source)
        .map_err(|e| convert_parse_error(e, source, source_name))?;

    let expressions = match pairs.next() {
        Some(program) => program
            .into_inner()
            .filter(|p| p.as_rule() != Rule::EOI)
            .map(build_node)
            .collect(),
        None => Vec::new(),
    };

    let root = SyntaxNode::root(expressions);
    trace!("parsed {:?} into {} top-level nodes", source, root.children.len() - 2);
    Ok(root)
}

// ============================================================================
// TREE BUILDERS
// ============================================================================

fn build_node(pair: Pair<Rule>) -> SyntaxNode {
    match pair.as_rule() {
        Rule::number => SyntaxNode::leaf("expr|number|regex", pair.as_str()),
        Rule::symbol => SyntaxNode::leaf("expr|symbol|regex", pair.as_str()),
        Rule::sexpr => SyntaxNode::branch("expr|sexpr|>", build_children(pair)),
        Rule::qexpr => SyntaxNode::branch("expr|qexpr|>", build_children(pair)),
        Rule::lparen | Rule::rparen | Rule::lbrace | Rule::rbrace => {
            SyntaxNode::leaf(CHAR_TAG, pair.as_str())
        }
        // The remaining rules are silent or never nested.
        rule => SyntaxNode::leaf(format!("{:?}", rule), pair.as_str()),
    }
}

fn build_children(pair: Pair<Rule>) -> Vec<SyntaxNode> {
    pair.into_inner().map(build_node).collect()
}

fn convert_parse_error(
    error: pest::error::Error<Rule>,
    source: &str,
    source_name: &str,
) -> LispyError {
    let span: SourceSpan = match error.location {
        InputLocation::Pos(pos) => (pos, 0).into(),
        InputLocation::Span((start, end)) => (start, end - start).into(),
    };

    let message = match error.variant.message().as_ref() {
        m if m.contains("rparen") => "missing closing parenthesis".to_string(),
        m if m.contains("rbrace") => "missing closing brace".to_string(),
        m => m.replace("EOI", "end of input"),
    };

    LispyError::Parse {
        message,
        src: NamedSource::new(source_name, source.to_string()),
        span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::MARKER_TAG;

    fn expressions(source: &str) -> Vec<SyntaxNode> {
        let root = parse(source, "test").unwrap();
        root.children[1..root.children.len() - 1].to_vec()
    }

    #[test]
    fn test_empty_input() {
        let root = parse("", "test").unwrap();
        assert!(root.is_root());
        assert_eq!(root.children.len(), 2);
        assert!(root.children.iter().all(|c| c.tag == MARKER_TAG));
    }

    #[test]
    fn test_simple_number() {
        let nodes = expressions("42");
        assert_eq!(nodes, vec![SyntaxNode::leaf("expr|number|regex", "42")]);
    }

    #[test]
    fn test_negative_number_and_minus_symbol() {
        let nodes = expressions("- -5");
        assert_eq!(nodes[0].tag, "expr|symbol|regex");
        assert_eq!(nodes[1], SyntaxNode::leaf("expr|number|regex", "-5"));
    }

    #[test]
    fn test_number_followed_by_letters_is_symbol() {
        let nodes = expressions("-5x");
        assert_eq!(nodes, vec![SyntaxNode::leaf("expr|symbol|regex", "-5x")]);
    }

    #[test]
    fn test_sexpr_keeps_delimiters() {
        let nodes = expressions("(+ 1 2)");
        let sexpr = &nodes[0];
        assert_eq!(sexpr.tag, "expr|sexpr|>");
        let contents: Vec<_> = sexpr.children.iter().map(|c| c.contents.as_str()).collect();
        assert_eq!(contents, vec!["(", "+", "1", "2", ")"]);
        assert_eq!(sexpr.children[0].tag, CHAR_TAG);
    }

    #[test]
    fn test_qexpr_nested() {
        let nodes = expressions("{1 (2) {}}");
        let qexpr = &nodes[0];
        assert_eq!(qexpr.tag, "expr|qexpr|>");
        assert_eq!(qexpr.children[2].tag, "expr|sexpr|>");
        assert_eq!(qexpr.children[3].tag, "expr|qexpr|>");
    }

    #[test]
    fn test_comments_are_skipped() {
        let nodes = expressions("(+ 1 2) ; => 3");
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_unmatched_paren() {
        let result = parse("(+ 1 2", "test");
        assert!(matches!(result, Err(LispyError::Parse { .. })));
    }

    #[test]
    fn test_stray_closer_is_rejected() {
        assert!(parse("1 }", "test").is_err());
    }
}
