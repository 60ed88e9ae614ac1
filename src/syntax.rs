//! Syntax module for the Lispy language
//!
//! This module owns the grammar and the concrete syntax tree handed to the
//! reader. The tree is deliberately untyped: every node carries a `tag` naming
//! the grammar rules it came from, its matched `contents`, and its children.

use std::fmt;

use serde::Serialize;

pub mod parser;

pub use parser::parse;

/// Tag of the root node of every parsed line.
pub const ROOT_TAG: &str = ">";

/// Tag of the zero-width start/end markers around the root's expressions.
pub const MARKER_TAG: &str = "regex";

/// Tag of the delimiter leaves `(`, `)`, `{`, `}`.
pub const CHAR_TAG: &str = "char";

/// A node of the concrete syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxNode {
    pub tag: String,
    pub contents: String,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// A leaf node with matched text and no children.
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            contents: contents.into(),
            children: Vec::new(),
        }
    }

    /// An interior node; interior nodes have empty contents.
    pub fn branch(tag: impl Into<String>, children: Vec<SyntaxNode>) -> Self {
        Self {
            tag: tag.into(),
            contents: String::new(),
            children,
        }
    }

    /// The root of a line: start marker, expressions, end marker.
    pub fn root(expressions: Vec<SyntaxNode>) -> Self {
        let mut children = Vec::with_capacity(expressions.len() + 2);
        children.push(Self::leaf(MARKER_TAG, ""));
        children.extend(expressions);
        children.push(Self::leaf(MARKER_TAG, ""));
        Self::branch(ROOT_TAG, children)
    }

    pub fn is_root(&self) -> bool {
        self.tag == ROOT_TAG
    }

    /// Indented tree dump, one node per line.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.write_pretty(&mut out, 0);
        out
    }

    fn write_pretty(&self, out: &mut String, depth: usize) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&self.tag);
        if !self.contents.is_empty() {
            out.push_str(" '");
            out.push_str(&self.contents);
            out.push('\'');
        }
        out.push('\n');
        for child in &self.children {
            child.write_pretty(out, depth + 1);
        }
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_wraps_markers() {
        let root = SyntaxNode::root(vec![SyntaxNode::leaf("expr|number|regex", "1")]);
        assert!(root.is_root());
        assert_eq!(root.children.len(), 3);
        assert_eq!(root.children[0].tag, MARKER_TAG);
        assert_eq!(root.children[2].tag, MARKER_TAG);
    }

    #[test]
    fn test_pretty_indents_children() {
        let root = SyntaxNode::root(vec![SyntaxNode::leaf("expr|symbol|regex", "+")]);
        assert_eq!(root.pretty(), ">\n  regex\n  expr|symbol|regex '+'\n  regex\n");
    }
}
