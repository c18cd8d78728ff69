//! Tree-sitter parse check for generated Go source.
//!
//! The assembled document is parsed once with the Go grammar. Nothing is
//! kept from the tree; the parse either succeeds or reports the position of
//! the first error or missing node.

use std::fmt;
use tree_sitter::{Language, Node, Parser, Tree};

/// First syntax error found in a document, 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

impl std::error::Error for SyntaxError {}

type ParseResult<T> = Result<T, SyntaxError>;

fn go_language() -> Language {
    tree_sitter_go::LANGUAGE.into()
}

/// Parse Go source code into a tree-sitter tree
pub fn parse_source(content: &str) -> ParseResult<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&go_language())
        .map_err(|e| grammar_failure(format!("Failed to set tree-sitter language: {}", e)))?;
    parser
        .parse(content, None)
        .ok_or_else(|| grammar_failure("Failed to parse source code".to_string()))
}

fn grammar_failure(message: String) -> SyntaxError {
    SyntaxError {
        message,
        line: 1,
        column: 1,
    }
}

/// Check if a parse tree has errors
pub fn has_parse_errors(tree: &Tree) -> bool {
    tree.root_node().has_error()
}

/// Get the line number for a tree-sitter node (1-indexed)
fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Get the column number for a tree-sitter node (1-indexed)
fn node_column(node: &Node) -> usize {
    node.start_position().column + 1
}

/// Depth-first search for the first ERROR or MISSING node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_error);
    found
}

fn describe(node: &Node, source: &str) -> String {
    if node.is_missing() {
        return format!("missing {}", node.kind());
    }
    let text = &source[node.start_byte()..node.end_byte()];
    match text.lines().next().map(str::trim).filter(|t| !t.is_empty()) {
        Some(snippet) => format!("syntax error near `{}`", snippet),
        None => "syntax error".to_string(),
    }
}

/// Parses `source` as a Go file.
pub fn check_source(source: &str) -> ParseResult<()> {
    let tree = parse_source(source)?;
    if !has_parse_errors(&tree) {
        return Ok(());
    }
    let root = tree.root_node();
    let node = first_error(root).unwrap_or(root);
    Err(SyntaxError {
        message: describe(&node, source),
        line: node_line(&node),
        column: node_column(&node),
    })
}
