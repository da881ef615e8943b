//! Shared helpers for parser tests.
#![allow(dead_code, unused_imports)]

pub use crbasic_syntax::parser::parse;
#[allow(unused_imports)]
pub use crbasic_syntax::syntax::SyntaxKind;

use crbasic_syntax::syntax::SyntaxNode;

/// Formats a parse result for snapshot testing: the tree without trivia,
/// followed by any diagnostics.
pub fn snapshot_parse(source: &str) -> String {
    let parsed = parse(source);
    let syntax = parsed.syntax();

    let mut output = String::new();
    format_node(&syntax, &mut output, 0);

    if !parsed.ok() {
        output.push_str("---\nErrors:\n");
        for err in parsed.diagnostics() {
            output.push_str(&format!("  - {}\n", err));
        }
    }

    output
}

fn format_node(node: &SyntaxNode, out: &mut String, depth: usize) {
    let indent = "  ".repeat(depth);

    out.push_str(&format!(
        "{}{:?}@{:?}\n",
        indent,
        node.kind(),
        node.text_range()
    ));

    for child in node.children_with_tokens() {
        match child {
            rowan::NodeOrToken::Node(n) => format_node(&n, out, depth + 1),
            rowan::NodeOrToken::Token(t) => {
                // Only show non-trivial tokens
                let kind = t.kind();
                if !kind.is_trivia() {
                    out.push_str(&format!(
                        "{}{:?}@{:?} {:?}\n",
                        "  ".repeat(depth + 1),
                        kind,
                        t.text_range(),
                        t.text()
                    ));
                }
            }
        }
    }
}

/// Diagnostic messages in source order.
pub fn messages(source: &str) -> Vec<String> {
    parse(source)
        .diagnostics()
        .iter()
        .map(|d| d.message.clone())
        .collect()
}

/// Kinds of the top-level statements.
pub fn top_level_kinds(source: &str) -> Vec<SyntaxKind> {
    parse(source).syntax().children().map(|n| n.kind()).collect()
}

/// Parses `source`, asserts it is error-free, and returns the root.
pub fn parse_ok(source: &str) -> SyntaxNode {
    let parsed = parse(source);
    assert!(parsed.ok(), "unexpected errors: {:?}", parsed.diagnostics());
    parsed.syntax()
}

/// The first node of `kind` in document order.
pub fn find(root: &SyntaxNode, kind: SyntaxKind) -> SyntaxNode {
    root.descendants()
        .find(|n| n.kind() == kind)
        .unwrap_or_else(|| panic!("no {kind:?} in tree"))
}

/// Asserts the tree reproduces the input exactly.
pub fn assert_lossless(source: &str) {
    assert_eq!(parse(source).syntax().to_string(), source);
}
