//! Parser for CRBasic.
//!
//! This module provides a hand-written recursive descent parser that builds
//! a lossless concrete syntax tree (CST) using the `rowan` library.
//!
//! # Design
//!
//! - **Error-tolerant**: every problem becomes a [`Diagnostic`] and parsing
//!   resumes at the next statement boundary; the tree always covers the whole
//!   input.
//! - **Lossless**: whitespace, line breaks and comments are kept as trivia.
//! - **Line oriented**: statements end at line breaks, which are trivia to
//!   the grammar but visible through the token source.
//!
//! # Architecture
//!
//! 1. **Lexing**: tokenize source text (see the `lexer` module)
//! 2. **Parsing**: grammar functions emit a flat stream of events
//! 3. **Tree building**: the sink replays the events into a `rowan` green tree

#![allow(clippy::module_inception)]

mod event;
mod grammar;
mod options;
mod parser;
mod sink;
mod source;

pub use options::ParseOptions;
pub(crate) use parser::{CompletedMarker, Parser};

use std::fmt::Write as _;

use tracing::debug;

use crate::diagnostics::Diagnostic;
use crate::lexer::{lex, lex_errors};
use crate::line_index::LineIndex;
use crate::syntax::{SyntaxElement, SyntaxNode};

/// Result of parsing source text.
#[derive(Debug, Clone)]
pub struct Parse {
    green_node: rowan::GreenNode,
    diagnostics: Vec<Diagnostic>,
    line_index: LineIndex,
}

impl Parse {
    /// Returns the root syntax node (a `SourceFile`).
    #[must_use]
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green_node.clone())
    }

    /// Returns lex and syntax diagnostics, ordered by position.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if parsing produced no diagnostics.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Line/column lookup for the parsed text.
    #[must_use]
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Indented dump of the tree: one line per node or significant token,
    /// trivia omitted.
    ///
    /// ```text
    /// SourceFile@0..5
    ///   Assignment@0..5
    ///     Identifier@0..1
    ///       Ident@0..1 "x"
    ///     Eq@2..3 "="
    ///     NumberLiteral@4..5
    ///       Number@4..5 "1"
    /// ```
    #[must_use]
    pub fn debug_tree(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, &SyntaxElement::Node(self.syntax()), 0);
        out
    }
}

fn write_element(out: &mut String, element: &SyntaxElement, depth: usize) {
    let indent = "  ".repeat(depth);
    match element {
        SyntaxElement::Node(node) => {
            let _ = writeln!(out, "{indent}{:?}@{:?}", node.kind(), node.text_range());
            for child in node.children_with_tokens() {
                write_element(out, &child, depth + 1);
            }
        }
        SyntaxElement::Token(token) => {
            if !token.kind().is_trivia() {
                let _ = writeln!(
                    out,
                    "{indent}{:?}@{:?} {:?}",
                    token.kind(),
                    token.text_range(),
                    token.text()
                );
            }
        }
    }
}

/// Parses source text into a syntax tree with default options.
#[must_use]
pub fn parse(source: &str) -> Parse {
    parse_with_options(source, &ParseOptions::default())
}

/// Parses source text into a syntax tree.
#[must_use]
pub fn parse_with_options(source: &str, options: &ParseOptions) -> Parse {
    let tokens = lex(source);
    let parser = Parser::new(&tokens, source, *options);
    let (events, syntax_errors) = parser.parse();
    let green_node = sink::Sink::new(&tokens, source, events).finish();

    let line_index = LineIndex::new(source);
    let mut raw = lex_errors(&tokens, source);
    raw.extend(syntax_errors);
    raw.sort_by_key(|diagnostic| diagnostic.range.start());
    let diagnostics: Vec<_> = raw
        .into_iter()
        .map(|diagnostic| diagnostic.resolve(&line_index))
        .collect();

    debug!(
        target: "crbasic_syntax",
        "parsed {} bytes: {} tokens, {} diagnostics",
        source.len(),
        tokens.len(),
        diagnostics.len()
    );

    Parse {
        green_node,
        diagnostics,
        line_index,
    }
}
