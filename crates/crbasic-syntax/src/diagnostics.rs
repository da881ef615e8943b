//! Lex and syntax diagnostics.
//!
//! Diagnostics never abort a parse; they are collected alongside the tree.

use std::fmt;

use text_size::TextRange;
use thiserror::Error;

use crate::line_index::{LineCol, LineIndex};

/// Which phase detected a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Invalid character, unterminated string literal, or malformed number.
    LexError,
    /// Unexpected token, missing or mismatched terminator, or malformed
    /// argument/parameter list.
    SyntaxError,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LexError => f.write_str("lex error"),
            Self::SyntaxError => f.write_str("syntax error"),
        }
    }
}

/// A source region as a byte range plus its line/column endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte range in the source text.
    pub range: TextRange,
    /// Position of the first byte.
    pub start: LineCol,
    /// Position just past the last byte.
    pub end: LineCol,
}

impl Span {
    /// Resolves a byte range against a line index.
    #[must_use]
    pub fn new(range: TextRange, line_index: &LineIndex) -> Self {
        Self {
            range,
            start: line_index.line_col(range.start()),
            end: line_index.line_col(range.end()),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.start.fmt(f)
    }
}

/// A problem found while lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {span}: {message}")]
pub struct Diagnostic {
    /// Lex or syntax error.
    pub kind: DiagnosticKind,
    /// Human-readable message.
    pub message: String,
    /// Where the problem is.
    pub span: Span,
}

impl Diagnostic {
    /// The byte range of the problem.
    #[must_use]
    pub fn range(&self) -> TextRange {
        self.span.range
    }
}

/// A diagnostic before line/column resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawDiagnostic {
    pub(crate) kind: DiagnosticKind,
    pub(crate) message: String,
    pub(crate) range: TextRange,
}

impl RawDiagnostic {
    pub(crate) fn resolve(self, line_index: &LineIndex) -> Diagnostic {
        Diagnostic {
            kind: self.kind,
            message: self.message,
            span: Span::new(self.range, line_index),
        }
    }
}
