//! Lexer for CRBasic.
//!
//! This module provides a lexer that tokenizes CRBasic source code into a
//! stream of tokens with their positions in the source text. Lexing never
//! fails: anything unrecognized becomes a `TokenKind::Error` token and is
//! reported by [`tokenize`].

mod tokens;

pub use tokens::TokenKind;

use crate::diagnostics::{Diagnostic, DiagnosticKind, RawDiagnostic};
use crate::line_index::LineIndex;
use logos::Logos;
use std::collections::VecDeque;
use text_size::{TextRange, TextSize};

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The byte range of the token in the source text.
    pub range: TextRange,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    /// Returns the length of the token in bytes.
    #[must_use]
    pub fn len(&self) -> TextSize {
        self.range.len()
    }

    /// Returns true if the token has zero length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Returns the token text within `source`.
    #[must_use]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        source
            .get(usize::from(self.range.start())..usize::from(self.range.end()))
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnitsState {
    Idle,
    AwaitingEq,
    AwaitingText,
}

/// Lexer for CRBasic source code.
///
/// The lexer is an iterator over tokens. It handles all error recovery
/// internally - any unrecognized characters are returned as `TokenKind::Error`.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    source: &'src str,
    pending: VecDeque<Token>,
    units: UnitsState,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            source,
            pending: VecDeque::new(),
            units: UnitsState::Idle,
        }
    }

    /// Returns the source text being lexed.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }

    fn next_raw(&mut self) -> Option<Token> {
        let kind = self.inner.next()?.unwrap_or(TokenKind::Error);
        let span = self.inner.span();
        Some(Token::new(kind, text_range(span.start, span.end)))
    }

    /// A number running straight into identifier characters (`12abc`, `1e`,
    /// `&b102`) is one malformed token rather than two valid ones.
    fn glue_malformed_number(&mut self, number: Token) -> Token {
        let mut end = number.range.end();
        while let Some(next) = self.next_raw() {
            if next.range.start() == end && next.kind.is_word() {
                end = next.range.end();
                continue;
            }
            self.pending.push_back(next);
            break;
        }

        if end == number.range.end() {
            number
        } else {
            Token::new(TokenKind::Error, TextRange::new(number.range.start(), end))
        }
    }

    /// After `Units <name> =` the rest of the line (up to a comment) is free
    /// text such as `Deg C` or `%`.
    fn lex_units_text(&mut self) -> Option<Token> {
        let start = self.inner.span().end;
        let rest = self.inner.remainder();
        let leading = rest.len() - rest.trim_start_matches([' ', '\t']).len();
        let line_end = rest
            .find(['\r', '\n', '\''])
            .unwrap_or(rest.len());
        if line_end <= leading {
            return None;
        }
        let text_len = rest[leading..line_end].trim_end().len();
        if text_len == 0 {
            return None;
        }

        self.inner.bump(leading + text_len);
        let text_start = start + leading;
        let text = Token::new(
            TokenKind::UnitsText,
            text_range(text_start, text_start + text_len),
        );
        if leading == 0 {
            return Some(text);
        }
        self.pending.push_back(text);
        Some(Token::new(
            TokenKind::Whitespace,
            text_range(start, text_start),
        ))
    }

    fn track_units(&mut self, token: Token) -> Token {
        self.units = match (self.units, token.kind) {
            (_, TokenKind::KwUnits) => UnitsState::AwaitingEq,
            (UnitsState::AwaitingEq, TokenKind::Eq) => UnitsState::AwaitingText,
            (UnitsState::AwaitingEq, TokenKind::Newline) => UnitsState::Idle,
            (state, _) => state,
        };
        token
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.pop_front() {
            return Some(self.track_units(token));
        }

        if self.units == UnitsState::AwaitingText {
            self.units = UnitsState::Idle;
            if let Some(token) = self.lex_units_text() {
                return Some(token);
            }
        }

        let token = self.next_raw()?;
        let token = if token.kind == TokenKind::Number {
            self.glue_malformed_number(token)
        } else {
            token
        };

        Some(self.track_units(token))
    }
}

fn text_range(start: usize, end: usize) -> TextRange {
    let to_size = |offset: usize| TextSize::try_from(offset).unwrap_or(TextSize::from(u32::MAX));
    TextRange::new(to_size(start), to_size(end))
}

/// Lex the entire source and return all tokens.
///
/// This is a convenience function for testing and simple use cases.
/// For the parser, use the `Lexer` iterator directly.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Lex source and return tokens paired with their text.
///
/// Useful for debugging and testing.
#[must_use]
pub fn lex_with_text(source: &str) -> Vec<(Token, &str)> {
    Lexer::new(source)
        .map(|token| (token, token.text(source)))
        .collect()
}

/// Lex the entire source and report every error token as a diagnostic.
#[must_use]
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let tokens = lex(source);
    let line_index = LineIndex::new(source);
    let diagnostics = lex_errors(&tokens, source)
        .into_iter()
        .map(|raw| raw.resolve(&line_index))
        .collect();
    (tokens, diagnostics)
}

pub(crate) fn lex_errors(tokens: &[Token], source: &str) -> Vec<RawDiagnostic> {
    tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Error)
        .map(|token| RawDiagnostic {
            kind: DiagnosticKind::LexError,
            message: describe_error(token.text(source)).to_string(),
            range: token.range,
        })
        .collect()
}

fn describe_error(text: &str) -> &'static str {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some('"'), _) => "unterminated string literal",
        (Some(c), _) if c.is_ascii_digit() => "malformed numeric literal",
        (Some('.' | '&'), Some(_)) => "malformed numeric literal",
        _ => "invalid character",
    }
}
