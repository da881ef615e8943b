//! Expression parsing using precedence climbing.
//!
//! Binding levels (low to high), every one left associative:
//! - `+ -` (1-2)
//! - `* / \ MOD INTDV` (3-4)
//! - `^` (5-6)
//! - `= <> < > <= >=` (7-8)
//! - `AND OR XOR IMP` (9-10)
//! - `& |` (11-12)
//! - `>> <<` (13-14)
//! - prefix `- + NOT !` (15)
//!
//! An expression never continues past the end of its line.

use text_size::{TextRange, TextSize};

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::CompletedMarker;
use super::super::Parser;

/// A parsed argument list.
pub(crate) struct Args {
    /// From `(` through `)` (or the last consumed token).
    pub(crate) range: TextRange,
    pub(crate) items: Vec<Arg>,
}

pub(crate) struct Arg {
    pub(crate) range: TextRange,
    /// The argument is a single bare name such as `Sec`.
    pub(crate) is_name: bool,
}

impl Parser<'_, '_> {
    /// Parse an expression.
    pub(crate) fn parse_expression(&mut self) -> Option<CompletedMarker> {
        self.parse_expr_bp(0)
    }

    /// Parse an expression whose operators bind at least as tightly as `min_bp`.
    pub(crate) fn parse_expr_bp(&mut self, min_bp: u8) -> Option<CompletedMarker> {
        if self.too_deep() {
            return Some(self.bail_too_deep(false));
        }
        self.depth += 1;
        let expr = self.parse_expr_bp_inner(min_bp);
        self.depth -= 1;
        expr
    }

    fn parse_expr_bp_inner(&mut self, min_bp: u8) -> Option<CompletedMarker> {
        let mut lhs = if let Some(bp) = self.line_current().prefix_binding_power() {
            let marker = self.start();
            self.bump();
            self.parse_expr_bp(bp);
            marker.complete(self, SyntaxKind::UnaryExpr)
        } else {
            self.parse_primary_expr()?
        };

        while let Some((l_bp, r_bp)) = self.line_current().infix_binding_power() {
            if l_bp < min_bp {
                break;
            }
            let marker = lhs.precede(self);
            self.bump(); // operator
            self.parse_expr_bp(r_bp);
            lhs = marker.complete(self, SyntaxKind::BinaryExpr);
        }

        Some(lhs)
    }

    /// Parse primary expressions (literals, names, calls, parentheses).
    fn parse_primary_expr(&mut self) -> Option<CompletedMarker> {
        let kind = match self.line_current() {
            TokenKind::Number => SyntaxKind::NumberLiteral,
            TokenKind::QuotedString => SyntaxKind::StringLiteral,
            TokenKind::KwTrue | TokenKind::KwFalse => SyntaxKind::BooleanLiteral,
            // Already reported by the lexer.
            TokenKind::Error => SyntaxKind::ErrorNode,
            TokenKind::Ident => return Some(self.parse_name_ref()),
            TokenKind::LParen => {
                let marker = self.start();
                self.bump();
                self.parse_expression();
                self.expect(TokenKind::RParen);
                return Some(marker.complete(self, SyntaxKind::ParenExpr));
            }
            found => {
                self.error("expected expression");
                if found.is_keyword()
                    || matches!(
                        found,
                        TokenKind::Newline | TokenKind::Eof | TokenKind::RParen | TokenKind::Comma
                    )
                    || self.at_stmt_list_end()
                {
                    return None;
                }
                SyntaxKind::ErrorNode
            }
        };

        let marker = self.start();
        self.bump();
        Some(marker.complete(self, kind))
    }

    /// Parse a name, possibly dotted (`Status.Battery`).
    pub(crate) fn parse_identifier(&mut self) -> CompletedMarker {
        let marker = self.start();
        self.bump();
        while self.eat(TokenKind::Dot) {
            if !self.eat(TokenKind::Ident) {
                self.error("expected name after `.`");
                break;
            }
        }
        marker.complete(self, SyntaxKind::Identifier)
    }

    /// Parse a name, wrapped in a `FunctionCall` when an argument list follows.
    /// Array indexing (`T(3)`) has the same shape and parses the same way.
    pub(crate) fn parse_name_ref(&mut self) -> CompletedMarker {
        let name = self.parse_identifier();
        if self.line_current() != TokenKind::LParen {
            return name;
        }
        let call = name.precede(self);
        self.parse_arg_list();
        call.complete(self, SyntaxKind::FunctionCall)
    }

    /// Parse argument list for function calls: `(a, b, c)`.
    pub(crate) fn parse_arg_list(&mut self) -> Args {
        self.start_node(SyntaxKind::ArgList);
        let start = self.position();
        self.bump(); // (

        let mut items = Vec::new();
        if self.line_current() != TokenKind::RParen {
            loop {
                let arg_start = self.position();
                let is_name = self.line_current() == TokenKind::Ident
                    && matches!(
                        self.peek_kind_on_line(1),
                        TokenKind::Comma | TokenKind::RParen
                    );
                self.parse_expression();
                items.push(Arg {
                    range: TextRange::new(arg_start, self.prev_end().max(arg_start)),
                    is_name,
                });
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen);
        self.finish_node();

        Args {
            range: TextRange::new(start, self.prev_end().max(start)),
            items,
        }
    }

    /// Start of the current token if it is on this line, else the end of the
    /// last consumed token.
    pub(crate) fn position(&self) -> TextSize {
        if self.at_line_break() {
            self.prev_end()
        } else {
            self.current_range().start()
        }
    }
}
