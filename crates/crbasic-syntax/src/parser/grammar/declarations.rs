//! Declaration parsing for CRBasic.
//!
//! Handles:
//! - `Public`/`Dim` declarator lists: `x`, `arr(3, 4)`, `s As String * 24`
//! - `Const Name [As Type] = expr` and `ConstTable ... EndConstTable`
//! - `Alias element = Name`
//! - `Units name = free text`
//! - Procedure parameter lists and `As` type references

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::Parser;

impl Parser<'_, '_> {
    /// Parse `Public a, b(3) As Long, ...` or the same with `Dim`.
    pub(crate) fn parse_variable_decl(&mut self) {
        self.start_node(SyntaxKind::VariableDecl);
        self.bump(); // Public / Dim

        loop {
            self.parse_declarator();
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        self.expect_line_end();
        self.finish_node();
    }

    fn parse_declarator(&mut self) {
        self.start_node(SyntaxKind::Declarator);
        if self.line_current() == TokenKind::Ident {
            self.parse_identifier();
            if self.line_current() == TokenKind::LParen {
                self.parse_dimension_list();
            }
            if self.line_current() == TokenKind::KwAs {
                self.parse_type_ref();
            }
        } else {
            self.error("expected variable name");
        }
        self.finish_node();
    }

    /// Parse `(d1, d2, ...)` after a declared name.
    fn parse_dimension_list(&mut self) {
        self.start_node(SyntaxKind::DimensionList);
        self.bump(); // (
        if self.line_current() != TokenKind::RParen {
            loop {
                self.parse_expression();
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen);
        self.finish_node();
    }

    /// Parse `As Type [* length]`.
    pub(crate) fn parse_type_ref(&mut self) {
        self.start_node(SyntaxKind::TypeRef);
        self.bump(); // As
        if self.line_current() == TokenKind::Ident {
            self.bump();
            if self.eat(TokenKind::Star) {
                self.parse_expression();
            }
        } else {
            self.error("expected type name");
        }
        self.finish_node();
    }

    /// Parse `Const Name [As Type] = expr`.
    pub(crate) fn parse_const_decl(&mut self) {
        self.start_node(SyntaxKind::ConstDecl);
        self.bump(); // Const
        if self.line_current() == TokenKind::Ident {
            self.parse_identifier();
        } else {
            self.error("expected constant name");
        }
        if self.line_current() == TokenKind::KwAs {
            self.parse_type_ref();
        }
        if self.expect(TokenKind::Eq) {
            self.parse_expression();
        }
        self.expect_line_end();
        self.finish_node();
    }

    /// Parse `ConstTable[(args)] ... EndConstTable`.
    pub(crate) fn parse_const_table(&mut self) {
        self.start_node(SyntaxKind::ConstTableDecl);
        self.bump();
        if self.line_current() == TokenKind::LParen {
            self.parse_arg_list();
        }
        self.parse_block_tail(
            TokenKind::KwConstTable,
            TokenKind::KwEndConstTable,
            &[TokenKind::KwEndConstTable],
        );
        self.finish_node();
    }

    /// Parse `Alias Element = Name`.
    pub(crate) fn parse_alias_decl(&mut self) {
        self.start_node(SyntaxKind::AliasDecl);
        self.bump(); // Alias
        if self.line_current() == TokenKind::Ident {
            self.parse_name_ref();
        } else {
            self.error("expected variable to alias");
        }
        if self.expect(TokenKind::Eq) {
            if self.line_current() == TokenKind::Ident {
                self.parse_identifier();
            } else {
                self.error("expected alias name");
            }
        }
        self.expect_line_end();
        self.finish_node();
    }

    /// Parse `Units Name = text`. The lexer hands over the text as a single
    /// `UnitsText` token.
    pub(crate) fn parse_units_decl(&mut self) {
        self.start_node(SyntaxKind::UnitsDecl);
        self.bump(); // Units
        if self.line_current() == TokenKind::Ident {
            self.parse_name_ref();
        } else {
            self.error("expected variable name");
        }
        if self.expect(TokenKind::Eq) && !self.eat(TokenKind::UnitsText) {
            self.error("expected units text");
        }
        self.expect_line_end();
        self.finish_node();
    }

    /// Parse `(a As Float, arr(), b)`.
    pub(crate) fn parse_param_list(&mut self) {
        self.start_node(SyntaxKind::ParamList);
        self.bump(); // (
        if self.line_current() != TokenKind::RParen {
            loop {
                self.parse_param();
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen);
        self.finish_node();
    }

    fn parse_param(&mut self) {
        self.start_node(SyntaxKind::Param);
        if self.line_current() == TokenKind::Ident {
            self.parse_identifier();
            // array parameter
            if self.eat(TokenKind::LParen) {
                self.expect(TokenKind::RParen);
            }
            if self.line_current() == TokenKind::KwAs {
                self.parse_type_ref();
            }
        } else {
            self.error("expected parameter name");
            if !matches!(
                self.line_current(),
                TokenKind::Comma | TokenKind::RParen | TokenKind::Newline | TokenKind::Eof
            ) {
                self.start_node(SyntaxKind::ErrorNode);
                self.bump();
                self.finish_node();
            }
        }
        self.finish_node();
    }
}
