//! Conditional compilation directives.
//!
//! Directives are parsed structurally and never evaluated: every branch is
//! parsed as ordinary statements.

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::Parser;

const PP_BRANCH_END: &[TokenKind] = &[TokenKind::PpElseIf, TokenKind::PpElse, TokenKind::PpEndIf];

impl Parser<'_, '_> {
    /// Parse `#If cond [Then] ... [#ElseIf ...] [#Else ...] #EndIf`, or the
    /// same opened by `#IfDef name`.
    pub(crate) fn parse_preprocessor_if(&mut self) {
        let opener = self.current();
        if opener == TokenKind::PpIfDef {
            self.start_node(SyntaxKind::PreprocessorIfDef);
            self.bump();
            self.parse_directive_name();
        } else {
            self.start_node(SyntaxKind::PreprocessorIf);
            self.bump();
            self.parse_directive_condition();
        }
        self.expect_line_end();
        self.parse_block_body(PP_BRANCH_END);

        while self.at(TokenKind::PpElseIf) {
            self.start_node(SyntaxKind::PreprocessorElseIf);
            self.bump();
            self.parse_directive_condition();
            self.expect_line_end();
            self.parse_block_body(PP_BRANCH_END);
            self.finish_node();
        }

        if self.at(TokenKind::PpElse) {
            self.start_node(SyntaxKind::PreprocessorElse);
            self.bump();
            self.expect_line_end();
            self.parse_block_body(&[TokenKind::PpEndIf]);
            self.finish_node();
        }

        if self.expect_terminator(TokenKind::PpEndIf, opener) {
            self.expect_line_end();
        }
        self.finish_node();
    }

    fn parse_directive_condition(&mut self) {
        self.parse_expression();
        self.eat(TokenKind::KwThen);
    }

    fn parse_directive_name(&mut self) {
        if self.line_current() == TokenKind::Ident {
            self.parse_identifier();
        } else {
            self.error("expected symbol name");
        }
    }

    /// Parse `#UnDef name`.
    pub(crate) fn parse_preprocessor_undef(&mut self) {
        self.start_node(SyntaxKind::PreprocessorUndef);
        self.bump();
        self.parse_directive_name();
        self.expect_line_end();
        self.finish_node();
    }

    /// Parse `Include "file"`.
    pub(crate) fn parse_include(&mut self) {
        self.start_node(SyntaxKind::IncludeDirective);
        self.bump();
        if self.line_current() == TokenKind::QuotedString {
            self.parse_expression();
        } else {
            self.error("expected file name string");
            self.start_node(SyntaxKind::ErrorNode);
            while !self.at_line_break() && !self.at_stmt_list_end() {
                self.bump();
            }
            self.finish_node();
        }
        self.expect_line_end();
        self.finish_node();
    }
}
