//! Statement parsing for CRBasic.
//!
//! Every statement occupies the rest of its line. Dispatch is on the leading
//! token:
//! - block keywords (`BeginProg`, `If`, `Scan`, ...) see `blocks.rs`
//! - declarations (`Public`, `Dim`, `Const`, ...) see `declarations.rs`
//! - preprocessor directives see `preprocessor.rs`
//! - `Return [expr]`, `Exit <block>`, `Call name(args)`
//! - assignment: `x = expr`, `T(1) += 2`
//! - instruction call: `PanelTemp(PTemp, 15000)`, `SequentialMode`

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::Parser;

impl Parser<'_, '_> {
    /// Parse a single statement.
    pub(crate) fn parse_statement(&mut self) {
        self.begin_statement();
        if self.too_deep() {
            self.bail_too_deep(true);
            return;
        }

        match self.current() {
            TokenKind::KwBeginProg => self.parse_program(),
            TokenKind::KwFunction => self.parse_function_decl(),
            TokenKind::KwSub => self.parse_sub_decl(),
            TokenKind::KwIf => self.parse_if_stmt(),
            TokenKind::KwFor => self.parse_for_loop(),
            TokenKind::KwWhile => self.parse_while_loop(),
            TokenKind::KwDo => self.parse_do_loop(),
            TokenKind::KwSelect => self.parse_select_stmt(),
            TokenKind::KwScan => self.parse_scan_stmt(),
            TokenKind::KwSubScan => self.parse_sub_scan_stmt(),
            TokenKind::KwSlowSequence => self.parse_slow_sequence(),
            TokenKind::KwDisplayMenu => self.parse_menu(
                SyntaxKind::MenuStmt,
                TokenKind::KwDisplayMenu,
                TokenKind::KwEndMenu,
            ),
            TokenKind::KwSubMenu => self.parse_menu(
                SyntaxKind::SubMenuStmt,
                TokenKind::KwSubMenu,
                TokenKind::KwEndSubMenu,
            ),
            TokenKind::KwMenuItem => self.parse_menu_item(),
            TokenKind::KwDataTable => self.parse_data_table(),
            TokenKind::KwCallTable => self.parse_call_table(),
            TokenKind::KwPublic | TokenKind::KwDim => self.parse_variable_decl(),
            TokenKind::KwConst => self.parse_const_decl(),
            TokenKind::KwConstTable => self.parse_const_table(),
            TokenKind::KwAlias => self.parse_alias_decl(),
            TokenKind::KwUnits => self.parse_units_decl(),
            TokenKind::KwReturn => self.parse_return_stmt(),
            TokenKind::KwExit => self.parse_exit_stmt(),
            TokenKind::KwCall => self.parse_call_stmt(),
            TokenKind::PpIf | TokenKind::PpIfDef => self.parse_preprocessor_if(),
            TokenKind::PpUndef => self.parse_preprocessor_undef(),
            TokenKind::KwInclude => self.parse_include(),
            TokenKind::Ident => self.parse_assign_or_call_stmt(),
            kind => {
                if kind != TokenKind::Error {
                    self.error_at(
                        self.current_range(),
                        format!("unexpected {}", kind.display_name()),
                    );
                }
                self.recover_statement();
            }
        }
    }

    /// Parse `target op expr`, or an instruction call standing on its own.
    fn parse_assign_or_call_stmt(&mut self) {
        if self.at_assignment() {
            self.start_node(SyntaxKind::Assignment);
            self.parse_name_ref();
            if self.line_current().is_assign_op() {
                self.bump();
            } else {
                self.error("expected assignment operator");
            }
            self.parse_expression();
            self.expect_line_end();
            self.finish_node();
            return;
        }

        let name = self.parse_identifier();
        let call = name.precede(self);
        if self.line_current() == TokenKind::LParen {
            self.parse_arg_list();
        }
        call.complete(self, SyntaxKind::FunctionCall);
        self.expect_line_end();
    }

    /// Parse `Return [expr]`.
    fn parse_return_stmt(&mut self) {
        self.start_node(SyntaxKind::ReturnStmt);
        self.bump();
        if self.line_current().can_start_expr() {
            self.parse_expression();
        }
        self.expect_line_end();
        self.finish_node();
    }

    /// Parse `Exit For`, `Exit Do`, ...
    fn parse_exit_stmt(&mut self) {
        self.start_node(SyntaxKind::ExitStmt);
        self.bump();
        if matches!(
            self.line_current(),
            TokenKind::KwFor
                | TokenKind::KwDo
                | TokenKind::KwWhile
                | TokenKind::KwSub
                | TokenKind::KwFunction
                | TokenKind::KwScan
                | TokenKind::KwSelect
        ) {
            self.bump();
        } else {
            self.error("expected block kind after `Exit`");
        }
        self.expect_line_end();
        self.finish_node();
    }

    /// Parse `Call Name[(args)]`.
    fn parse_call_stmt(&mut self) {
        self.start_node(SyntaxKind::CallStmt);
        self.bump();
        if self.line_current() == TokenKind::Ident {
            self.parse_name_ref();
        } else {
            self.error("expected procedure name");
        }
        self.expect_line_end();
        self.finish_node();
    }
}
