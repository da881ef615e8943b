//! Block statements for CRBasic.
//!
//! Supported blocks:
//! - `BeginProg ... EndProg`
//! - `Function name(params) [As type] ... EndFunction`, `Sub name(params) ... EndSub`
//! - `If/ElseIf/Else If/Else/EndIf`, plus the one-line `If c Then stmt [Else stmt]`
//! - `For/To/Step/Next [var]`
//! - `While/Wend`, `Do [While|Until c] ... Loop [While|Until c]`
//! - `Select Case/Case [Is|Else]/EndSelect`
//! - `Scan/NextScan`, `SubScan/NextSubScan`, `SlowSequence/EndSequence`
//! - `DisplayMenu/EndMenu`, `SubMenu/EndSubMenu`, `MenuItem`
//! - `DataTable/EndTable`, `CallTable`

use smol_str::SmolStr;

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::Parser;
use super::expressions::Arg;

const IF_BRANCH_END: &[TokenKind] = &[TokenKind::KwElseIf, TokenKind::KwElse, TokenKind::KwEndIf];
const CASE_END: &[TokenKind] = &[TokenKind::KwCase, TokenKind::KwEndSelect];

impl Parser<'_, '_> {
    /// Finishes a block whose header has been parsed: header line end, body,
    /// terminator and the terminator's line end.
    pub(crate) fn parse_block_tail(
        &mut self,
        opener: TokenKind,
        terminator: TokenKind,
        stops: &'static [TokenKind],
    ) {
        self.expect_line_end();
        self.parse_block_body(stops);
        if self.expect_terminator(terminator, opener) {
            self.expect_line_end();
        }
    }

    /// Parse `BeginProg ... EndProg`.
    pub(crate) fn parse_program(&mut self) {
        self.start_node(SyntaxKind::Program);
        self.bump();
        self.parse_block_tail(
            TokenKind::KwBeginProg,
            TokenKind::KwEndProg,
            &[TokenKind::KwEndProg],
        );
        self.finish_node();
    }

    /// Parse `Function Name[(params)] [As Type] ... EndFunction`.
    pub(crate) fn parse_function_decl(&mut self) {
        self.start_node(SyntaxKind::FunctionDecl);
        self.bump();
        self.parse_procedure_header("expected function name");
        if self.line_current() == TokenKind::KwAs {
            self.parse_type_ref();
        }
        self.parse_block_tail(
            TokenKind::KwFunction,
            TokenKind::KwEndFunction,
            &[TokenKind::KwEndFunction],
        );
        self.finish_node();
    }

    /// Parse `Sub Name[(params)] ... EndSub`.
    pub(crate) fn parse_sub_decl(&mut self) {
        self.start_node(SyntaxKind::SubDecl);
        self.bump();
        self.parse_procedure_header("expected subroutine name");
        self.parse_block_tail(TokenKind::KwSub, TokenKind::KwEndSub, &[TokenKind::KwEndSub]);
        self.finish_node();
    }

    fn parse_procedure_header(&mut self, missing_name: &str) {
        if self.line_current() == TokenKind::Ident {
            self.parse_identifier();
        } else {
            self.error(missing_name);
        }
        if self.line_current() == TokenKind::LParen {
            self.parse_param_list();
        }
    }

    /// Parse IF statement.
    pub(crate) fn parse_if_stmt(&mut self) {
        self.start_node(SyntaxKind::IfStmt);
        self.bump(); // If
        self.parse_expression();
        self.expect(TokenKind::KwThen);

        if self.options.single_line_if && !self.at_line_break() && !self.at_stmt_list_end() {
            self.parse_inline_body(&[TokenKind::KwElse]);
            if self.line_current() == TokenKind::KwElse {
                self.start_node(SyntaxKind::ElseClause);
                self.bump();
                self.parse_inline_body(&[]);
                self.finish_node();
            }
            self.finish_node();
            return;
        }

        self.expect_line_end();
        self.parse_block_body(IF_BRANCH_END);

        loop {
            if self.at(TokenKind::KwElseIf) {
                self.start_node(SyntaxKind::ElseIfClause);
                self.bump();
            } else if self.at(TokenKind::KwElse) && self.peek_kind_on_line(1) == TokenKind::KwIf {
                self.start_node(SyntaxKind::ElseIfClause);
                self.bump(); // Else
                self.bump(); // If
            } else {
                break;
            }
            self.parse_expression();
            self.expect(TokenKind::KwThen);
            self.expect_line_end();
            self.parse_block_body(IF_BRANCH_END);
            self.finish_node();
        }

        if self.at(TokenKind::KwElse) {
            self.start_node(SyntaxKind::ElseClause);
            self.bump();
            self.expect_line_end();
            self.parse_block_body(&[TokenKind::KwEndIf]);
            self.finish_node();
        }

        if self.expect_terminator(TokenKind::KwEndIf, TokenKind::KwIf) {
            self.expect_line_end();
        }
        self.finish_node();
    }

    /// Parse `For v = a To b [Step c] ... Next [v]`.
    pub(crate) fn parse_for_loop(&mut self) {
        self.start_node(SyntaxKind::ForLoop);
        self.bump(); // For

        let variable = if self.line_current() == TokenKind::Ident {
            let name = SmolStr::new(self.current_text());
            self.parse_name_ref();
            Some(name)
        } else {
            self.error("expected loop variable");
            None
        };

        if self.expect(TokenKind::Eq) {
            self.parse_expression();
            if self.expect(TokenKind::KwTo) {
                self.parse_expression();
                if self.eat(TokenKind::KwStep) {
                    self.parse_expression();
                }
            }
        }
        self.expect_line_end();
        self.parse_block_body(&[TokenKind::KwNext]);

        if self.expect_terminator(TokenKind::KwNext, TokenKind::KwFor) {
            if self.line_current() == TokenKind::Ident {
                let range = self.current_range();
                let closing = SmolStr::new(self.current_text());
                self.parse_name_ref();
                if let Some(variable) = variable {
                    if !variable.eq_ignore_ascii_case(&closing) {
                        self.error_at(
                            range,
                            format!(
                                "loop variable mismatch: expected `{variable}`, found `{closing}`"
                            ),
                        );
                    }
                }
            }
            self.expect_line_end();
        }
        self.finish_node();
    }

    /// Parse `While cond ... Wend`.
    pub(crate) fn parse_while_loop(&mut self) {
        self.start_node(SyntaxKind::WhileLoop);
        self.bump();
        self.parse_expression();
        self.parse_block_tail(TokenKind::KwWhile, TokenKind::KwWend, &[TokenKind::KwWend]);
        self.finish_node();
    }

    /// Parse `Do [While|Until cond] ... Loop [While|Until cond]`.
    pub(crate) fn parse_do_loop(&mut self) {
        self.start_node(SyntaxKind::DoLoop);
        self.bump(); // Do
        self.parse_loop_condition();
        self.expect_line_end();
        self.parse_block_body(&[TokenKind::KwLoop]);
        if self.expect_terminator(TokenKind::KwLoop, TokenKind::KwDo) {
            self.parse_loop_condition();
            self.expect_line_end();
        }
        self.finish_node();
    }

    fn parse_loop_condition(&mut self) {
        if self.eat(TokenKind::KwWhile) || self.eat(TokenKind::KwUntil) {
            self.parse_expression();
        }
    }

    /// Parse `Select Case subject ... EndSelect`.
    pub(crate) fn parse_select_stmt(&mut self) {
        self.start_node(SyntaxKind::SelectStmt);
        self.bump(); // Select
        self.expect(TokenKind::KwCase);
        self.parse_expression();
        self.expect_line_end();

        while !self.at_end() {
            if self.at(TokenKind::KwCase) {
                self.parse_case_clause();
            } else if self.at(TokenKind::KwEndSelect) || self.at_stmt_list_end() {
                break;
            } else {
                self.error_at(self.current_range(), "expected `Case`");
                self.recover_statement();
            }
        }

        if self.expect_terminator(TokenKind::KwEndSelect, TokenKind::KwSelect) {
            self.expect_line_end();
        }
        self.finish_node();
    }

    /// Parse `Case Else`, `Case Is [op] expr`, or `Case a[ To b], ...`.
    /// `Case Is expr` without an operator compares for equality.
    fn parse_case_clause(&mut self) {
        self.start_node(SyntaxKind::CaseClause);
        self.bump(); // Case

        if self.eat(TokenKind::KwElse) {
            // default branch
        } else if self.eat(TokenKind::KwIs) {
            if self.line_current().is_comparison_op() {
                self.bump();
            }
            self.parse_expression();
        } else {
            loop {
                self.parse_expression();
                if self.eat(TokenKind::KwTo) {
                    self.parse_expression();
                }
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect_line_end();
        self.parse_block_body(CASE_END);
        self.finish_node();
    }

    /// Parse `Scan(interval, units, buffers, count) ... NextScan`.
    pub(crate) fn parse_scan_stmt(&mut self) {
        self.start_node(SyntaxKind::ScanStmt);
        self.bump();
        let args = self.parse_instruction_args(TokenKind::KwScan, 4, 4);
        self.check_units_arg(&args);
        self.parse_block_tail(TokenKind::KwScan, TokenKind::KwNextScan, &[TokenKind::KwNextScan]);
        self.finish_node();
    }

    /// Parse `SubScan(interval, units[, count]) ... NextSubScan`.
    pub(crate) fn parse_sub_scan_stmt(&mut self) {
        self.start_node(SyntaxKind::SubScanStmt);
        self.bump();
        let args = self.parse_instruction_args(TokenKind::KwSubScan, 2, 3);
        self.check_units_arg(&args);
        self.parse_block_tail(
            TokenKind::KwSubScan,
            TokenKind::KwNextSubScan,
            &[TokenKind::KwNextSubScan],
        );
        self.finish_node();
    }

    fn check_units_arg(&mut self, args: &[Arg]) {
        if let Some(units) = args.get(1) {
            if !units.is_name {
                self.error_at(units.range, "scan interval units must be an identifier");
            }
        }
    }

    /// Parse `SlowSequence ... EndSequence`.
    pub(crate) fn parse_slow_sequence(&mut self) {
        self.start_node(SyntaxKind::SlowSequenceStmt);
        self.bump();
        self.parse_block_tail(
            TokenKind::KwSlowSequence,
            TokenKind::KwEndSequence,
            &[TokenKind::KwEndSequence],
        );
        self.finish_node();
    }

    /// Parse `DisplayMenu(...) ... EndMenu` and `SubMenu(...) ... EndSubMenu`.
    pub(crate) fn parse_menu(&mut self, kind: SyntaxKind, opener: TokenKind, terminator: TokenKind) {
        self.start_node(kind);
        self.bump();
        if self.line_current() == TokenKind::LParen {
            self.parse_arg_list();
        }
        let stops: &'static [TokenKind] = if terminator == TokenKind::KwEndMenu {
            &[TokenKind::KwEndMenu]
        } else {
            &[TokenKind::KwEndSubMenu]
        };
        self.parse_block_tail(opener, terminator, stops);
        self.finish_node();
    }

    /// Parse `MenuItem "Name", Var`, optionally parenthesized.
    pub(crate) fn parse_menu_item(&mut self) {
        self.start_node(SyntaxKind::MenuItem);
        self.bump();
        let parenthesized = self.eat(TokenKind::LParen);

        if self.line_current() == TokenKind::QuotedString {
            self.parse_expression();
        } else {
            self.error("expected menu item name");
        }
        self.eat(TokenKind::Comma);
        if self.line_current() == TokenKind::Ident {
            self.parse_name_ref();
        } else {
            self.error("expected menu item variable");
        }

        if parenthesized {
            self.expect(TokenKind::RParen);
        }
        self.expect_line_end();
        self.finish_node();
    }

    /// Parse `DataTable(name, trigger, size) ... EndTable`.
    pub(crate) fn parse_data_table(&mut self) {
        self.start_node(SyntaxKind::DataTableStmt);
        self.bump();
        self.parse_instruction_args(TokenKind::KwDataTable, 3, 3);
        self.parse_block_tail(
            TokenKind::KwDataTable,
            TokenKind::KwEndTable,
            &[TokenKind::KwEndTable],
        );
        self.finish_node();
    }

    /// Parse `CallTable name` or `CallTable(name)`.
    pub(crate) fn parse_call_table(&mut self) {
        self.start_node(SyntaxKind::CallTableStmt);
        self.bump();
        let parenthesized = self.eat(TokenKind::LParen);
        if self.line_current() == TokenKind::Ident {
            self.parse_identifier();
        } else {
            self.error("expected table name");
        }
        if parenthesized {
            self.expect(TokenKind::RParen);
        }
        self.expect_line_end();
        self.finish_node();
    }

    /// Parses the parenthesized argument list of a block instruction and
    /// checks its length.
    fn parse_instruction_args(
        &mut self,
        instruction: TokenKind,
        min: usize,
        max: usize,
    ) -> Vec<Arg> {
        if self.line_current() != TokenKind::LParen {
            self.error(format!("expected `(` after {}", instruction.display_name()));
            return Vec::new();
        }

        let args = self.parse_arg_list();
        let found = args.items.len();
        if !(min..=max).contains(&found) {
            let expected = if min == max {
                min.to_string()
            } else if max == min + 1 {
                format!("{min} or {max}")
            } else {
                format!("{min} to {max}")
            };
            self.error_at(
                args.range,
                format!(
                    "{} expects {expected} arguments, found {found}",
                    instruction.display_name()
                ),
            );
        }
        args.items
    }
}
