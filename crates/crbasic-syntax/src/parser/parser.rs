//! Main parser implementation.

use drop_bomb::DropBomb;
use text_size::{TextRange, TextSize};
use tracing::trace;

use crate::diagnostics::{DiagnosticKind, RawDiagnostic};
use crate::lexer::{Token, TokenKind};
use crate::parser::event::Event;
use crate::parser::options::ParseOptions;
use crate::parser::source::Source;
use crate::syntax::SyntaxKind;

/// The parser state.
pub(crate) struct Parser<'t, 'src> {
    pub(crate) source: Source<'t, 'src>,
    pub(crate) events: Vec<Event>,
    errors: Vec<RawDiagnostic>,
    /// Terminators of the enclosing blocks, innermost last.
    frames: Vec<&'static [TokenKind]>,
    pub(crate) options: ParseOptions,
    pub(crate) depth: usize,
    /// Set after the nesting limit skipped the rest of a line; silences the
    /// follow-up errors that skip would otherwise cause.
    suppress_errors: bool,
}

pub(crate) struct Marker {
    pos: usize,
    bomb: DropBomb,
}

impl Marker {
    pub(crate) fn complete(
        mut self,
        parser: &mut Parser<'_, '_>,
        kind: SyntaxKind,
    ) -> CompletedMarker {
        self.bomb.defuse();
        if let Some(event) = parser.events.get_mut(self.pos) {
            match event {
                Event::Placeholder => *event = Event::start(kind),
                Event::Start {
                    kind: existing_kind,
                    ..
                } => *existing_kind = kind,
                _ => {}
            }
        }
        parser.events.push(Event::Finish);
        CompletedMarker { pos: self.pos }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct CompletedMarker {
    pos: usize,
}

impl CompletedMarker {
    /// Starts a node that will become the parent of this one.
    pub(crate) fn precede(self, parser: &mut Parser<'_, '_>) -> Marker {
        let new_pos = parser.events.len();
        parser.events.push(Event::Placeholder);
        set_forward_parent(&mut parser.events, self.pos, new_pos);
        Marker {
            pos: new_pos,
            bomb: DropBomb::new("uncompleted marker"),
        }
    }
}

fn set_forward_parent(events: &mut [Event], from: usize, to: usize) {
    let mut current = from;
    while let Some(Event::Start { forward_parent, .. }) = events.get_mut(current) {
        match forward_parent {
            Some(offset) => current += *offset as usize,
            None => {
                *forward_parent = u32::try_from(to - current).ok();
                break;
            }
        }
    }
}

impl<'t, 'src> Parser<'t, 'src> {
    pub(crate) fn new(tokens: &'t [Token], source: &'src str, options: ParseOptions) -> Self {
        Self {
            source: Source::new(tokens, source),
            events: Vec::new(),
            errors: Vec::new(),
            frames: Vec::new(),
            options,
            depth: 0,
            suppress_errors: false,
        }
    }

    pub(crate) fn parse(mut self) -> (Vec<Event>, Vec<RawDiagnostic>) {
        self.start_node(SyntaxKind::SourceFile);
        while !self.at_end() {
            self.parse_statement();
        }
        self.finish_node();

        (self.events, self.errors)
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    pub(crate) fn current(&self) -> TokenKind {
        self.source.current()
    }

    /// The current token if it is on the line being parsed; `Newline` once the
    /// statement's line has ended and `Eof` at the end of input.
    pub(crate) fn line_current(&self) -> TokenKind {
        if self.at_end() {
            TokenKind::Eof
        } else if self.at_line_break() {
            TokenKind::Newline
        } else {
            self.current()
        }
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current() == kind
    }

    pub(crate) fn at_end(&self) -> bool {
        self.source.at_end()
    }

    pub(crate) fn at_line_break(&self) -> bool {
        self.source.at_line_break()
    }

    pub(crate) fn peek_kind_on_line(&self, n: usize) -> TokenKind {
        self.source.peek_kind_on_line(n)
    }

    pub(crate) fn bump(&mut self) {
        let kind = self.source.current();
        if kind == TokenKind::Eof {
            return;
        }
        self.events.push(Event::token(SyntaxKind::from(kind)));
        self.source.bump();
    }

    /// Bumps the current token if it is `kind` and on the current line.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.line_current() == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Like [`eat`](Self::eat), but reports `expected <kind>` when absent.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.error(format!("expected {}", kind.display_name()));
        false
    }

    pub(crate) fn start(&mut self) -> Marker {
        let pos = self.events.len();
        self.events.push(Event::Placeholder);
        Marker {
            pos,
            bomb: DropBomb::new("uncompleted marker"),
        }
    }

    pub(crate) fn start_node(&mut self, kind: SyntaxKind) {
        self.events.push(Event::start(kind));
    }

    pub(crate) fn finish_node(&mut self) {
        self.events.push(Event::Finish);
    }

    /// Records an error at the current token, or just after the previous one
    /// when the current token is already on another line.
    pub(crate) fn error(&mut self, message: impl Into<String>) {
        let range = if self.at_line_break() {
            TextRange::empty(self.source.prev_end())
        } else {
            self.source.current_range()
        };
        self.error_at(range, message);
    }

    pub(crate) fn error_at(&mut self, range: TextRange, message: impl Into<String>) {
        if self.suppress_errors {
            return;
        }
        let message = message.into();
        trace!(target: "crbasic_syntax", "syntax error at {:?}: {}", range, message);
        self.errors.push(RawDiagnostic {
            kind: DiagnosticKind::SyntaxError,
            message,
            range,
        });
    }

    pub(crate) fn current_range(&self) -> TextRange {
        self.source.current_range()
    }

    pub(crate) fn prev_end(&self) -> TextSize {
        self.source.prev_end()
    }

    pub(crate) fn current_text(&self) -> &'src str {
        self.source.current_text()
    }

    // =========================================================================
    // Blocks and recovery
    // =========================================================================

    /// Clears error silencing left over from the previous statement.
    pub(crate) fn begin_statement(&mut self) {
        self.suppress_errors = false;
    }

    /// Returns `true` if the nesting limit has been reached.
    pub(crate) fn too_deep(&self) -> bool {
        self.depth >= self.options.max_depth
    }

    /// Reports the nesting limit and skips the rest of the line. Inside an
    /// expression the errors the skip causes in the enclosing constructs are
    /// silenced until the statement ends.
    pub(crate) fn bail_too_deep(&mut self, at_statement_start: bool) -> CompletedMarker {
        trace!(target: "crbasic_syntax", "nesting limit {} reached", self.options.max_depth);
        if at_statement_start {
            self.error_at(self.current_range(), "nesting too deep");
        } else {
            self.error("nesting too deep");
        }
        let marker = self.start();
        if at_statement_start {
            self.bump();
        } else {
            self.suppress_errors = true;
        }
        self.bump_rest_of_line();
        marker.complete(self, SyntaxKind::ErrorNode)
    }

    /// Parses statements into a `StmtList` until a terminator of this or an
    /// enclosing block.
    pub(crate) fn parse_block_body(&mut self, terminators: &'static [TokenKind]) {
        self.start_node(SyntaxKind::StmtList);
        self.frames.push(terminators);
        self.depth += 1;
        while !self.at_end() && !self.at_stmt_list_end() {
            self.parse_statement();
        }
        self.depth -= 1;
        self.frames.pop();
        self.finish_node();
    }

    /// Parses a single statement as the body of a one-line construct. Counts
    /// toward the nesting limit like a block body.
    pub(crate) fn parse_inline_body(&mut self, terminators: &'static [TokenKind]) {
        self.start_node(SyntaxKind::StmtList);
        self.frames.push(terminators);
        self.depth += 1;
        if !self.at_line_break() && !self.at_stmt_list_end() {
            self.parse_statement();
        }
        self.depth -= 1;
        self.frames.pop();
        self.finish_node();
    }

    /// Returns true when the current token closes (or splits) an open block.
    pub(crate) fn at_stmt_list_end(&self) -> bool {
        self.closes_open_block(self.current())
    }

    fn closes_open_block(&self, kind: TokenKind) -> bool {
        self.frames.iter().any(|terminators| terminators.contains(&kind))
    }

    /// Returns true if the statement under the cursor is an assignment: an
    /// assignment operator follows on this line before anything that closes
    /// an open block (the `Else` of a one-line `If`).
    pub(crate) fn at_assignment(&self) -> bool {
        self.source.has_assign_ahead(|kind| self.closes_open_block(kind))
    }

    /// Bumps the block terminator, or reports it missing.
    pub(crate) fn expect_terminator(&mut self, terminator: TokenKind, opener: TokenKind) -> bool {
        if self.at(terminator) {
            self.bump();
            return true;
        }

        let range = if self.at_end() {
            TextRange::empty(self.source.end_of_input())
        } else {
            self.current_range()
        };
        trace!(
            target: "crbasic_syntax",
            "missing {} for {}",
            terminator.display_name(),
            opener.display_name()
        );
        self.error_at(
            range,
            format!(
                "expected {} to close {}",
                terminator.display_name(),
                opener.display_name()
            ),
        );
        false
    }

    /// Ends a statement: the next token must be on a new line or close an
    /// enclosing block. Anything else up to the line break is wrapped in an
    /// `ErrorNode`.
    pub(crate) fn expect_line_end(&mut self) {
        if !self.at_line_break() && !self.at_stmt_list_end() {
            if !self.at(TokenKind::Error) {
                self.error(format!(
                    "expected end of line, found {}",
                    self.current().display_name()
                ));
            }
            self.start_node(SyntaxKind::ErrorNode);
            self.bump_rest_of_line();
            self.finish_node();
        }
        self.suppress_errors = false;
    }

    /// Wraps an unexpected token, plus whatever follows it up to the next
    /// statement boundary, in an `ErrorNode`.
    pub(crate) fn recover_statement(&mut self) {
        trace!(
            target: "crbasic_syntax",
            "recovering from {:?} at {:?}",
            self.current(),
            self.current_range()
        );
        self.start_node(SyntaxKind::ErrorNode);
        self.bump();
        while !self.at_line_break()
            && !self.at_stmt_list_end()
            && !(self.current().can_start_statement() && !self.at(TokenKind::Ident))
        {
            self.bump();
        }
        self.finish_node();
    }

    fn bump_rest_of_line(&mut self) {
        while !self.at_line_break() && !self.at_stmt_list_end() {
            self.bump();
        }
    }
}
