//! Sink for converting parser events into a syntax tree.
//!
//! The parser only reports significant tokens; the sink decides where the
//! trivia between them goes:
//!
//! - trivia before a token belongs to the node the token is added to;
//! - when a node starts, trivia up to the first own-line comment stays in the
//!   parent, so a comment line directly above a statement is part of it;
//! - a block body that closes when only trivia is left takes the rest of the
//!   input, so an unterminated block still reaches the end of the file.
//!
//! The root node finally takes whatever is left, which keeps the tree
//! lossless even if the grammar skipped a token.

use crate::lexer::{Token, TokenKind};
use crate::parser::event::Event;
use crate::syntax::SyntaxKind;

/// Builds a syntax tree from parser events.
pub(crate) struct Sink<'t, 'src> {
    tokens: &'t [Token],
    source: &'src str,
    events: Vec<Event>,
    cursor: usize,
    /// Kinds of the nodes currently open, outermost first.
    open: Vec<SyntaxKind>,
    builder: rowan::GreenNodeBuilder<'static>,
}

impl<'t, 'src> Sink<'t, 'src> {
    pub(crate) fn new(tokens: &'t [Token], source: &'src str, events: Vec<Event>) -> Self {
        Self {
            tokens,
            source,
            events,
            cursor: 0,
            open: Vec::new(),
            builder: rowan::GreenNodeBuilder::new(),
        }
    }

    pub(crate) fn finish(mut self) -> rowan::GreenNode {
        for i in 0..self.events.len() {
            match std::mem::replace(&mut self.events[i], Event::Placeholder) {
                Event::Start {
                    kind,
                    forward_parent,
                } => {
                    let mut kinds = vec![kind];
                    let mut idx = i;
                    let mut fp = forward_parent;

                    while let Some(offset) = fp {
                        idx += offset as usize;
                        match self.events.get_mut(idx).map(|event| {
                            std::mem::replace(event, Event::Placeholder)
                        }) {
                            Some(Event::Start {
                                kind,
                                forward_parent,
                            }) => {
                                kinds.push(kind);
                                fp = forward_parent;
                            }
                            _ => break,
                        }
                    }

                    if !self.open.is_empty() {
                        self.eat_leading_trivia();
                    }
                    for kind in kinds.into_iter().rev() {
                        self.builder.start_node(kind.into());
                        self.open.push(kind);
                    }
                }
                Event::Token { kind } => {
                    self.eat_trivia();
                    self.token(kind);
                }
                Event::Finish => {
                    let kind = self.open.pop();
                    if self.open.is_empty() {
                        self.flush();
                    } else if kind == Some(SyntaxKind::StmtList) && self.only_trivia_left() {
                        self.eat_trivia();
                    }
                    self.builder.finish_node();
                }
                Event::Placeholder => {}
            }
        }

        self.builder.finish()
    }

    fn eat_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            if !token.kind.is_trivia() {
                break;
            }
            self.token(SyntaxKind::from(token.kind));
        }
    }

    /// Eats trivia up to (not including) the first comment that sits on its
    /// own line.
    fn eat_leading_trivia(&mut self) {
        let mut line_start = self.cursor == 0;
        while let Some(token) = self.tokens.get(self.cursor) {
            match token.kind {
                TokenKind::Comment if line_start => break,
                TokenKind::Newline => line_start = true,
                kind if kind.is_trivia() => {}
                _ => break,
            }
            self.token(SyntaxKind::from(token.kind));
        }
    }

    fn only_trivia_left(&self) -> bool {
        self.tokens
            .get(self.cursor..)
            .unwrap_or_default()
            .iter()
            .all(|token| token.kind.is_trivia())
    }

    fn flush(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            self.token(SyntaxKind::from(token.kind));
        }
    }

    /// Adds the token under the cursor to the tree as `kind`.
    fn token(&mut self, kind: SyntaxKind) {
        if let Some(token) = self.tokens.get(self.cursor) {
            self.builder.token(kind.into(), token.text(self.source));
            self.cursor += 1;
        }
    }
}
