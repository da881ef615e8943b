//! Token source for the parser.
//!
//! Wraps the lexer output and hides trivia from the grammar. Line breaks are
//! trivia too, but CRBasic statements end at them, so the source also answers
//! "is there a line break before the current token?".

use text_size::{TextRange, TextSize};

use crate::lexer::{Token, TokenKind};

pub(crate) struct Source<'t, 'src> {
    tokens: &'t [Token],
    source: &'src str,
    cursor: usize,
    prev_end: TextSize,
}

impl<'t, 'src> Source<'t, 'src> {
    pub(crate) fn new(tokens: &'t [Token], source: &'src str) -> Self {
        Self {
            tokens,
            source,
            cursor: 0,
            prev_end: TextSize::from(0),
        }
    }

    /// Returns the current significant token kind, or `Eof` if at end.
    pub(crate) fn current(&self) -> TokenKind {
        self.peek_kind_n(0)
    }

    pub(crate) fn current_token(&self) -> Option<&'t Token> {
        self.significant().next().map(|(_, token)| token)
    }

    /// Peeks at the nth significant token ahead (0 = current).
    pub(crate) fn peek_kind_n(&self, n: usize) -> TokenKind {
        self.significant()
            .nth(n)
            .map_or(TokenKind::Eof, |(_, token)| token.kind)
    }

    /// Like [`peek_kind_n`](Self::peek_kind_n), but a line break between the
    /// current token and the nth one yields `Newline`.
    pub(crate) fn peek_kind_on_line(&self, n: usize) -> TokenKind {
        let Some((first, current)) = self.significant().next() else {
            return TokenKind::Eof;
        };
        if n == 0 {
            return current.kind;
        }

        let mut seen = 0;
        for token in &self.tokens[first + 1..] {
            match token.kind {
                TokenKind::Newline => return TokenKind::Newline,
                kind if kind.is_trivia() => {}
                kind => {
                    seen += 1;
                    if seen == n {
                        return kind;
                    }
                }
            }
        }
        TokenKind::Eof
    }

    /// Returns `true` when the current token starts a new line, or there is
    /// no current token. The very first token counts as starting a line.
    pub(crate) fn at_line_break(&self) -> bool {
        if self.cursor == 0 {
            return true;
        }
        for token in self.tokens.get(self.cursor..).unwrap_or_default() {
            match token.kind {
                TokenKind::Newline => return true,
                kind if kind.is_trivia() => {}
                _ => return false,
            }
        }
        true
    }

    /// Advances past the current significant token and the trivia before it.
    pub(crate) fn bump(&mut self) {
        let next = self.significant().next();
        if let Some((index, token)) = next {
            self.prev_end = token.range.end();
            self.cursor = index + 1;
        } else {
            self.cursor = self.tokens.len();
        }
    }

    pub(crate) fn at_end(&self) -> bool {
        self.current_token().is_none()
    }

    /// Range of the current token, or an empty range at the end of input.
    pub(crate) fn current_range(&self) -> TextRange {
        self.current_token().map_or_else(
            || TextRange::empty(self.end_of_input()),
            |token| token.range,
        )
    }

    /// End offset of the last consumed token.
    pub(crate) fn prev_end(&self) -> TextSize {
        self.prev_end
    }

    pub(crate) fn end_of_input(&self) -> TextSize {
        TextSize::try_from(self.source.len()).unwrap_or(TextSize::from(u32::MAX))
    }

    pub(crate) fn current_text(&self) -> &'src str {
        self.current_token()
            .map_or("", |token| token.text(self.source))
    }

    /// Returns true if an assignment operator appears on the current line
    /// outside any parentheses, before any token `stops_at` accepts.
    pub(crate) fn has_assign_ahead(&self, stops_at: impl Fn(TokenKind) -> bool) -> bool {
        let mut paren_depth = 0u32;
        let mut seen_token = false;

        for token in self.tokens.get(self.cursor..).unwrap_or_default() {
            match token.kind {
                TokenKind::Newline if seen_token => return false,
                kind if kind.is_trivia() => {}
                TokenKind::LParen => paren_depth += 1,
                TokenKind::RParen => paren_depth = paren_depth.saturating_sub(1),
                kind if kind.is_assign_op() && paren_depth == 0 => return true,
                kind if paren_depth == 0 && stops_at(kind) => return false,
                _ => {}
            }
            if !token.kind.is_trivia() {
                seen_token = true;
            }
        }

        false
    }

    fn significant(&self) -> impl Iterator<Item = (usize, &'t Token)> + '_ {
        let tokens = self.tokens;
        (self.cursor..tokens.len())
            .filter_map(move |index| tokens.get(index).map(|token| (index, token)))
            .filter(|(_, token)| !token.kind.is_trivia())
    }
}
