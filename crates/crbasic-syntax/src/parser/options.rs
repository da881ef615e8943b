//! Parser configuration.

/// Knobs for [`parse_with_options`](crate::parser::parse_with_options).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest allowed nesting of blocks and parenthesized/unary
    /// expressions. Anything deeper is reported and skipped to the end of
    /// its line instead of recursing further.
    pub max_depth: usize,
    /// Accept `If cond Then stmt [Else stmt]` on one line without `EndIf`.
    /// When disabled, tokens after `Then` are reported as trailing junk.
    pub single_line_if: bool,
}

impl ParseOptions {
    /// Default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 256;
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            single_line_if: true,
        }
    }
}
