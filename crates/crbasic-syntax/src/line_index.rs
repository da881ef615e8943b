//! Byte offset to line/column mapping.

use std::fmt;

use text_size::TextSize;

/// A zero-based line and column. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LineCol {
    /// Zero-based line number.
    pub line: u32,
    /// Zero-based column, in characters.
    pub col: u32,
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// Line start table for one source text.
///
/// Only offsets are kept, not the text: line starts plus the position and
/// width of every non-ASCII character, which is enough to count columns in
/// characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    len: TextSize,
    line_starts: Vec<TextSize>,
    wide_chars: Vec<WideChar>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WideChar {
    start: TextSize,
    len: u8,
}

impl LineIndex {
    /// Builds the index. `\r\n`, `\n` and a lone `\r` all end a line.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        let mut wide_chars = Vec::new();
        let mut chars = text.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            match c {
                '\r' if chars.peek().map(|&(_, next)| next) == Some('\n') => {
                    chars.next();
                    line_starts.push(offset(i + 2));
                }
                '\r' | '\n' => line_starts.push(offset(i + 1)),
                c if !c.is_ascii() => wide_chars.push(WideChar {
                    start: offset(i),
                    len: u8::try_from(c.len_utf8()).unwrap_or(4),
                }),
                _ => {}
            }
        }

        Self {
            len: offset(text.len()),
            line_starts,
            wide_chars,
        }
    }

    /// Number of lines (an empty text has one).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Converts a byte offset to a line/column pair. Offsets past the end
    /// clamp to the end of the text.
    #[must_use]
    pub fn line_col(&self, at: TextSize) -> LineCol {
        let at = at.min(self.len);
        let line = self.line_starts.partition_point(|start| *start <= at) - 1;
        let line_start = self.line_starts[line];

        let first = self.wide_chars.partition_point(|c| c.start < line_start);
        let last = self.wide_chars.partition_point(|c| c.start < at);
        let extra: usize = self
            .wide_chars
            .get(first..last)
            .unwrap_or_default()
            .iter()
            .map(|c| usize::from(c.len) - 1)
            .sum();
        let col = usize::from(at - line_start).saturating_sub(extra);

        LineCol {
            line: u32::try_from(line).unwrap_or(u32::MAX),
            col: u32::try_from(col).unwrap_or(u32::MAX),
        }
    }
}

fn offset(i: usize) -> TextSize {
    TextSize::try_from(i).unwrap_or(TextSize::from(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_basic() {
        let index = LineIndex::new("ab\ncd\r\nef");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_col(0.into()), LineCol { line: 0, col: 0 });
        assert_eq!(index.line_col(4.into()), LineCol { line: 1, col: 1 });
        assert_eq!(index.line_col(7.into()), LineCol { line: 2, col: 0 });
        assert_eq!(index.line_col(100.into()), LineCol { line: 2, col: 2 });
    }

    #[test]
    fn test_columns_count_characters() {
        let index = LineIndex::new("x = \"°C\" y");
        assert_eq!(index.line_col(10.into()), LineCol { line: 0, col: 9 });
    }

    #[test]
    fn test_wide_chars_on_earlier_lines_do_not_shift_columns() {
        let index = LineIndex::new("' été °C\nx = 1\r\n° y");
        assert_eq!(index.line_col(14.into()), LineCol { line: 1, col: 2 });
        assert_eq!(index.line_col(22.into()), LineCol { line: 2, col: 2 });
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(LineCol { line: 0, col: 4 }.to_string(), "1:5");
    }
}
