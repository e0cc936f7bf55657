//! Byte offset to line/column resolution and caret diagnostics.

use std::fmt::{self, Write};

use crate::source::Source;

/// 1-based line and column of a point in a [`Source`].
///
/// Columns count Unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns true for the characters that end a line.
///
/// `\r\n` is a single terminator; callers handle the pairing.
pub(crate) const fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Resolve `offset` in `source` to a line and column.
///
/// Offsets past the end of the body resolve to the end of the body.
#[must_use]
pub fn locate(source: &Source, offset: usize) -> SourceLocation {
    let mut line = 1;
    let mut column = 1;
    let mut prev = None;

    for (i, ch) in source.body().char_indices() {
        if i >= offset {
            break;
        }
        match ch {
            // second half of \r\n, already counted
            '\n' if prev == Some('\r') => {}
            ch if is_line_terminator(ch) => {
                line += 1;
                column = 1;
            }
            _ => column += 1,
        }
        prev = Some(ch);
    }

    SourceLocation { line, column }
}

/// Split a body into lines on every recognised terminator.
fn split_lines(body: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = body.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if !is_line_terminator(ch) {
            continue;
        }
        lines.push(&body[start..i]);
        start = i + ch.len_utf8();
        if ch == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            chars.next();
            start += 1;
        }
    }
    lines.push(&body[start..]);

    lines
}

/// Render a syntax error at `offset` with the surrounding lines.
///
/// ```text
/// Syntax Error GraphQL (2:3) Unexpected character "?".
///
/// 1: {
/// 2:   ?
///        ^
/// 3: }
/// ```
#[must_use]
pub fn render(source: &Source, offset: usize, message: &str) -> String {
    let location = locate(source, offset);
    highlight(source, location, message)
}

pub(crate) fn highlight(source: &Source, location: SourceLocation, message: &str) -> String {
    let SourceLocation { line, column } = location;
    let lines = split_lines(source.body());
    let width = (line + 1).to_string().len();
    let text_at = |n: usize| lines.get(n - 1).copied().unwrap_or_default();

    let mut out = format!(
        "Syntax Error {} ({line}:{column}) {message}.\n\n",
        source.name()
    );
    // Writing into a String cannot fail.
    if line >= 2 {
        let _ = writeln!(out, "{:>width$}: {}", line - 1, text_at(line - 1));
    }
    let _ = writeln!(out, "{line:>width$}: {}", text_at(line));
    let _ = writeln!(out, "{}^", " ".repeat(width + 1 + column));
    if line < lines.len() {
        let _ = writeln!(out, "{:>width$}: {}", line + 1, text_at(line + 1));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(body: &str, offset: usize) -> (usize, usize) {
        let l = locate(&Source::from_body(body), offset);
        (l.line, l.column)
    }

    #[test]
    fn start_of_body() {
        assert_eq!(loc("abc", 0), (1, 1));
        assert_eq!(loc("", 0), (1, 1));
    }

    #[test]
    fn counts_each_terminator_once() {
        assert_eq!(loc("a\nb", 2), (2, 1));
        assert_eq!(loc("a\rb", 2), (2, 1));
        assert_eq!(loc("a\r\nb", 3), (2, 1));
        assert_eq!(loc("a\u{2028}b", 4), (2, 1));
        assert_eq!(loc("a\u{2029}b", 4), (2, 1));
        assert_eq!(loc("\r\n\r\n\n\rx", 6), (5, 1));
    }

    #[test]
    fn columns_count_scalar_values() {
        // "é" is two bytes
        assert_eq!(loc("é?", 2), (1, 2));
        assert_eq!(loc("※※x", 6), (1, 3));
    }

    #[test]
    fn offset_past_end_clamps() {
        assert_eq!(loc("ab", 99), (1, 3));
    }

    #[test]
    fn splits_mixed_terminators() {
        assert_eq!(
            split_lines("a\r\nb\rc\nd\u{2028}e\u{2029}f"),
            vec!["a", "b", "c", "d", "e", "f"]
        );
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn render_single_line() {
        let out = render(&Source::from_body("?"), 0, "Unexpected character \"?\"");
        assert_eq!(
            out,
            "Syntax Error GraphQL (1:1) Unexpected character \"?\".\n\n1: ?\n   ^\n"
        );
    }

    #[test]
    fn render_pads_line_numbers() {
        let body = "1\n2\n3\n4\n5\n6\n7\n8\n9\n10";
        let out = render(&Source::new("doc", body), 16, "oops");
        assert_eq!(
            out,
            "Syntax Error doc (9:1) oops.\n\n 8: 8\n 9: 9\n    ^\n10: 10\n"
        );
    }
}
