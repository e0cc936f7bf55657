//! Position resolution and caret rendering.

use graphql_lexer::{Source, SourceLocation, locate, render};

#[test]
fn crlf_counts_as_one_line() {
    let source = Source::from_body("a\r\nb\r\nc");
    assert_eq!(locate(&source, 6), SourceLocation { line: 3, column: 1 });
}

#[test]
fn lone_cr_and_separators_advance_lines() {
    let source = Source::from_body("a\rb\u{2028}c\u{2029}d");
    assert_eq!(locate(&source, 2), SourceLocation { line: 2, column: 1 });
    assert_eq!(locate(&source, 6), SourceLocation { line: 3, column: 1 });
    assert_eq!(locate(&source, 10), SourceLocation { line: 4, column: 1 });
}

#[test]
fn location_display() {
    assert_eq!(SourceLocation { line: 3, column: 14 }.to_string(), "3:14");
}

#[test]
fn render_first_line_has_no_previous_context() {
    let out = render(&Source::from_body("ab\ncd"), 1, "boom");
    assert_eq!(out, "Syntax Error GraphQL (1:2) boom.\n\n1: ab\n    ^\n2: cd\n");
}

#[test]
fn render_last_line_has_no_next_context() {
    let out = render(&Source::from_body("ab\r\ncd"), 5, "boom");
    assert_eq!(out, "Syntax Error GraphQL (2:2) boom.\n\n1: ab\n2: cd\n    ^\n");
}

#[test]
fn render_counts_columns_in_characters() {
    let out = render(&Source::from_body("é※?"), 5, "bad");
    assert_eq!(out, "Syntax Error GraphQL (1:3) bad.\n\n1: é※?\n     ^\n");
}
