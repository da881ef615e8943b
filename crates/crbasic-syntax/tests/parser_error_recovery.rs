mod common;
use common::*;

use crbasic_syntax::{parse_with_options, DiagnosticKind, ParseOptions};

#[test]
fn test_recovery_resumes_on_next_line() {
    let source = "x =\ny = 2\nz = 3";
    let parse = parse(source);
    assert_eq!(parse.diagnostics().len(), 1);
    assert_eq!(parse.diagnostics()[0].message, "expected expression");
    let kinds = top_level_kinds(source);
    assert_eq!(kinds.len(), 3);
    assert!(kinds.iter().all(|k| *k == SyntaxKind::Assignment));
}

#[test]
fn test_stray_operator_reports_expression_and_line_end() {
    assert_eq!(
        messages("x = = 1"),
        vec!["expected expression", "expected end of line, found number"]
    );
}

#[test]
fn test_error_node_wraps_unexpected_tokens() {
    let source = ") ) )\nx = 1";
    let parse = parse(source);
    assert_eq!(parse.diagnostics().len(), 1);
    assert_eq!(parse.diagnostics()[0].message, "unexpected `)`");
    assert_eq!(
        top_level_kinds(source),
        vec![SyntaxKind::ErrorNode, SyntaxKind::Assignment]
    );
}

#[test]
fn test_recovery_stops_at_statement_keyword() {
    let source = "Then Public x";
    assert_eq!(messages(source), vec!["unexpected `Then`"]);
    assert_eq!(
        top_level_kinds(source),
        vec![SyntaxKind::ErrorNode, SyntaxKind::VariableDecl]
    );
}

#[test]
fn test_stray_terminators() {
    assert_eq!(
        messages("NextScan\nEndProg\nWend"),
        vec![
            "unexpected `NextScan`",
            "unexpected `EndProg`",
            "unexpected `Wend`"
        ]
    );
}

#[test]
fn test_lex_errors_do_not_cascade() {
    let source = "x = 3 @ 4\ns = \"open\ny = 2";
    let parse = parse(source);
    let kinds: Vec<_> = parse.diagnostics().iter().map(|d| d.kind).collect();
    assert_eq!(kinds, vec![DiagnosticKind::LexError, DiagnosticKind::LexError]);
    assert_lossless(source);
}

#[test]
fn test_diagnostics_are_ordered_and_positioned() {
    let source = "BeginProg\n  x = (1\n  y = 2 3\nEndProg";
    let parse = parse(source);
    let positions: Vec<_> = parse
        .diagnostics()
        .iter()
        .map(|d| (d.span.start.line, d.message.as_str()))
        .collect();
    assert_eq!(
        positions,
        vec![
            (1, "expected `)`"),
            (2, "expected end of line, found number"),
        ]
    );
    let starts: Vec<_> = parse.diagnostics().iter().map(|d| d.range().start()).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
}

#[test]
fn test_diagnostic_display() {
    let parse = parse("x = 1\nEndIf");
    assert_eq!(
        parse.diagnostics()[0].to_string(),
        "syntax error at 2:1: unexpected `EndIf`"
    );
}

#[test]
fn test_missing_then() {
    assert_eq!(
        messages("If x > 1\n  y = 1\nEndIf"),
        vec!["expected `Then`"]
    );
}

#[test]
fn test_nesting_limit_applies_to_blocks() {
    let depth = 40;
    let mut source = String::new();
    for _ in 0..depth {
        source.push_str("While x\n");
    }
    for _ in 0..depth {
        source.push_str("Wend\n");
    }
    let options = ParseOptions {
        max_depth: 16,
        ..ParseOptions::default()
    };
    let parse = parse_with_options(&source, &options);
    assert!(parse
        .diagnostics()
        .iter()
        .any(|d| d.message == "nesting too deep"));
    assert_eq!(parse.syntax().to_string(), source);
}

#[test]
fn test_nesting_limit_applies_to_single_line_ifs() {
    let source = format!("{}x = 1", "If a Then ".repeat(1000));
    let options = ParseOptions {
        max_depth: 16,
        ..ParseOptions::default()
    };
    let parse = parse_with_options(&source, &options);
    let messages: Vec<_> = parse
        .diagnostics()
        .iter()
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(messages, vec!["nesting too deep"]);
    assert_eq!(parse.syntax().to_string(), source);
}

#[test]
fn test_garbage_inputs_stay_lossless() {
    for source in [
        "",
        "\n\n\n",
        "((((",
        "))))",
        "EndIf EndIf",
        "If",
        "For",
        "Select",
        "Select Case",
        "Scan(",
        "DataTable(",
        "MenuItem(",
        "Function",
        "Sub (",
        "#If",
        "Units",
        "Units x =",
        "x = \"unterminated",
        "Public ,,,",
        "Const",
        "Alias",
        "Call (",
        "x.y. = 1",
        "If a Then Else",
        "If a Then x = 1 Else",
        "Do Until",
        "Loop",
        "Case Else",
        "&h",
        "1.2.3",
        "\u{00b0}C",
        "x = 1 ' \u{00e9}t\u{00e9}",
    ] {
        let parse = parse(source);
        assert_eq!(parse.syntax().to_string(), source, "{source:?}");
    }
}
