mod common;
use common::*;

use crbasic_syntax::ast::{AstNode, FunctionCall};

#[test]
fn test_compound_assignments() {
    let source = "a = 1\nb += 2\nc -= 3\nd *= 4\ne /= 5\nf \\= 6\ng ^= 7\nh &= \"x\"";
    let kinds = top_level_kinds(source);
    assert_eq!(kinds.len(), 8);
    assert!(kinds.iter().all(|k| *k == SyntaxKind::Assignment));
    assert!(parse(source).ok());
}

#[test]
fn test_assignment_to_array_element() {
    let root = parse_ok("T(i + 1, 2) = T(i, 2) * 0.5");
    let assignment = find(&root, SyntaxKind::Assignment);
    let target = assignment.first_child().unwrap();
    assert_eq!(target.kind(), SyntaxKind::FunctionCall);
    assert_eq!(target.text(), "T(i + 1, 2)");
}

#[test]
fn test_instruction_calls() {
    let root = parse_ok("PanelTemp(PTemp, 15000)\nBattery (Batt)\nSequentialMode\nPipelineMode");
    let calls: Vec<_> = root.children().filter_map(FunctionCall::cast).collect();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0].args().count(), 2);
    assert_eq!(calls[1].args().count(), 1);
    assert_eq!(calls[2].args().count(), 0);
    assert_eq!(
        calls[3].callee().map(|c| c.name()).as_deref(),
        Some("PipelineMode")
    );
}

#[test]
fn test_empty_argument_list() {
    let root = parse_ok("ResetTable()");
    let call = root.children().find_map(FunctionCall::cast).unwrap();
    assert_eq!(call.args().count(), 0);
}

#[test]
fn test_call_statement_forms() {
    assert_eq!(
        top_level_kinds("Call Init\nCall Store(1, x)"),
        vec![SyntaxKind::CallStmt, SyntaxKind::CallStmt]
    );
    assert_eq!(messages("Call\n"), vec!["expected procedure name"]);
}

#[test]
fn test_exit_kinds() {
    for block in ["For", "Do", "While", "Sub", "Function", "Scan", "Select"] {
        let kinds = top_level_kinds(&format!("Exit {block}"));
        assert_eq!(kinds, vec![SyntaxKind::ExitStmt], "{block}");
        assert!(parse(&format!("Exit {block}")).ok(), "{block}");
    }
    assert_eq!(
        messages("Exit Next"),
        vec![
            "expected block kind after `Exit`",
            "expected end of line, found `Next`"
        ]
    );
}

#[test]
fn test_return_with_and_without_value() {
    let root = parse_ok("Return\nReturn a + b");
    let returns: Vec<_> = root.children().collect();
    assert_eq!(returns.len(), 2);
    assert!(returns[0].first_child().is_none());
    assert_eq!(
        returns[1].first_child().map(|n| n.kind()),
        Some(SyntaxKind::BinaryExpr)
    );
}

#[test]
fn test_statements_end_at_line_break() {
    assert_eq!(
        messages("x = 1 y = 2"),
        vec!["expected end of line, found identifier"]
    );
    let root = parse("x = 1 y = 2").syntax();
    let assignment = root.first_child().unwrap();
    assert!(assignment
        .children()
        .any(|n| n.kind() == SyntaxKind::ErrorNode));
}

#[test]
fn test_comments_and_blank_lines() {
    let source = "' header\n\nx = 1 ' trailing\n\n' footer\n";
    assert_eq!(top_level_kinds(source), vec![SyntaxKind::Assignment]);
    assert!(parse(source).ok());
    assert_lossless(source);
}

#[test]
fn test_comment_line_attaches_to_next_statement() {
    let root = parse_ok("x = 1\n' about y\ny = 2");
    let second = root.children().nth(1).unwrap();
    assert!(second.text().to_string().starts_with("' about y"));
}
