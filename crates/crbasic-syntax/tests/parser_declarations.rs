mod common;
use common::*;

#[test]
fn test_public_and_dim() {
    let root = parse_ok("Public AirT, RH\nDim i As Long\nPublic Flags(8) As Boolean");
    let decls: Vec<_> = root
        .children()
        .filter(|n| n.kind() == SyntaxKind::VariableDecl)
        .collect();
    assert_eq!(decls.len(), 3);
    assert_eq!(
        decls[0]
            .children()
            .filter(|n| n.kind() == SyntaxKind::Declarator)
            .count(),
        2
    );
}

#[test]
fn test_multi_dimensional_array() {
    let root = parse_ok("Public Grid(3, 4, 2) As Float");
    let dims = find(&root, SyntaxKind::DimensionList);
    assert_eq!(
        dims.children()
            .filter(|n| n.kind() == SyntaxKind::NumberLiteral)
            .count(),
        3
    );
}

#[test]
fn test_string_length() {
    let root = parse_ok("Dim Msg As String * 64");
    let type_ref = find(&root, SyntaxKind::TypeRef);
    assert_eq!(type_ref.text(), "As String * 64");
}

#[test]
fn test_missing_type_name() {
    assert_eq!(messages("Dim x As\n"), vec!["expected type name"]);
}

#[test]
fn test_const_forms() {
    assert_eq!(
        top_level_kinds("Const Pi = 3.14159\nConst Mask As Long = &hFF00\nConst Label = \"AB\""),
        vec![
            SyntaxKind::ConstDecl,
            SyntaxKind::ConstDecl,
            SyntaxKind::ConstDecl,
        ]
    );
    assert_eq!(messages("Const = 4\n"), vec!["expected constant name"]);
}

#[test]
fn test_const_table() {
    let source = "ConstTable(Settings)\n  Const Rate = 10\n  Const Gain = 2.5\nEndConstTable";
    let root = parse_ok(source);
    let table = find(&root, SyntaxKind::ConstTableDecl);
    assert_eq!(
        table
            .descendants()
            .filter(|n| n.kind() == SyntaxKind::ConstDecl)
            .count(),
        2
    );
    assert_eq!(
        messages("ConstTable\n  Const Rate = 10\n"),
        vec!["expected `EndConstTable` to close `ConstTable`"]
    );
}

#[test]
fn test_alias() {
    let root = parse_ok("Alias Temp(1) = AirT\nAlias Batt = BattV");
    assert_eq!(
        root.children()
            .filter(|n| n.kind() == SyntaxKind::AliasDecl)
            .count(),
        2
    );
    assert_eq!(messages("Alias X =\n"), vec!["expected alias name"]);
}

#[test]
fn test_units_free_text() {
    let source = "Units AirT = Deg C\nUnits RH = %\nUnits WS = m/s ' wind";
    let root = parse_ok(source);
    let units: Vec<_> = root
        .descendants_with_tokens()
        .filter_map(rowan::NodeOrToken::into_token)
        .filter(|t| t.kind() == SyntaxKind::UnitsText)
        .map(|t| t.text().to_string())
        .collect();
    assert_eq!(units, vec!["Deg C", "%", "m/s"]);
    assert_lossless(source);
}

#[test]
fn test_parameters() {
    let root = parse_ok("Sub Fill(buf() As Float, n As Long, v)\nEndSub");
    let params = find(&root, SyntaxKind::ParamList);
    assert_eq!(
        params
            .children()
            .filter(|n| n.kind() == SyntaxKind::Param)
            .count(),
        3
    );
    assert_eq!(
        messages("Function F(a,\nEndFunction"),
        vec!["expected parameter name", "expected `)`"]
    );
}
