mod common;
use common::*;

use crbasic_syntax::ast::{AstNode, ForLoop, SourceFile};

const WEATHER_STATION: &str = r#"'CR1000X Series Datalogger
'Weather station with hourly and daily tables

'Declare Variables and Units
Public BattV
Public PTemp_C
Public AirTC, RH
Public WS_ms, WindDir
Public Rain_mm
Public Flag(4) As Boolean
Dim LCount As Long
Const Offset = -40
Const Mask As Long = &hFF00

Units BattV = Volts
Units PTemp_C = Deg C
Units AirTC = Deg C
Units RH = %
Units WS_ms = meters/second
Units Rain_mm = mm

'Define Data Tables
DataTable(Hourly, True, -1)
  DataInterval(0, 60, Min, 10)
  Minimum(1, BattV, FP2, False, False)
  Average(1, AirTC, FP2, False)
  WindVector(1, WS_ms, WindDir, FP2, False, 0, 0, 0)
  Totalize(1, Rain_mm, FP2, False)
EndTable

DataTable(Daily, True, -1)
  DataInterval(0, 1440, Min, 10)
  Maximum(1, AirTC, FP2, False, True)
  Minimum(1, AirTC, FP2, False, True)
EndTable

Function Clamp(v As Float, lo As Float, hi As Float) As Float
  If v < lo Then Return lo
  If v > hi Then Return hi
  Return v
EndFunction

Sub ResetFlags
  For LCount = 1 To 4
    Flag(LCount) = False
  Next LCount
EndSub

'Main Program
BeginProg
  SequentialMode
  Scan(5, Sec, 1, 0)
    PanelTemp(PTemp_C, 60)
    Battery(BattV)
    VoltSE(AirTC, 1, mV2500, 1, 0, 0, 60, 0.1, Offset)
    VoltSE(RH, 1, mV2500, 2, 0, 0, 60, 0.1, 0)
    If RH > 100 And RH < 108 Then RH = 100
    PulseCount(WS_ms, 1, P1, 5, 1, 0.75, 0.2)
    BrHalf(WindDir, 1, mV2500, 3, Vx1, 1, 2500, True, 20000, 60, 355, 0)
    If WindDir >= 360 OR WindDir < 0 Then WindDir = 0
    PulseCount(Rain_mm, 1, P2, 2, 0, 0.254, 0)
    AirTC = Clamp(AirTC, -40, 60)
    Select Case LCount Mod 3
      Case 0
        Flag(1) = True
      Case 1, 2
        Flag(2) = Not Flag(2)
      Case Else
        Call ResetFlags
    EndSelect
    CallTable Hourly
    CallTable Daily
  NextScan
EndProg
"#;

#[test]
fn test_weather_station_program() {
    let root = parse_ok(WEATHER_STATION);
    assert_eq!(root.to_string(), WEATHER_STATION);

    let file = SourceFile::cast(root.clone()).unwrap();
    let program = file.program().expect("program block");
    let body = program.body().expect("program body");
    let kinds: Vec<_> = body.statements().map(|n| n.kind()).collect();
    assert_eq!(kinds, vec![SyntaxKind::FunctionCall, SyntaxKind::ScanStmt]);

    assert_eq!(
        root.children()
            .filter(|n| n.kind() == SyntaxKind::DataTableStmt)
            .count(),
        2
    );
    assert_eq!(
        root.descendants()
            .filter(|n| n.kind() == SyntaxKind::UnitsDecl)
            .count(),
        6
    );

    let for_loop = root.descendants().find_map(ForLoop::cast).unwrap();
    assert_eq!(
        for_loop.variable().map(|v| v.name()).as_deref(),
        Some("LCount")
    );
}

#[test]
fn test_header_comments_attach_to_first_statement() {
    let root = parse_ok(WEATHER_STATION);
    let first = root.children().next().unwrap();
    assert_eq!(first.kind(), SyntaxKind::VariableDecl);
    let text = first.text().to_string();
    assert!(text.starts_with("'CR1000X"));
    assert!(text.contains("'Declare Variables"));
}

#[test]
fn test_mixed_case_keywords() {
    let source = "beginprog\n  SCAN(1, sec, 0, 0)\n    if x then\n      y = 1\n    ELSEIF z THEN\n      y = 2\n    endif\n  nextscan\nENDPROG";
    let root = parse_ok(source);
    assert_eq!(root.to_string(), source);
    assert_eq!(top_level_kinds(source), vec![SyntaxKind::Program]);
    assert!(root.descendants().any(|n| n.kind() == SyntaxKind::ElseIfClause));
}

#[test]
fn test_crlf_line_endings() {
    let source = "Public x\r\nBeginProg\r\n  Scan(1, Sec, 0, 0)\r\n    x = x + 1\r\n  NextScan\r\nEndProg\r\n";
    let root = parse_ok(source);
    assert_eq!(root.to_string(), source);
    assert_eq!(
        top_level_kinds(source),
        vec![SyntaxKind::VariableDecl, SyntaxKind::Program]
    );
}

#[test]
fn test_error_positions_in_full_program() {
    let source = "Public x\nBeginProg\n  Scan(1, Sec, 0, 0)\n    x = (x + \n  NextScan\nEndProg\n";
    let parse = parse(source);
    assert_eq!(parse.diagnostics().len(), 2);
    assert_eq!(parse.diagnostics()[0].message, "expected expression");
    assert_eq!(parse.diagnostics()[0].span.start.line, 3);

    let range = parse.diagnostics()[0].range();
    assert_eq!(parse.line_index().line_col(range.start()).line, 3);
    assert_eq!(parse.syntax().to_string(), source);
}
