#![no_main]

use crbasic_syntax::{parse, parse_with_options, ParseOptions};
use libfuzzer_sys::fuzz_target;

const MAX_SOURCE_BYTES: usize = 8192;

fn decode_source(bytes: &[u8]) -> String {
    let capped = &bytes[..bytes.len().min(MAX_SOURCE_BYTES)];
    String::from_utf8_lossy(capped).into_owned()
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let source = decode_source(&data[1..]);
    let parsed = parse(&source);
    assert_eq!(parsed.syntax().to_string(), source);
    for diagnostic in parsed.diagnostics() {
        assert!(usize::from(diagnostic.range().end()) <= source.len());
    }

    // Wrap the input in a program body and vary the options to reach the
    // block and nesting-limit paths.
    let wrapped = format!("BeginProg\n  Scan(1, Sec, 0, 0)\n{source}\n  NextScan\nEndProg\n");
    let options = ParseOptions {
        max_depth: usize::from(data[0] % 32) + 1,
        single_line_if: data[0] & 0x80 == 0,
    };
    let parsed = parse_with_options(&wrapped, &options);
    assert_eq!(parsed.syntax().to_string(), wrapped);
});
