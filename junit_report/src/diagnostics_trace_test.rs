use std::path::PathBuf;

use crate::aggregate::Summary;
use crate::args::ParsedArgs;
use crate::diagnostics_trace::{TRACE_FILE_NAME, TraceInput, build_run_trace, write_run_trace_to};
use crate::test_model::{CaseOrigin, CaseStatus, ParseWarning, TestCase};

fn args() -> ParsedArgs {
    ParsedArgs {
        xml_files: vec![PathBuf::from("a.xml"), PathBuf::from("b.xml")],
        css: PathBuf::from("index.css"),
        js: PathBuf::from("report.js"),
        template: PathBuf::from("t.html.j2"),
        out: PathBuf::from("out/report.html"),
        tag: "v1.2.3".to_string(),
        sha: "deadbeef".to_string(),
        fail_exit_code: true,
        verbose: false,
    }
}

#[test]
fn run_trace_records_counts_and_warnings() {
    let origin = CaseOrigin {
        source_file: "a.xml".to_string(),
        suite_name: "s".to_string(),
        classname: String::new(),
        test_name: "t".to_string(),
    };
    let cases = vec![TestCase::with_diagnostic(origin, 1.0, CaseStatus::Error, "e", "")];
    let summary = Summary::from_cases(&cases);
    let warnings = vec![ParseWarning::new("XML file not found: b.xml")];
    let parsed = args();
    let trace = build_run_trace(&TraceInput {
        args: &parsed,
        summary: &summary,
        suite_count: 1,
        warnings: &warnings,
        started_at: None,
        exit_code: 1,
    });

    let dir = tempfile::tempdir().expect("tempdir");
    write_run_trace_to(dir.path(), &trace);
    let raw = std::fs::read_to_string(dir.path().join(TRACE_FILE_NAME)).expect("trace");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("json");

    assert_eq!(json["schema_version"], 1);
    assert_eq!(json["inputs"], serde_json::json!(["a.xml", "b.xml"]));
    assert_eq!(json["counts"]["overall"], "FAIL");
    assert_eq!(json["counts"]["errors"], 1);
    assert_eq!(json["warnings"][0], "XML file not found: b.xml");
    assert_eq!(json["exit_code"], 1);
    assert!(json["elapsed_ms"].is_null());
}
