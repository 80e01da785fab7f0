use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;

use crate::aggregate::Summary;
use crate::args::ParsedArgs;
use crate::test_model::ParseWarning;

pub const DIAGNOSTICS_DIR_ENV: &str = "JUNIT_REPORT_DIAGNOSTICS_DIR";
pub const TRACE_FILE_NAME: &str = "run_trace.json";

#[derive(Debug, Clone, Serialize)]
pub struct RunTrace {
    pub schema_version: u32,
    pub inputs: Vec<String>,
    pub out: String,
    pub tag: String,
    pub sha: String,
    pub elapsed_ms: Option<u128>,
    pub counts: TraceCounts,
    pub suites: usize,
    pub warnings: Vec<ParseWarning>,
    pub exit_code: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TraceCounts {
    pub overall: &'static str,
    pub total: u64,
    pub passed: u64,
    pub skipped: u64,
    pub failed: u64,
    pub errors: u64,
}

impl From<&Summary> for TraceCounts {
    fn from(summary: &Summary) -> Self {
        Self {
            overall: summary.overall.as_str(),
            total: summary.total,
            passed: summary.passed,
            skipped: summary.skipped,
            failed: summary.failed,
            errors: summary.errors,
        }
    }
}

pub struct TraceInput<'a> {
    pub args: &'a ParsedArgs,
    pub summary: &'a Summary,
    pub suite_count: usize,
    pub warnings: &'a [ParseWarning],
    pub started_at: Option<Instant>,
    pub exit_code: i32,
}

pub fn diagnostics_dir() -> Option<PathBuf> {
    std::env::var(DIAGNOSTICS_DIR_ENV)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

pub fn build_run_trace(input: &TraceInput<'_>) -> RunTrace {
    RunTrace {
        schema_version: 1,
        inputs: input
            .args
            .xml_files
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect(),
        out: input.args.out.to_string_lossy().to_string(),
        tag: input.args.tag.clone(),
        sha: input.args.sha.clone(),
        elapsed_ms: input.started_at.map(|t| t.elapsed().as_millis()),
        counts: TraceCounts::from(input.summary),
        suites: input.suite_count,
        warnings: input.warnings.to_vec(),
        exit_code: input.exit_code,
    }
}

/// Best effort: failures to write the trace are ignored.
pub fn write_run_trace_to(dir: &Path, trace: &RunTrace) {
    let _ = std::fs::create_dir_all(dir);
    if let Ok(file) = std::fs::File::create(dir.join(TRACE_FILE_NAME)) {
        let _ = serde_json::to_writer_pretty(file, trace);
    }
}

pub fn maybe_write_run_trace(input: &TraceInput<'_>) {
    let Some(dir) = diagnostics_dir() else {
        return;
    };
    write_run_trace_to(&dir, &build_run_trace(input));
}
