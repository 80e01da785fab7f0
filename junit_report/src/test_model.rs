use std::fmt;

use serde::Serialize;

pub const UNNAMED_SUITE: &str = "(unnamed suite)";
pub const UNNAMED_TEST: &str = "(unnamed test)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Pass,
    Skip,
    Failure,
    Error,
}

impl CaseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CaseStatus::Pass => "pass",
            CaseStatus::Skip => "skip",
            CaseStatus::Failure => "failure",
            CaseStatus::Error => "error",
        }
    }

    /// Display label; empty for statuses that carry no diagnostic.
    pub fn kind_label(self) -> &'static str {
        match self {
            CaseStatus::Failure => "FAILURE",
            CaseStatus::Error => "ERROR",
            CaseStatus::Pass | CaseStatus::Skip => "",
        }
    }

    pub fn is_bad(self) -> bool {
        matches!(self, CaseStatus::Failure | CaseStatus::Error)
    }
}

/// Where a case came from: artifact file, enclosing suite and its own identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOrigin {
    pub source_file: String,
    pub suite_name: String,
    pub classname: String,
    pub test_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestCase {
    pub source_file: String,
    pub suite_name: String,
    pub classname: String,
    pub test_name: String,
    #[serde(rename = "time")]
    pub time_seconds: f64,
    pub status: CaseStatus,
    pub kind: &'static str,
    pub message: String,
    pub details: String,
}

impl TestCase {
    pub fn passed(origin: CaseOrigin, time_seconds: f64) -> Self {
        Self::with_diagnostic(origin, time_seconds, CaseStatus::Pass, "", "")
    }

    pub fn skipped(origin: CaseOrigin, time_seconds: f64) -> Self {
        Self::with_diagnostic(origin, time_seconds, CaseStatus::Skip, "", "")
    }

    /// Builds a case whose `kind` is derived from `status`, so the two never disagree.
    pub fn with_diagnostic(
        origin: CaseOrigin,
        time_seconds: f64,
        status: CaseStatus,
        message: &str,
        details: &str,
    ) -> Self {
        let (message, details) = if status.is_bad() {
            (message.to_string(), details.to_string())
        } else {
            (String::new(), String::new())
        };
        Self {
            source_file: origin.source_file,
            suite_name: origin.suite_name,
            classname: origin.classname,
            test_name: origin.test_name,
            time_seconds: sanitize_seconds(time_seconds),
            status,
            kind: status.kind_label(),
            message,
            details,
        }
    }
}

fn sanitize_seconds(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 { raw } else { 0.0 }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParseWarning(String);

impl ParseWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
