use serde::Serialize;

use crate::test_model::{CaseStatus, TestCase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Overall {
    Pass,
    Fail,
}

impl Overall {
    pub fn as_str(self) -> &'static str {
        match self {
            Overall::Pass => "PASS",
            Overall::Fail => "FAIL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub overall: Overall,
    pub total: u64,
    pub passed: u64,
    pub skipped: u64,
    pub failed: u64,
    pub errors: u64,
    pub duration: f64,
    pub pct_pass: f64,
    pub pct_skip: f64,
    pub pct_fail: f64,
    pub pct_err: f64,
}

impl Summary {
    pub fn from_cases<'a>(cases: impl IntoIterator<Item = &'a TestCase>) -> Self {
        let mut counts = StatusCounts::default();
        let mut duration = 0.0;
        for case in cases {
            counts.record(case.status);
            duration += case.time_seconds;
        }
        let total = counts.total();
        let pct = |count: u64| percent_of(count, total);
        Self {
            overall: if counts.failed + counts.errors > 0 {
                Overall::Fail
            } else {
                Overall::Pass
            },
            total,
            passed: counts.passed,
            skipped: counts.skipped,
            failed: counts.failed,
            errors: counts.errors,
            duration,
            pct_pass: pct(counts.passed),
            pct_skip: pct(counts.skipped),
            pct_fail: pct(counts.failed),
            pct_err: pct(counts.errors),
        }
    }

    pub fn is_failing(&self) -> bool {
        self.overall == Overall::Fail
    }
}

#[derive(Debug, Default)]
struct StatusCounts {
    passed: u64,
    skipped: u64,
    failed: u64,
    errors: u64,
}

impl StatusCounts {
    fn record(&mut self, status: CaseStatus) {
        let slot = match status {
            CaseStatus::Pass => &mut self.passed,
            CaseStatus::Skip => &mut self.skipped,
            CaseStatus::Failure => &mut self.failed,
            CaseStatus::Error => &mut self.errors,
        };
        *slot += 1;
    }

    fn total(&self) -> u64 {
        self.passed + self.skipped + self.failed + self.errors
    }
}

fn percent_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * count as f64 / total as f64
}
