use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::aggregate::BAD_PREVIEW_LIMIT;
use crate::aggregate::summary::Summary;
use crate::format::time::format_seconds;
use crate::test_model::TestCase;

static NON_SLUG_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("slug regex"));

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteRow {
    pub suite_name: String,
    pub suite_id: String,
    #[serde(flatten)]
    pub summary: Summary,
    pub duration_fmt: String,
    pub sources: Vec<String>,
    pub bad_preview: Vec<TestCase>,
}

/// Lowercase, hyphen-delimited anchor id; `"suite"` when nothing survives.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let slug = NON_SLUG_RUN.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "suite".to_string()
    } else {
        slug.to_string()
    }
}

pub fn bad_case_sort_key(case: &TestCase) -> (&str, &str, &str, &str, &str) {
    (
        &case.source_file,
        &case.suite_name,
        &case.classname,
        &case.test_name,
        case.status.as_str(),
    )
}

fn compare_bad_cases(left: &TestCase, right: &TestCase) -> Ordering {
    bad_case_sort_key(left).cmp(&bad_case_sort_key(right))
}

/// Failure and error cases in deterministic order.
pub fn bad_cases<'a>(cases: impl IntoIterator<Item = &'a TestCase>) -> Vec<TestCase> {
    let mut bad = cases
        .into_iter()
        .filter(|case| case.status.is_bad())
        .cloned()
        .collect::<Vec<_>>();
    bad.sort_by(compare_bad_cases);
    bad
}

#[derive(Default)]
struct SuiteGroup<'a> {
    cases: Vec<&'a TestCase>,
    sources: BTreeSet<&'a str>,
}

pub fn compute_suite_rows(cases: &[TestCase]) -> Vec<SuiteRow> {
    let groups = cases.iter().fold(
        BTreeMap::<&str, SuiteGroup<'_>>::new(),
        |mut groups, case| {
            let group = groups.entry(case.suite_name.as_str()).or_default();
            group.cases.push(case);
            if !case.source_file.is_empty() {
                group.sources.insert(case.source_file.as_str());
            }
            groups
        },
    );

    let mut rows = groups
        .into_iter()
        .map(|(suite_name, group)| build_row(suite_name, group))
        .collect::<Vec<_>>();
    rows.sort_by_key(|row| row.suite_name.to_lowercase());
    rows
}

fn build_row(suite_name: &str, group: SuiteGroup<'_>) -> SuiteRow {
    let summary = Summary::from_cases(group.cases.iter().copied());
    let mut bad_preview = bad_cases(group.cases.iter().copied());
    bad_preview.truncate(BAD_PREVIEW_LIMIT);
    SuiteRow {
        suite_name: suite_name.to_string(),
        suite_id: slugify(suite_name),
        duration_fmt: format_seconds(summary.duration),
        summary,
        sources: group.sources.into_iter().map(str::to_string).collect(),
        bad_preview,
    }
}
