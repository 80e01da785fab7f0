use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};

use crate::junit::decode::decode_xml;
use crate::junit::tree::{CASE_TAG, collect_suites, find_descendants, first_child};
use crate::test_model::{
    CaseOrigin, CaseStatus, ParseWarning, TestCase, UNNAMED_SUITE, UNNAMED_TEST,
};

const SKIP_MARKER: &str = "skipped";
const FAILURE_MARKER: &str = "failure";
const ERROR_MARKER: &str = "error";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedFile {
    pub cases: Vec<TestCase>,
    pub warnings: Vec<ParseWarning>,
}

impl NormalizedFile {
    fn warning(message: String) -> Self {
        Self {
            cases: vec![],
            warnings: vec![ParseWarning::new(message)],
        }
    }
}

/// Display name for an input path: its final component.
pub fn source_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

pub fn normalize_file(path: &Path) -> NormalizedFile {
    let source_file = source_file_name(path);
    match std::fs::read(path) {
        Ok(bytes) => normalize(&bytes, &source_file),
        Err(err) => NormalizedFile::warning(could_not_parse(&source_file, &err)),
    }
}

pub fn normalize(xml_bytes: &[u8], source_file: &str) -> NormalizedFile {
    let text = match decode_xml(xml_bytes) {
        Ok(text) => text,
        Err(err) => return NormalizedFile::warning(could_not_parse(source_file, &err)),
    };
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = match Document::parse_with_options(&text, options) {
        Ok(document) => document,
        Err(err) => return NormalizedFile::warning(could_not_parse(source_file, &err)),
    };

    let suites = collect_suites(document.root_element());
    if suites.is_empty() {
        return NormalizedFile::warning(format!(
            "No <testsuite> elements found in {source_file}"
        ));
    }

    let cases = suites
        .into_iter()
        .flat_map(|suite| normalize_suite(suite, source_file))
        .collect();
    NormalizedFile {
        cases,
        warnings: vec![],
    }
}

fn could_not_parse(source_file: &str, err: &dyn std::fmt::Display) -> String {
    format!("Could not parse {source_file}: {err}")
}

fn normalize_suite(suite: Node<'_, '_>, source_file: &str) -> Vec<TestCase> {
    let suite_name = non_empty_attr(suite, "name").unwrap_or(UNNAMED_SUITE);
    find_descendants(suite, CASE_TAG)
        .into_iter()
        .map(|case| normalize_case(case, source_file, suite_name))
        .collect()
}

fn normalize_case(case: Node<'_, '_>, source_file: &str, suite_name: &str) -> TestCase {
    let origin = CaseOrigin {
        source_file: source_file.to_string(),
        suite_name: suite_name.to_string(),
        classname: non_empty_attr(case, "classname")
            .unwrap_or_default()
            .to_string(),
        test_name: non_empty_attr(case, "name")
            .unwrap_or(UNNAMED_TEST)
            .to_string(),
    };
    let time_seconds = parse_seconds(case.attribute("time"));

    if first_child(case, SKIP_MARKER).is_some() {
        return TestCase::skipped(origin, time_seconds);
    }
    let diagnostic = [
        (FAILURE_MARKER, CaseStatus::Failure),
        (ERROR_MARKER, CaseStatus::Error),
    ]
    .into_iter()
    .find_map(|(tag, status)| first_child(case, tag).map(|marker| (marker, status)));

    match diagnostic {
        Some((marker, status)) => TestCase::with_diagnostic(
            origin,
            time_seconds,
            status,
            marker_message(marker),
            marker.text().unwrap_or_default().trim(),
        ),
        None => TestCase::passed(origin, time_seconds),
    }
}

fn marker_message<'a>(marker: Node<'a, '_>) -> &'a str {
    non_empty_attr(marker, "message")
        .or_else(|| non_empty_attr(marker, "type"))
        .unwrap_or_default()
        .trim()
}

fn non_empty_attr<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name).filter(|value| !value.is_empty())
}

pub fn parse_seconds(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|seconds| seconds.is_finite() && *seconds >= 0.0)
        .unwrap_or(0.0)
}
