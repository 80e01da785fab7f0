use crate::aggregate::suites::{bad_cases, compute_suite_rows, slugify};
use crate::aggregate::{BAD_PREVIEW_LIMIT, aggregate};
use crate::test_model::{CaseOrigin, CaseStatus, TestCase};

fn case(source: &str, suite: &str, class: &str, name: &str, status: CaseStatus) -> TestCase {
    let origin = CaseOrigin {
        source_file: source.to_string(),
        suite_name: suite.to_string(),
        classname: class.to_string(),
        test_name: name.to_string(),
    };
    TestCase::with_diagnostic(origin, 0.5, status, "m", "")
}

#[test]
fn slugify_produces_stable_anchor_ids() {
    assert_eq!(slugify("My Suite / Login"), "my-suite-login");
    assert_eq!(slugify("  --Already--slugged--  "), "already-slugged");
    assert_eq!(slugify("(unnamed suite)"), "unnamed-suite");
    assert_eq!(slugify("Über Tests"), "ber-tests");
    assert_eq!(slugify("!!!"), "suite");
    assert_eq!(slugify(""), "suite");
}

#[test]
fn rows_are_sorted_case_insensitively_and_group_by_exact_name() {
    let cases = vec![
        case("a.xml", "beta", "", "t1", CaseStatus::Pass),
        case("a.xml", "Alpha", "", "t2", CaseStatus::Pass),
        case("b.xml", "alpha", "", "t3", CaseStatus::Skip),
        case("b.xml", "Gamma", "", "t4", CaseStatus::Failure),
    ];
    let rows = compute_suite_rows(&cases);
    let names = rows.iter().map(|r| r.suite_name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Alpha", "alpha", "beta", "Gamma"]);
    assert_eq!(rows[0].suite_id, "alpha");
    assert_eq!(rows[3].summary.failed, 1);
    assert_eq!(rows[3].duration_fmt, "0.500000000s");
}

#[test]
fn same_named_suites_from_different_files_merge_into_one_row() {
    let cases = vec![
        case("frontend.xml", "shared", "", "a", CaseStatus::Pass),
        case("backend.xml", "shared", "", "b", CaseStatus::Error),
        case("backend.xml", "shared", "", "c", CaseStatus::Pass),
    ];
    let rows = compute_suite_rows(&cases);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].summary.total, 3);
    assert_eq!(rows[0].sources, vec!["backend.xml", "frontend.xml"]);
}

#[test]
fn grouping_is_exhaustive() {
    let cases = (0..23)
        .map(|i| {
            let status = match i % 4 {
                0 => CaseStatus::Pass,
                1 => CaseStatus::Skip,
                2 => CaseStatus::Failure,
                _ => CaseStatus::Error,
            };
            case("x.xml", &format!("suite-{}", i % 5), "", &format!("t{i}"), status)
        })
        .collect::<Vec<_>>();
    let result = aggregate(&cases);
    let per_suite_total = result.suite_rows.iter().map(|r| r.summary.total).sum::<u64>();
    assert_eq!(per_suite_total, result.summary.total);
    for case in &cases {
        let owning_rows = result
            .suite_rows
            .iter()
            .filter(|row| row.suite_name == case.suite_name)
            .count();
        assert_eq!(owning_rows, 1);
    }
}

#[test]
fn bad_preview_is_sorted_and_truncated() {
    let cases = vec![
        case("b.xml", "s", "k", "z", CaseStatus::Failure),
        case("a.xml", "s", "k", "y", CaseStatus::Error),
        case("a.xml", "s", "k", "x", CaseStatus::Failure),
        case("a.xml", "s", "j", "x", CaseStatus::Pass),
        case("a.xml", "s", "j", "w", CaseStatus::Error),
        case("c.xml", "s", "", "v", CaseStatus::Failure),
        case("a.xml", "s", "", "u", CaseStatus::Failure),
        case("a.xml", "s", "k", "x", CaseStatus::Skip),
    ];
    let rows = compute_suite_rows(&cases);
    let preview = rows[0]
        .bad_preview
        .iter()
        .map(|c| format!("{}:{}:{}", c.source_file, c.classname, c.test_name))
        .collect::<Vec<_>>();
    assert_eq!(preview.len(), BAD_PREVIEW_LIMIT);
    assert_eq!(
        preview,
        vec!["a.xml::u", "a.xml:j:w", "a.xml:k:x", "a.xml:k:y", "b.xml:k:z"]
    );
}

#[test]
fn bad_cases_break_ties_on_status_and_keep_every_entry() {
    let cases = vec![
        case("a.xml", "s", "k", "same", CaseStatus::Failure),
        case("a.xml", "s", "k", "same", CaseStatus::Error),
        case("a.xml", "s", "k", "ok", CaseStatus::Pass),
    ];
    let bad = bad_cases(&cases);
    let statuses = bad.iter().map(|c| c.status).collect::<Vec<_>>();
    assert_eq!(statuses, vec![CaseStatus::Error, CaseStatus::Failure]);
}

#[test]
fn ordering_is_independent_of_input_order() {
    let mut cases = vec![
        case("b.xml", "S2", "c", "t1", CaseStatus::Failure),
        case("a.xml", "s1", "c", "t2", CaseStatus::Error),
        case("a.xml", "S2", "c", "t3", CaseStatus::Failure),
        case("a.xml", "s1", "c", "t4", CaseStatus::Pass),
    ];
    let forward = aggregate(&cases);
    let forward_bad = bad_cases(&cases);
    cases.reverse();
    let reversed = aggregate(&cases);
    assert_eq!(forward.suite_rows, reversed.suite_rows);
    assert_eq!(forward_bad, bad_cases(&cases));
}
