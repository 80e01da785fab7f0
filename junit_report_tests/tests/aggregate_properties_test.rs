use junit_report::aggregate::{aggregate, bad_cases};
use junit_report::junit::normalize;
use junit_report::test_model::TestCase;

/// Deterministic pseudo-random mix of outcomes across a few files and suites.
fn generated_cases(seed: u64, count: usize) -> Vec<TestCase> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };
    (0..3)
        .flat_map(|file| {
            let body = (0..count)
                .map(|i| {
                    let marker = match next() % 5 {
                        0 => "<failure message=\"f\"/>",
                        1 => "<error type=\"E\"/>",
                        2 => "<skipped/>",
                        _ => "",
                    };
                    format!(
                        "<testsuite name=\"Suite{}\"><testcase classname=\"c{}\" name=\"t{i}\" time=\"0.{}\">{marker}</testcase></testsuite>",
                        next() % 4,
                        next() % 3,
                        next() % 10
                    )
                })
                .collect::<String>();
            let xml = format!("<testsuites>{body}</testsuites>");
            normalize(xml.as_bytes(), &format!("file{file}.xml")).cases
        })
        .collect()
}

#[test]
fn totals_partition_and_percentages_sum_for_many_inputs() {
    for seed in 1..20 {
        let cases = generated_cases(seed, 17);
        let result = aggregate(&cases);
        let s = &result.summary;
        assert_eq!(s.total as usize, cases.len());
        assert_eq!(s.total, s.passed + s.skipped + s.failed + s.errors);
        let pct_sum = s.pct_pass + s.pct_skip + s.pct_fail + s.pct_err;
        assert!((pct_sum - 100.0).abs() < 1e-6, "seed {seed}: {pct_sum}");
        for pct in [s.pct_pass, s.pct_skip, s.pct_fail, s.pct_err] {
            assert!((0.0..=100.0).contains(&pct));
        }
        let per_suite = result.suite_rows.iter().map(|r| r.summary.total).sum::<u64>();
        assert_eq!(per_suite, s.total);
    }
}

#[test]
fn aggregation_output_is_byte_identical_across_runs() {
    let cases = generated_cases(42, 25);
    let first = serde_json::to_string(&aggregate(&cases).suite_rows).expect("json");
    let second = serde_json::to_string(&aggregate(&cases).suite_rows).expect("json");
    similar_asserts::assert_eq!(first, second);

    let bad_first = serde_json::to_string(&bad_cases(&cases)).expect("json");
    let mut shuffled = cases.clone();
    shuffled.reverse();
    let bad_second = serde_json::to_string(&bad_cases(&shuffled)).expect("json");
    similar_asserts::assert_eq!(bad_first, bad_second);
}

#[test]
fn bad_previews_are_prefixes_of_each_suites_sorted_failures() {
    let cases = generated_cases(7, 40);
    let all_bad = bad_cases(&cases);
    for row in aggregate(&cases).suite_rows {
        let expected = all_bad
            .iter()
            .filter(|c| c.suite_name == row.suite_name)
            .take(5)
            .cloned()
            .collect::<Vec<_>>();
        assert_eq!(row.bad_preview, expected, "suite {}", row.suite_name);
    }
}
