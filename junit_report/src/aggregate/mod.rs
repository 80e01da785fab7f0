pub mod suites;
pub mod summary;

pub use suites::{SuiteRow, bad_case_sort_key, bad_cases, compute_suite_rows, slugify};
pub use summary::{Overall, Summary};

use crate::test_model::TestCase;

pub const BAD_PREVIEW_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub summary: Summary,
    pub suite_rows: Vec<SuiteRow>,
}

pub fn aggregate(cases: &[TestCase]) -> Aggregate {
    Aggregate {
        summary: Summary::from_cases(cases),
        suite_rows: compute_suite_rows(cases),
    }
}

#[cfg(test)]
mod suites_test;
