use chrono::{DateTime, Utc};
use minijinja::{AutoEscape, Environment, context};

use crate::aggregate::{Overall, SuiteRow, Summary, bad_cases};
use crate::error::ReportError;
use crate::format::time::{format_generated, format_seconds, format_whole_percent};
use crate::test_model::{ParseWarning, TestCase};

pub const DEFAULT_TEMPLATE_NAME: &str = "report_template.html.j2";

/// Everything computed from the inputs that the report displays.
#[derive(Debug, Clone, Copy)]
pub struct ReportData<'a> {
    pub summary: &'a Summary,
    pub suite_rows: &'a [SuiteRow],
    pub cases: &'a [TestCase],
    pub warnings: &'a [ParseWarning],
}

#[derive(Debug, Clone, Copy)]
pub struct ReportAssets<'a> {
    pub base_css: &'a str,
    pub inline_js: &'a str,
    pub template_name: &'a str,
    pub template_text: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportMeta<'a> {
    pub tag: &'a str,
    pub sha: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackedBar {
    pub pass: f64,
    pub skip: f64,
    pub fail: f64,
    pub tooltip: String,
}

impl StackedBar {
    /// Errors share the fail segment.
    pub fn from_summary(summary: &Summary) -> Self {
        let pass = summary.pct_pass;
        let skip = summary.pct_skip;
        let fail = summary.pct_fail + summary.pct_err;
        Self {
            pass,
            skip,
            fail,
            tooltip: format!(
                "Pass: {} • Skip: {} • Fail: {}",
                format_whole_percent(pass),
                format_whole_percent(skip),
                format_whole_percent(fail)
            ),
        }
    }
}

pub fn overall_dot(overall: Overall) -> &'static str {
    match overall {
        Overall::Pass => "good",
        Overall::Fail => "bad",
    }
}

/// Report output is HTML whatever the template file is called.
pub fn select_auto_escape(_template_name: &str) -> AutoEscape {
    AutoEscape::Html
}

fn report_environment<'source>(
    assets: &ReportAssets<'source>,
) -> Result<Environment<'source>, ReportError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_auto_escape_callback(select_auto_escape);
    env.add_template(assets.template_name, assets.template_text)?;
    Ok(env)
}

pub fn render_report(
    data: &ReportData<'_>,
    assets: &ReportAssets<'_>,
    meta: &ReportMeta<'_>,
) -> Result<String, ReportError> {
    render_report_at(data, assets, meta, Utc::now())
}

pub fn render_report_at(
    data: &ReportData<'_>,
    assets: &ReportAssets<'_>,
    meta: &ReportMeta<'_>,
    generated: DateTime<Utc>,
) -> Result<String, ReportError> {
    let env = report_environment(assets)?;
    let template = env.get_template(assets.template_name)?;
    let bar = StackedBar::from_summary(data.summary);
    let bad = bad_cases(data.cases);

    let html = template.render(context! {
        base_css => assets.base_css.trim_end(),
        generated => format_generated(generated),
        tag => meta.tag,
        sha => meta.sha,
        inline_js => assets.inline_js.trim_end(),
        summary => data.summary,
        duration => format_seconds(data.summary.duration),
        overall_dot => overall_dot(data.summary.overall),
        bar_pass => bar.pass,
        bar_skip => bar.skip,
        bar_fail => bar.fail,
        bar_tooltip => bar.tooltip,
        warnings => data.warnings,
        bad_cases => bad,
        suite_rows => data.suite_rows,
    })?;
    Ok(html)
}
