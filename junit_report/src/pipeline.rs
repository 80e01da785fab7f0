use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::aggregate::{Summary, aggregate};
use crate::args::ParsedArgs;
use crate::diagnostics_trace::{TraceInput, maybe_write_run_trace};
use crate::error::ReportError;
use crate::files::{read_text_asset, write_text_file};
use crate::junit::normalize::{normalize_file, source_file_name};
use crate::render::{DEFAULT_TEMPLATE_NAME, ReportAssets, ReportData, ReportMeta, render_report};
use crate::test_model::{ParseWarning, TestCase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    TestsFailed,
    Fatal,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::TestsFailed => 1,
            ExitStatus::Fatal => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedAssets {
    pub base_css: String,
    pub inline_js: String,
    pub template_name: String,
    pub template_text: String,
}

impl LoadedAssets {
    pub fn as_report_assets(&self) -> ReportAssets<'_> {
        ReportAssets {
            base_css: &self.base_css,
            inline_js: &self.inline_js,
            template_name: &self.template_name,
            template_text: &self.template_text,
        }
    }
}

/// Cases and warnings merged across inputs, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedInputs {
    pub cases: Vec<TestCase>,
    pub warnings: Vec<ParseWarning>,
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub summary: Summary,
    pub suite_count: usize,
    pub warnings: Vec<ParseWarning>,
    pub exit_status: ExitStatus,
}

pub fn read_assets(args: &ParsedArgs) -> Result<LoadedAssets, ReportError> {
    let base_css = read_text_asset(&args.css, "CSS")?;
    let inline_js = read_text_asset(&args.js, "JavaScript")?;
    let template_text = read_text_asset(&args.template, "template")?;
    let template_name = args
        .template
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| DEFAULT_TEMPLATE_NAME.to_string());
    Ok(LoadedAssets {
        base_css,
        inline_js,
        template_name,
        template_text,
    })
}

pub fn collect_inputs(xml_files: &[PathBuf], verbose: bool) -> CollectedInputs {
    xml_files
        .iter()
        .fold(CollectedInputs::default(), |mut acc, path| {
            collect_one(&mut acc, path, verbose);
            acc
        })
}

fn collect_one(acc: &mut CollectedInputs, path: &Path, verbose: bool) {
    if !path.exists() {
        acc.warnings.push(ParseWarning::new(format!(
            "XML file not found: {}",
            source_file_name(path)
        )));
        return;
    }
    let normalized = normalize_file(path);
    if verbose {
        eprintln!(
            "junit-report: parsed {} cases={} warnings={}",
            path.display(),
            normalized.cases.len(),
            normalized.warnings.len()
        );
    }
    acc.cases.extend(normalized.cases);
    acc.warnings.extend(normalized.warnings);
}

pub fn exit_status_for(summary: &Summary, fail_exit_code: bool) -> ExitStatus {
    if fail_exit_code && summary.is_failing() {
        ExitStatus::TestsFailed
    } else {
        ExitStatus::Success
    }
}

/// Reads assets, parses inputs, aggregates, renders and writes the report.
pub fn generate_report(args: &ParsedArgs) -> Result<RunOutcome, ReportError> {
    let assets = read_assets(args)?;
    if args.verbose {
        eprintln!(
            "junit-report: assets css={} js={} template={}",
            args.css.display(),
            args.js.display(),
            args.template.display()
        );
    }

    let inputs = collect_inputs(&args.xml_files, args.verbose);
    let aggregated = aggregate(&inputs.cases);
    if args.verbose {
        let summary = &aggregated.summary;
        eprintln!(
            "junit-report: overall={} total={} passed={} skipped={} failed={} errors={} suites={}",
            summary.overall.as_str(),
            summary.total,
            summary.passed,
            summary.skipped,
            summary.failed,
            summary.errors,
            aggregated.suite_rows.len()
        );
        inputs
            .warnings
            .iter()
            .for_each(|warning| eprintln!("junit-report: warning: {warning}"));
    }

    let data = ReportData {
        summary: &aggregated.summary,
        suite_rows: &aggregated.suite_rows,
        cases: &inputs.cases,
        warnings: &inputs.warnings,
    };
    let meta = ReportMeta {
        tag: &args.tag,
        sha: &args.sha,
    };
    let html = render_report(&data, &assets.as_report_assets(), &meta)?;
    write_text_file(&args.out, &html)?;
    if args.verbose {
        eprintln!("junit-report: wrote {}", args.out.display());
    }

    let exit_status = exit_status_for(&aggregated.summary, args.fail_exit_code);
    Ok(RunOutcome {
        suite_count: aggregated.suite_rows.len(),
        summary: aggregated.summary,
        warnings: inputs.warnings,
        exit_status,
    })
}

pub fn run(args: &ParsedArgs) -> ExitStatus {
    let started_at = Instant::now();
    match generate_report(args) {
        Ok(outcome) => {
            maybe_write_run_trace(&TraceInput {
                args,
                summary: &outcome.summary,
                suite_count: outcome.suite_count,
                warnings: &outcome.warnings,
                started_at: Some(started_at),
                exit_code: outcome.exit_status.code(),
            });
            outcome.exit_status
        }
        Err(err) => {
            eprintln!("junit-report: ERROR: {err}");
            ExitStatus::Fatal
        }
    }
}
