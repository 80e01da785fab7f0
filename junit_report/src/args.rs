use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_TAG: &str = "v1.0.0";
pub const DEFAULT_SHA: &str = "unknown";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "junit-report",
    about = "Generate a single-file HTML report from one or more JUnit XML files.",
    long_about = None
)]
struct JunitReportCli {
    /// One or more JUnit XML files (e.g. frontend.xml backend.xml)
    #[arg(required = true, num_args = 1.., value_name = "XML_FILES")]
    xml_files: Vec<PathBuf>,

    /// Base stylesheet, inlined into the output
    #[arg(long)]
    css: PathBuf,

    /// Script inlined into the output
    #[arg(long)]
    js: PathBuf,

    /// Jinja-syntax HTML template
    #[arg(long)]
    template: PathBuf,

    /// Output HTML file path
    #[arg(short = 'o', long = "out")]
    out: PathBuf,

    /// Tag label shown in the header
    #[arg(long, default_value = DEFAULT_TAG)]
    tag: String,

    /// Commit SHA shown in the header
    #[arg(long, default_value = DEFAULT_SHA)]
    sha: String,

    /// Exit with code 1 when the overall status is FAIL
    #[arg(long)]
    fail_exit_code: bool,

    /// Print pipeline diagnostics to stderr
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub xml_files: Vec<PathBuf>,
    pub css: PathBuf,
    pub js: PathBuf,
    pub template: PathBuf,
    pub out: PathBuf,
    pub tag: String,
    pub sha: String,
    pub fail_exit_code: bool,
    pub verbose: bool,
}

fn into_parsed_args(cli: JunitReportCli) -> ParsedArgs {
    ParsedArgs {
        xml_files: cli.xml_files,
        css: cli.css,
        js: cli.js,
        template: cli.template,
        out: cli.out,
        tag: cli.tag,
        sha: cli.sha,
        fail_exit_code: cli.fail_exit_code,
        verbose: cli.verbose,
    }
}

/// Parses a full argv (program name first).
pub fn derive_args<I, T>(argv: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    JunitReportCli::try_parse_from(argv).map(into_parsed_args)
}
