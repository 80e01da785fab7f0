fn main() {
    let argv = std::env::args_os().collect::<Vec<_>>();
    let parsed = match junit_report::args::derive_args(argv) {
        Ok(parsed) => parsed,
        Err(err) => err.exit(),
    };
    if parsed.verbose {
        eprintln!(
            "junit-report {}: inputs={} out={} fail_exit_code={}",
            junit_report::core_version(),
            parsed.xml_files.len(),
            parsed.out.display(),
            parsed.fail_exit_code
        );
    }
    let status = junit_report::pipeline::run(&parsed);
    std::process::exit(status.code());
}
