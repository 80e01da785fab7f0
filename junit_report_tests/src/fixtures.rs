use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub fn bundled_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("junit_report_tests should be nested under workspace root")
        .join("junit_report")
        .join("assets")
}

pub fn bundled_asset(name: &str) -> PathBuf {
    bundled_assets_dir().join(name)
}

pub fn read_bundled_asset(name: &str) -> String {
    let path = bundled_asset(name);
    std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed reading {path:?}: {err}"))
}

pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

/// `<testcase>` lines, `count` of them, all passing.
pub fn passing_cases(prefix: &str, count: usize) -> String {
    (0..count)
        .map(|i| {
            format!(
                "    <testcase classname=\"{prefix}.Class\" name=\"{prefix}_{i}\" time=\"0.{i}\"/>\n"
            )
        })
        .collect()
}

pub fn single_suite_xml(name: &str, body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testsuite name=\"{name}\">\n{body}</testsuite>\n"
    )
}

/// Scratch directory holding XML inputs and the rendered report.
pub struct ReportWorkspace {
    dir: TempDir,
}

impl Default for ReportWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn xml(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join("results").join(name);
        write_file(&path, contents);
        path
    }

    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join("results").join(name)
    }

    pub fn out_path(&self) -> PathBuf {
        self.dir.path().join("site").join("report").join("index.html")
    }

    pub fn read_report(&self) -> String {
        std::fs::read_to_string(self.out_path()).expect("report written")
    }

    /// Full argv (program name first) using the bundled assets.
    pub fn argv(&self, xml_files: &[PathBuf], extra: &[&str]) -> Vec<String> {
        let mut argv = vec!["junit-report".to_string()];
        argv.extend(xml_files.iter().map(|p| p.to_string_lossy().to_string()));
        for (flag, asset) in [
            ("--css", "index.css"),
            ("--js", "report.js"),
            ("--template", "report_template.html.j2"),
        ] {
            argv.push(flag.to_string());
            argv.push(bundled_asset(asset).to_string_lossy().to_string());
        }
        argv.push("-o".to_string());
        argv.push(self.out_path().to_string_lossy().to_string());
        argv.extend(extra.iter().map(|s| s.to_string()));
        argv
    }
}
