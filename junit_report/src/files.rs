use std::path::Path;

use crate::error::ReportError;

pub fn read_text_asset(path: &Path, label: &'static str) -> Result<String, ReportError> {
    std::fs::read_to_string(path).map_err(|source| ReportError::AssetRead {
        label,
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `contents`, creating missing parent directories first.
pub fn write_text_file(path: &Path, contents: &str) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, contents).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
