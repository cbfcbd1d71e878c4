use crate::error::{Result, UploadError};
use crate::upload::types::SelectedFile;
use std::path::Path;

pub const ALLOWED_EXTENSIONS: [&str; 3] = [".xls", ".xlsx", ".csv"];

/// Dot-prefixed, lower-cased text after the last `.`; a name without any
/// `.` yields the whole name (`"statement"` → `".statement"`).
pub fn derive_extension(file_name: &str) -> String {
    let last = file_name.rsplit('.').next().unwrap_or_default();
    format!(".{}", last.to_lowercase())
}

pub fn is_allowed_extension(extension: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&extension)
}

pub fn dialog_extensions() -> Vec<&'static str> {
    ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| ext.trim_start_matches('.'))
        .collect()
}

pub fn select_file(path: &Path) -> Result<SelectedFile> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let extension = derive_extension(&name);

    if !is_allowed_extension(&extension) {
        return Err(UploadError::InvalidFileType { extension });
    }

    Ok(SelectedFile {
        path: path.to_path_buf(),
        name,
        extension,
    })
}

pub fn mime_type(extension: &str) -> &'static str {
    match extension {
        ".csv" => "text/csv",
        ".xls" => "application/vnd.ms-excel",
        ".xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        _ => "application/octet-stream",
    }
}
