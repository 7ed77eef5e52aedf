//! Display helpers for the selected-file line.

use std::path::Path;

/// Human-readable size, e.g. "12.3 KB".
pub fn human_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let b = bytes as f64;
    if b >= GB {
        format!("{:.1} GB", b / GB)
    } else if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// Coarse file-kind label shown next to the selected file. Display only,
/// never used to accept or reject a file.
pub fn file_type_label(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" => "Image",
        "pdf" => "PDF",
        "txt" | "md" => "Text",
        "json" | "yaml" | "yml" | "toml" => "Config",
        "rs" | "py" | "js" | "ts" | "go" | "java" | "c" | "cpp" | "h" => "Code",
        "csv" | "xls" | "xlsx" => "Spreadsheet",
        "doc" | "docx" => "Document",
        "zip" | "tar" | "gz" | "7z" => "Archive",
        _ => "File",
    }
}
