//! File picker widget using rfd (rust file dialog).
//!
//! Opens a native dialog for staging a single file. Any file type goes;
//! the uploader does not care what it sends.

use std::path::PathBuf;

/// Native single-file picker.
pub struct FilePickerWidget {
    /// Dialog title
    title: String,
    /// Starting directory
    start_dir: Option<PathBuf>,
    /// Most recent pick, if any
    last_picked: Option<PathBuf>,
}

impl Default for FilePickerWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePickerWidget {
    pub fn new() -> Self {
        Self {
            title: "Select File".to_string(),
            start_dir: None,
            last_picked: None,
        }
    }

    /// Set the dialog title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the starting directory.
    pub fn with_start_dir(mut self, dir: PathBuf) -> Self {
        self.start_dir = Some(dir);
        self
    }

    /// Blocking file picker (opens the native dialog and waits).
    pub fn pick_file(&mut self) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().set_title(&self.title);
        if let Some(ref dir) = self.start_dir {
            dialog = dialog.set_directory(dir);
        }

        let picked = dialog.pick_file();
        self.last_picked = picked.clone();
        picked
    }

    /// Most recent pick without re-opening the dialog.
    pub fn last_picked(&self) -> Option<&PathBuf> {
        self.last_picked.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_picker_creation() {
        let picker = FilePickerWidget::new()
            .with_title("Select a file to upload")
            .with_start_dir(PathBuf::from("/tmp"));

        assert_eq!(picker.title, "Select a file to upload");
        assert_eq!(picker.start_dir, Some(PathBuf::from("/tmp")));
        assert!(picker.last_picked().is_none());
    }
}
