pub mod events;

pub mod settings {
    use serde::{Deserialize, Serialize};

    /// Where uploads go and what the multipart field is called.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct UploadSettings {
        pub endpoint: String,
        pub field_name: String,
    }

    impl Default for UploadSettings {
        fn default() -> Self {
            Self {
                endpoint: "http://localhost:8000/upload".into(),
                field_name: "file".into(),
            }
        }
    }
}

pub mod upload {
    use serde::{Deserialize, Serialize};
    use std::path::PathBuf;

    /// Status line shown after a 2xx response.
    pub const SUCCESS_MESSAGE: &str = "✅ File uploaded successfully!";
    /// Status line shown after a non-2xx response.
    pub const FAILURE_MESSAGE: &str = "❌ Upload failed.";
    /// Status line shown when the request never completed.
    pub const ERROR_MESSAGE: &str = "❌ Upload error.";

    /// The file currently staged for upload.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SelectedFile {
        pub path: PathBuf,
        pub name: String,
    }

    impl SelectedFile {
        pub fn from_path(path: impl Into<PathBuf>) -> Self {
            let path = path.into();
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "file".to_string());
            Self { path, name }
        }
    }

    /// How an upload attempt settled.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub enum UploadOutcome {
        /// Server answered with a 2xx status.
        Accepted,
        /// Server answered with anything else. The code is kept for the
        /// diagnostic log; the user only sees the generic failure line.
        Rejected { status: u16 },
        /// The request never completed (connect error, broken file read, ...).
        Failed { error: String },
    }

    impl UploadOutcome {
        /// The fixed status line for this outcome.
        pub fn status_message(&self) -> &'static str {
            match self {
                UploadOutcome::Accepted => SUCCESS_MESSAGE,
                UploadOutcome::Rejected { .. } => FAILURE_MESSAGE,
                UploadOutcome::Failed { .. } => ERROR_MESSAGE,
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_selected_file_name_from_path() {
            let file = SelectedFile::from_path("/tmp/reports/report.pdf");
            assert_eq!(file.name, "report.pdf");
            assert_eq!(file.path, PathBuf::from("/tmp/reports/report.pdf"));
        }

        #[test]
        fn test_selected_file_name_fallback() {
            // A path with no final component still gets a display name
            let file = SelectedFile::from_path("/");
            assert_eq!(file.name, "file");
        }

        #[test]
        fn test_status_messages_per_outcome() {
            assert_eq!(UploadOutcome::Accepted.status_message(), SUCCESS_MESSAGE);
            assert_eq!(
                UploadOutcome::Rejected { status: 500 }.status_message(),
                FAILURE_MESSAGE
            );
            assert_eq!(
                UploadOutcome::Failed {
                    error: "connection refused".into()
                }
                .status_message(),
                ERROR_MESSAGE
            );
        }
    }
}
