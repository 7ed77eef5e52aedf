//! State management for the FileDrop app
//!
//! Two cells of UI state (the staged file and the status line) plus the
//! plumbing that runs uploads off the UI thread and polls their results
//! back in, one frame at a time.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::widgets::{DropZone, FilePickerWidget};
use services::uploader::UploadClient;
use shared::events::UploadEvent;
use shared::settings::UploadSettings;
use shared::upload::{SelectedFile, UploadOutcome};
use std::path::PathBuf;

/// What a finished upload thread sends back to the UI.
pub struct UploadResult {
    pub file_name: String,
    pub outcome: UploadOutcome,
}

pub struct AppState {
    pub settings: UploadSettings,
    /// The staged file; replaced by the next drop or pick, never cleared.
    pub selected: Option<SelectedFile>,
    /// Status line; set when an attempt settles, never auto-cleared.
    pub status: Option<String>,
    pub drop_zone: DropZone,
    picker: FilePickerWidget,
    /// Settled attempts, newest last.
    history: Vec<UploadEvent>,
    /// All upload threads share this sender, so results from overlapping
    /// attempts land on the same receiver in whatever order they settle.
    result_tx: Sender<UploadResult>,
    result_rx: Receiver<UploadResult>,
    in_flight: usize,
}

impl Default for AppState {
    fn default() -> Self {
        let (result_tx, result_rx) = channel();
        Self {
            settings: UploadSettings::default(),
            selected: None,
            status: None,
            drop_zone: DropZone::new(),
            picker: FilePickerWidget::new().with_title("Select a file to upload"),
            history: Vec::new(),
            result_tx,
            result_rx,
            in_flight: 0,
        }
    }
}

impl AppState {
    /// Stage a file for upload, replacing any previous selection.
    pub fn select_file(&mut self, path: PathBuf) {
        let file = SelectedFile::from_path(path);
        tracing::debug!("selected {}", file.name);
        self.selected = Some(file);
    }

    /// Open the native picker and stage the result, if any.
    pub fn browse(&mut self) {
        if let Some(path) = self.picker.pick_file() {
            self.select_file(path);
        }
    }

    /// Fire an upload of the staged file on a background thread. No-op when
    /// nothing is staged. Nothing stops a second call while the first is
    /// still in flight.
    pub fn start_upload(&mut self) {
        let Some(file) = self.selected.clone() else {
            return;
        };
        self.in_flight += 1;
        let settings = self.settings.clone();
        let tx = self.result_tx.clone();
        std::thread::spawn(move || run_upload(file, settings, tx));
    }

    /// Check for settled uploads (called each frame). Each result updates
    /// the status line and appends an event record.
    pub fn poll_upload_result(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.status = Some(result.outcome.status_message().to_string());

            let event = UploadEvent::settled(result.file_name, result.outcome);
            if let Ok(json) = serde_json::to_string(&event) {
                tracing::debug!("upload settled: {}", json);
            }
            self.history.push(event);
        }
    }

    pub fn uploads_in_flight(&self) -> bool {
        self.in_flight > 0
    }

    pub fn last_event(&self) -> Option<&UploadEvent> {
        self.history.last()
    }
}

/// Run one upload in a background thread (non-blocking for the UI). A
/// request that never completes is logged and reported as `Failed`; the
/// result always comes back over the channel.
pub fn run_upload(file: SelectedFile, settings: UploadSettings, tx: Sender<UploadResult>) {
    let outcome = match tokio::runtime::Runtime::new() {
        Ok(rt) => {
            let client = UploadClient::new(settings);
            match rt.block_on(client.upload_file(&file.path)) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("upload of {} did not complete: {:#}", file.name, e);
                    UploadOutcome::Failed {
                        error: format!("{:#}", e),
                    }
                }
            }
        }
        Err(e) => {
            tracing::error!("failed to start async runtime: {}", e);
            UploadOutcome::Failed {
                error: e.to_string(),
            }
        }
    };

    let _ = tx.send(UploadResult {
        file_name: file.name,
        outcome,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::upload::{ERROR_MESSAGE, FAILURE_MESSAGE, SUCCESS_MESSAGE};
    use std::time::Duration;

    /// Poll until an upload settles or the deadline passes.
    fn poll_until_settled(state: &mut AppState) {
        for _ in 0..200 {
            state.poll_upload_result();
            if state.last_event().is_some() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("upload never settled");
    }

    #[test]
    fn test_selection_replaces_previous_file() {
        let mut state = AppState::default();
        state.select_file(PathBuf::from("/tmp/first.txt"));
        state.select_file(PathBuf::from("/tmp/second.txt"));

        assert_eq!(state.selected.as_ref().unwrap().name, "second.txt");
    }

    #[test]
    fn test_upload_without_selection_is_a_no_op() {
        let mut state = AppState::default();
        state.status = Some(SUCCESS_MESSAGE.to_string());

        state.start_upload();
        state.poll_upload_result();

        assert!(!state.uploads_in_flight());
        assert!(state.result_rx.try_recv().is_err());
        assert_eq!(state.status.as_deref(), Some(SUCCESS_MESSAGE));
        assert!(state.last_event().is_none());
    }

    #[test]
    fn test_poll_applies_settled_outcome() {
        let mut state = AppState::default();
        state
            .result_tx
            .clone()
            .send(UploadResult {
                file_name: "report.pdf".into(),
                outcome: UploadOutcome::Rejected { status: 500 },
            })
            .unwrap();

        state.poll_upload_result();

        assert_eq!(state.status.as_deref(), Some(FAILURE_MESSAGE));
        let event = state.last_event().unwrap();
        assert_eq!(event.file_name, "report.pdf");
        assert_eq!(event.outcome, UploadOutcome::Rejected { status: 500 });
    }

    #[test]
    fn test_failed_upload_sets_error_status() {
        let mut state = AppState::default();
        // an unreadable file makes the attempt fail without any network
        state.select_file(PathBuf::from("/definitely/not/here.bin"));
        state.start_upload();
        assert!(state.uploads_in_flight());

        poll_until_settled(&mut state);

        assert_eq!(state.status.as_deref(), Some(ERROR_MESSAGE));
        assert!(!state.uploads_in_flight());
        // the selection survives the attempt
        assert!(state.selected.is_some());
    }

    #[test]
    fn test_results_share_one_channel() {
        let mut state = AppState::default();
        let tx = state.result_tx.clone();
        for outcome in [
            UploadOutcome::Accepted,
            UploadOutcome::Rejected { status: 404 },
        ] {
            tx.send(UploadResult {
                file_name: "a.txt".into(),
                outcome,
            })
            .unwrap();
        }

        state.poll_upload_result();

        // both settled in one poll; the later result owns the status line
        assert_eq!(state.status.as_deref(), Some(FAILURE_MESSAGE));
        assert_eq!(state.history.len(), 2);
    }
}
