//! Upload client for the backend endpoint.
//!
//! One multipart POST per call, fire and forget: the response body is never
//! parsed, only the status code matters. Retries, chunking and progress
//! reporting are deliberately absent.

use anyhow::{Context, Result};
use std::path::Path;

use shared::settings::UploadSettings;
use shared::upload::UploadOutcome;

/// Client for sending one file to the configured endpoint.
pub struct UploadClient {
    settings: UploadSettings,
    client: reqwest::Client,
}

impl UploadClient {
    pub fn new(settings: UploadSettings) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }

    pub fn settings(&self) -> &UploadSettings {
        &self.settings
    }

    /// POST the file as a single multipart part under the configured field
    /// name. A reachable server always yields `Ok`: 2xx maps to `Accepted`,
    /// everything else to `Rejected`. `Err` means the request never
    /// completed (unreadable file, connect failure, ...).
    pub async fn upload_file(&self, path: &Path) -> Result<UploadOutcome> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "file".to_string());

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("could not read {}", path.display()))?;

        tracing::debug!(
            "uploading {} ({} bytes) to {}",
            file_name,
            bytes.len(),
            self.settings.endpoint
        );

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form =
            reqwest::multipart::Form::new().part(self.settings.field_name.clone(), part);

        let response = self
            .client
            .post(&self.settings.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(UploadOutcome::Accepted)
        } else {
            tracing::debug!("server rejected upload with status {}", status);
            Ok(UploadOutcome::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
