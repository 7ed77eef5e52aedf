//! Event records for settled upload attempts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::upload::UploadOutcome;

/// One settled upload attempt. Kept in memory only; the most recent entry
/// feeds the "last attempt" line in the UI and the diagnostic log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadEvent {
    /// Unique entry ID
    pub id: Uuid,
    /// When the attempt settled
    pub timestamp: DateTime<Utc>,
    /// Display name of the file that was sent
    pub file_name: String,
    /// How the attempt ended
    pub outcome: UploadOutcome,
}

impl UploadEvent {
    /// Record a settled attempt.
    pub fn settled(file_name: impl Into<String>, outcome: UploadOutcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            file_name: file_name.into(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settled_event_carries_outcome() {
        let event = UploadEvent::settled("report.pdf", UploadOutcome::Accepted);
        assert_eq!(event.file_name, "report.pdf");
        assert_eq!(event.outcome, UploadOutcome::Accepted);
    }

    #[test]
    fn test_events_get_distinct_ids() {
        let a = UploadEvent::settled("a.txt", UploadOutcome::Accepted);
        let b = UploadEvent::settled("a.txt", UploadOutcome::Accepted);
        assert_ne!(a.id, b.id);
    }
}
