use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Incident priority as an identifier (e.g. `P1`) plus display label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Priority {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Status {
    pub id: String,
    pub label: String,
}

/// A timestamped status change or note attached to an incident.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Update {
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub status: Status,
    pub description: String,
}

/// Incident snapshot handed over by the incident tracker.
///
/// Notes:
/// - `updates` are kept in insertion order, which is expected to be chronological.
///   Ordering problems surface as validation warnings and are never re-sorted.
/// - Timestamps carry the offset the tracker observed them in; the formatter treats that
///   offset as the "local" offset when converting to a display timezone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Incident {
    pub id: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub video_link: String,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(default)]
    pub updates: Vec<Update>,
}

impl Incident {
    /// The last `limit` updates, oldest first, plus how many earlier ones were left out.
    pub fn recent_updates(&self, limit: usize) -> (&[Update], usize) {
        let hidden = self.updates.len().saturating_sub(limit);
        (&self.updates[hidden..], hidden)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationWarning {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl ValidationWarning {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
