// Calendar event module
// Render data for jobs and virtual recurring occurrences shown on the calendar

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single entry on the calendar, either a persisted job or a virtual
/// occurrence of a recurring series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<FixedOffset>,
    pub end: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, rename = "extendedProps")]
    pub metadata: EventMetadata,
}

/// Extra properties attached to a calendar event by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventMetadata {
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub original_start: Option<String>,
    #[serde(default)]
    pub job_id: Option<i64>,
    #[serde(default)]
    pub job_name: Option<String>,
}

impl CalendarEvent {
    /// Identifiers of the recurring occurrence, if both are present.
    ///
    /// An empty `original_start` counts as missing.
    pub fn virtual_occurrence(&self) -> Option<VirtualOccurrence> {
        let parent_id = self.metadata.parent_id?;
        let original_start = self
            .metadata
            .original_start
            .as_deref()
            .filter(|s| !s.trim().is_empty())?;

        Some(VirtualOccurrence {
            parent_id,
            original_start: original_start.to_string(),
        })
    }

    pub fn is_virtual(&self) -> bool {
        self.metadata.is_virtual
    }

    /// Name to show for this event, preferring the job name hint.
    pub fn display_name(&self) -> &str {
        self.metadata
            .job_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.title)
    }

    /// Copy of this event pointing at a persisted job instead of the
    /// virtual occurrence it was rendered from.
    pub fn with_materialized_job(&self, job_id: i64) -> Self {
        let mut event = self.clone();
        event.id = job_id.to_string();
        event.metadata.job_id = Some(job_id);
        event.metadata.is_virtual = false;
        event.metadata.parent_id = None;
        event.metadata.original_start = None;
        event
    }
}

/// A not-yet-persisted instance of a recurring series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VirtualOccurrence {
    pub parent_id: i64,
    pub original_start: String,
}

/// Server answer to a materialize request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterializedJob {
    pub job_id: i64,
    pub created: bool,
}
