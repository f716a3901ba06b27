//! Client side of the scheduler server API.
//!
//! [`SchedulerApi`] is the seam the UI controllers talk through; the
//! production implementation is [`HttpSchedulerApi`].

mod http;

pub use http::HttpSchedulerApi;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::calendar_event::{CalendarEvent, MaterializedJob, VirtualOccurrence};
use crate::models::folder::FolderListing;

/// Failure talking to the scheduler server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response; `message` is the server's `error` text when it sent one
    #[error("{message}")]
    Status { status: u16, message: String },
    /// 2xx response whose body could not be decoded
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Operations the desktop client needs from the scheduler server.
pub trait SchedulerApi: Send + Sync {
    /// Create (or fetch the existing) job for a recurring occurrence.
    ///
    /// Idempotent per `(parent_id, original_start)`: repeated calls return
    /// the same job with `created == false`.
    fn materialize_occurrence(
        &self,
        occurrence: &VirtualOccurrence,
    ) -> Result<MaterializedJob, ApiError>;

    /// List the sub-folders of `path`. An empty path asks the server for
    /// its default directory.
    fn browse_folders(&self, path: &str) -> Result<FolderListing, ApiError>;

    /// Calendar entries (jobs and virtual occurrences) between two dates,
    /// `end` exclusive.
    fn calendar_events(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CalendarEvent>, ApiError>;
}

/// Source of the CSRF token attached to state-changing requests.
pub trait CsrfTokenProvider: Send + Sync {
    fn csrf_token(&self) -> Option<String>;
}

/// A token fixed at startup, typically read from settings.
#[derive(Debug, Clone, Default)]
pub struct StaticCsrfToken(Option<String>);

impl StaticCsrfToken {
    pub fn new(token: Option<String>) -> Self {
        Self(token.filter(|t| !t.trim().is_empty()))
    }
}

impl CsrfTokenProvider for StaticCsrfToken {
    fn csrf_token(&self) -> Option<String> {
        self.0.clone()
    }
}
