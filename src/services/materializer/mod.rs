//! Turns virtual recurring occurrences into persisted jobs.
//!
//! A click on a virtual occurrence asks the server to materialize it, then
//! opens either the job editor or the call reminder panel for the resulting
//! job. Everything the flow touches outside itself is injected so the UI
//! (or a test) decides what "open", "refresh" and "show error" mean.

use thiserror::Error;

use crate::models::calendar_event::{CalendarEvent, MaterializedJob};
use crate::services::api::{ApiError, SchedulerApi};

/// Message shown to the user for every materialize failure.
pub const MATERIALIZE_ERROR_MESSAGE: &str = "Could not open this job. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaterializeError {
    #[error("Event is missing parent_id or original_start")]
    MissingIdentifiers,
    #[error("Materialize request failed: {0}")]
    RequestFailed(ApiError),
    #[error("Materialize response was malformed: {0}")]
    MalformedResponse(String),
}

impl From<ApiError> for MaterializeError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::MalformedResponse(detail) => MaterializeError::MalformedResponse(detail),
            other => MaterializeError::RequestFailed(other),
        }
    }
}

/// Opens the panels a materialized job can be shown in.
/// `event` is the clicked event with the job id substituted in.
pub trait JobOpener {
    fn open_job_editor(&self, job_id: i64, event: &CalendarEvent);
    fn open_call_reminder(&self, job_id: i64, event: &CalendarEvent);
}

pub trait CalendarRefresher {
    fn refetch_events(&self);
}

pub trait UserNotifier {
    fn show_error(&self, message: &str);
}

pub trait LoadingIndicator {
    fn set_loading(&self, loading: bool);
}

/// Holds the loading indicator on for as long as it lives.
pub struct LoadingGuard<'a> {
    indicator: &'a dyn LoadingIndicator,
}

impl<'a> LoadingGuard<'a> {
    pub fn acquire(indicator: &'a dyn LoadingIndicator) -> Self {
        indicator.set_loading(true);
        Self { indicator }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.indicator.set_loading(false);
    }
}

/// What to open once the occurrence is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenIntent {
    JobEditor,
    CallReminder,
}

pub struct OccurrenceMaterializer<'a> {
    api: &'a dyn SchedulerApi,
    opener: &'a dyn JobOpener,
    calendar: &'a dyn CalendarRefresher,
    notifier: &'a dyn UserNotifier,
    loading: &'a dyn LoadingIndicator,
}

impl<'a> OccurrenceMaterializer<'a> {
    pub fn new(
        api: &'a dyn SchedulerApi,
        opener: &'a dyn JobOpener,
        calendar: &'a dyn CalendarRefresher,
        notifier: &'a dyn UserNotifier,
        loading: &'a dyn LoadingIndicator,
    ) -> Self {
        Self {
            api,
            opener,
            calendar,
            notifier,
            loading,
        }
    }

    pub fn materialize_and_open_job(
        &self,
        event: &CalendarEvent,
    ) -> Result<MaterializedJob, MaterializeError> {
        self.materialize_and_open(event, OpenIntent::JobEditor)
    }

    pub fn materialize_and_show_call_reminder(
        &self,
        event: &CalendarEvent,
    ) -> Result<MaterializedJob, MaterializeError> {
        self.materialize_and_open(event, OpenIntent::CallReminder)
    }

    /// Materialize `event` and open it according to `intent`.
    ///
    /// Errors have already been reported through the notifier when this
    /// returns `Err`; the value is for callers that want to react further.
    pub fn materialize_and_open(
        &self,
        event: &CalendarEvent,
        intent: OpenIntent,
    ) -> Result<MaterializedJob, MaterializeError> {
        let _loading = LoadingGuard::acquire(self.loading);

        let result = self.run(event, intent);
        if let Err(err) = &result {
            match err {
                MaterializeError::MissingIdentifiers => {
                    log::warn!("Cannot materialize event '{}': {}", event.id, err)
                }
                _ => log::error!("Failed to materialize event '{}': {}", event.id, err),
            }
            self.notifier.show_error(MATERIALIZE_ERROR_MESSAGE);
        }
        result
    }

    fn run(
        &self,
        event: &CalendarEvent,
        intent: OpenIntent,
    ) -> Result<MaterializedJob, MaterializeError> {
        let occurrence = event
            .virtual_occurrence()
            .ok_or(MaterializeError::MissingIdentifiers)?;

        let job = self.api.materialize_occurrence(&occurrence)?;
        log::info!(
            "Occurrence of series {} at {} is job {} (created: {})",
            occurrence.parent_id,
            occurrence.original_start,
            job.job_id,
            job.created
        );

        let materialized = event.with_materialized_job(job.job_id);
        match intent {
            OpenIntent::JobEditor => self.opener.open_job_editor(job.job_id, &materialized),
            OpenIntent::CallReminder => self.opener.open_call_reminder(job.job_id, &materialized),
        }

        if job.created {
            self.calendar.refetch_events();
        }

        Ok(job)
    }
}
