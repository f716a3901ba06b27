//! Background requests and the per-frame polling that applies their results.
//!
//! Requests are not cancelled or sequenced: whichever response arrives last
//! is the one that sticks.

use std::thread;

use chrono::{Duration, NaiveDate};

use super::SchedulerApp;
use crate::models::calendar_event::CalendarEvent;
use crate::models::folder::FolderListing;
use crate::services::api::ApiError;
use crate::services::folder_browser::{BrowserState, FolderLoad};
use crate::services::materializer::{OccurrenceMaterializer, OpenIntent};
use crate::ui_egui::dialogs::job_windows::{open_job_window, JobWindow};
use crate::ui_egui::host::{HostBridge, HostCommand};

pub(super) type FolderResult = (FolderLoad, Result<FolderListing, ApiError>);
pub(super) type EventsResult = (NaiveDate, Result<Vec<CalendarEvent>, ApiError>);

impl SchedulerApp {
    pub(super) fn request_events(&mut self) {
        self.fetching_events = true;

        let api = self.api.clone();
        let tx = self.events_tx.clone();
        let start = self.week_start;
        let end = start + Duration::days(7);

        thread::spawn(move || {
            let result = api.calendar_events(start, end);
            let _ = tx.send((start, result));
        });
    }

    pub(super) fn start_folder_load(&mut self, load: FolderLoad) {
        let api = self.api.clone();
        let tx = self.folder_tx.clone();

        thread::spawn(move || {
            let result = api.browse_folders(&load.path);
            let _ = tx.send((load, result));
        });
    }

    pub(super) fn start_materialize(&mut self, event: CalendarEvent, intent: OpenIntent) {
        self.materializing = true;

        let api = self.api.clone();
        let bridge = HostBridge::new(self.host_tx.clone());

        thread::spawn(move || {
            let materializer =
                OccurrenceMaterializer::new(api.as_ref(), &bridge, &bridge, &bridge, &bridge);
            // Failures are already reported through the bridge
            let _ = materializer.materialize_and_open(&event, intent);
        });
    }

    /// Apply every result that has arrived since the last frame.
    pub(super) fn poll_background(&mut self) {
        let commands: Vec<HostCommand> = self.host_rx.try_iter().collect();
        for command in commands {
            self.apply_host_command(command);
        }

        let folder_results: Vec<FolderResult> = self.folder_rx.try_iter().collect();
        for (load, result) in folder_results {
            self.folder_browser.finish_load(load, result);
        }

        let event_results: Vec<EventsResult> = self.events_rx.try_iter().collect();
        for (week_start, result) in event_results {
            self.apply_events(week_start, result);
        }
    }

    pub(super) fn has_pending_work(&self) -> bool {
        self.fetching_events
            || self.materializing
            || *self.folder_browser.state() == BrowserState::Loading
    }

    fn apply_events(&mut self, week_start: NaiveDate, result: Result<Vec<CalendarEvent>, ApiError>) {
        if week_start != self.week_start {
            log::debug!("Ignoring calendar events for stale week {}", week_start);
            return;
        }

        self.fetching_events = false;
        match result {
            Ok(events) => {
                log::debug!("Loaded {} calendar events for week {}", events.len(), week_start);
                self.events = events;
                self.events_error = None;
            }
            Err(err) => {
                log::error!("Failed to load calendar events: {}", err);
                self.events_error = Some(err.to_string());
            }
        }
    }

    fn apply_host_command(&mut self, command: HostCommand) {
        match command {
            HostCommand::SetLoading(loading) => self.materializing = loading,
            HostCommand::OpenJobEditor { job_id, event } => {
                open_job_window(&mut self.job_windows, JobWindow::editor(job_id, event));
            }
            HostCommand::OpenCallReminder { job_id, event } => {
                open_job_window(&mut self.job_windows, JobWindow::call_reminder(job_id, event));
            }
            HostCommand::RefetchEvents => self.request_events(),
            HostCommand::ShowError(message) => self.toast_manager.error(message),
        }
    }

    /// Open a calendar entry, materializing it first when it is virtual.
    pub(super) fn open_event(&mut self, event: CalendarEvent, intent: OpenIntent) {
        if event.is_virtual() {
            self.start_materialize(event, intent);
            return;
        }

        match (event.metadata.job_id, intent) {
            (Some(job_id), OpenIntent::JobEditor) => {
                open_job_window(&mut self.job_windows, JobWindow::editor(job_id, event));
            }
            (Some(job_id), OpenIntent::CallReminder) => {
                open_job_window(&mut self.job_windows, JobWindow::call_reminder(job_id, event));
            }
            (None, _) => {
                log::warn!("Calendar entry '{}' has no job id", event.id);
                self.toast_manager.warning("This calendar entry is not linked to a job");
            }
        }
    }
}
