//! Bridge between worker threads and the UI thread.
//!
//! The materializer runs off the UI thread; its collaborators are
//! implemented here by forwarding [`HostCommand`]s over a channel that the
//! app drains once per frame.

use std::sync::mpsc::Sender;

use crate::models::calendar_event::CalendarEvent;
use crate::services::materializer::{
    CalendarRefresher, JobOpener, LoadingIndicator, UserNotifier,
};

#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    SetLoading(bool),
    OpenJobEditor { job_id: i64, event: CalendarEvent },
    OpenCallReminder { job_id: i64, event: CalendarEvent },
    RefetchEvents,
    ShowError(String),
}

#[derive(Clone)]
pub struct HostBridge {
    tx: Sender<HostCommand>,
}

impl HostBridge {
    pub fn new(tx: Sender<HostCommand>) -> Self {
        Self { tx }
    }

    fn send(&self, command: HostCommand) {
        if self.tx.send(command).is_err() {
            log::debug!("UI thread is gone; dropping host command");
        }
    }
}

impl JobOpener for HostBridge {
    fn open_job_editor(&self, job_id: i64, event: &CalendarEvent) {
        self.send(HostCommand::OpenJobEditor {
            job_id,
            event: event.clone(),
        });
    }

    fn open_call_reminder(&self, job_id: i64, event: &CalendarEvent) {
        self.send(HostCommand::OpenCallReminder {
            job_id,
            event: event.clone(),
        });
    }
}

impl CalendarRefresher for HostBridge {
    fn refetch_events(&self) {
        self.send(HostCommand::RefetchEvents);
    }
}

impl UserNotifier for HostBridge {
    fn show_error(&self, message: &str) {
        self.send(HostCommand::ShowError(message.to_string()));
    }
}

impl LoadingIndicator for HostBridge {
    fn set_loading(&self, loading: bool) {
        self.send(HostCommand::SetLoading(loading));
    }
}
