mod lifecycle;
mod navigation;
mod settings_panel;
mod tasks;
mod toast;

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

use chrono::NaiveDate;

use self::tasks::{EventsResult, FolderResult};
use self::toast::ToastManager;
use crate::models::calendar_event::CalendarEvent;
use crate::models::settings::Settings;
use crate::services::api::SchedulerApi;
use crate::services::folder_browser::FolderBrowser;
use crate::services::settings::SettingsService;
use crate::ui_egui::dialogs::job_windows::JobWindow;
use crate::ui_egui::host::HostCommand;

pub struct SchedulerApp {
    settings: Settings,
    settings_service: SettingsService,
    api: Arc<dyn SchedulerApi>,
    /// First day of the week shown in the agenda
    week_start: NaiveDate,
    events: Vec<CalendarEvent>,
    fetching_events: bool,
    events_error: Option<String>,
    /// Set while a materialize request is in flight
    materializing: bool,
    folder_browser: FolderBrowser,
    job_windows: Vec<JobWindow>,
    show_settings: bool,
    toast_manager: ToastManager,
    host_tx: Sender<HostCommand>,
    host_rx: Receiver<HostCommand>,
    folder_tx: Sender<FolderResult>,
    folder_rx: Receiver<FolderResult>,
    events_tx: Sender<EventsResult>,
    events_rx: Receiver<EventsResult>,
}

impl eframe::App for SchedulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}
