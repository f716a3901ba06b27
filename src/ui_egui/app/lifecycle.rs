use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;

use super::toast::ToastManager;
use super::SchedulerApp;
use crate::models::settings::Settings;
use crate::services::api::SchedulerApi;
use crate::services::folder_browser::FolderBrowser;
use crate::services::materializer::OpenIntent;
use crate::services::settings::SettingsService;
use crate::ui_egui::dialogs::job_windows::render_job_windows;
use crate::ui_egui::views::agenda_view::{AgendaAction, AgendaView};
use crate::utils::date::week_start;

impl SchedulerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        settings: Settings,
        settings_service: SettingsService,
        api: Arc<dyn SchedulerApi>,
    ) -> Self {
        let (host_tx, host_rx) = mpsc::channel();
        let (folder_tx, folder_rx) = mpsc::channel();
        let (events_tx, events_rx) = mpsc::channel();

        let first_day = if settings.week_starts_monday { 1 } else { 0 };
        let current_week = week_start(Local::now().date_naive(), first_day);

        let mut app = Self {
            settings,
            settings_service,
            api,
            week_start: current_week,
            events: Vec::new(),
            fetching_events: false,
            events_error: None,
            materializing: false,
            folder_browser: FolderBrowser::new(),
            job_windows: Vec::new(),
            show_settings: false,
            toast_manager: ToastManager::new(),
            host_tx,
            host_rx,
            folder_tx,
            folder_rx,
            events_tx,
            events_rx,
        };

        app.request_events();
        app
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context) {
        self.poll_background();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("⚙ Settings").clicked() {
                        self.show_settings = true;
                        ui.close_menu();
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                AgendaView {
                    week_start: self.week_start,
                    events: &self.events,
                    busy: self.materializing,
                    fetching: self.fetching_events,
                    fetch_error: self.events_error.as_deref(),
                }
                .show(ui)
            })
            .inner;

        match action {
            AgendaAction::None => {}
            AgendaAction::PreviousWeek => self.navigate_previous(),
            AgendaAction::NextWeek => self.navigate_next(),
            AgendaAction::Today => self.jump_to_today(),
            AgendaAction::Refresh => self.request_events(),
            AgendaAction::OpenJob(event) => self.open_event(event, OpenIntent::JobEditor),
            AgendaAction::CallReminder(event) => self.open_event(event, OpenIntent::CallReminder),
        }

        self.render_settings_window(ctx);
        self.handle_folder_browser(ctx);
        render_job_windows(ctx, &mut self.job_windows);

        self.toast_manager.render(ctx);

        // Results arrive on channels, so keep polling while anything is in flight
        if self.has_pending_work() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
