//! Settings window: server connection and the license scan path picker.

use super::SchedulerApp;
use crate::ui_egui::dialogs::folder_browser_dialog::{render_folder_browser, FolderBrowserAction};

impl SchedulerApp {
    pub(super) fn render_settings_window(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let mut open = true;
        let mut save_clicked = false;
        let mut browse_clicked = false;

        egui::Window::new("⚙ Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(440.0)
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Server URL:");
                        ui.text_edit_singleline(&mut self.settings.server_url);
                        ui.end_row();

                        ui.label("CSRF token:");
                        let mut token = self.settings.csrf_token.clone().unwrap_or_default();
                        if ui
                            .add(egui::TextEdit::singleline(&mut token).password(true))
                            .changed()
                        {
                            self.settings.csrf_token =
                                (!token.trim().is_empty()).then_some(token);
                        }
                        ui.end_row();

                        ui.label("Request timeout (s):");
                        ui.add(
                            egui::DragValue::new(&mut self.settings.request_timeout_secs)
                                .range(1..=300),
                        );
                        ui.end_row();

                        ui.label("Week starts Monday:");
                        ui.checkbox(&mut self.settings.week_starts_monday, "");
                        ui.end_row();

                        ui.label("License scan path:");
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.settings.license_scan_path)
                                    .desired_width(220.0)
                                    .hint_text("/path/to/scans"),
                            );
                            if ui.button("Select path...").clicked() {
                                browse_clicked = true;
                            }
                        });
                        ui.end_row();
                    });

                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new("Server changes take effect after a restart.")
                        .small()
                        .weak(),
                );
                ui.separator();

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save").clicked() {
                        save_clicked = true;
                    }
                });
            });

        if browse_clicked {
            let load = self.folder_browser.open();
            self.start_folder_load(load);
        }

        if save_clicked {
            self.save_settings();
        }

        if !open {
            self.show_settings = false;
        }
    }

    pub(super) fn handle_folder_browser(&mut self, ctx: &egui::Context) {
        match render_folder_browser(ctx, &mut self.folder_browser) {
            FolderBrowserAction::None => {}
            FolderBrowserAction::Load(load) => self.start_folder_load(load),
            FolderBrowserAction::Select => {
                if self
                    .folder_browser
                    .select_current_folder(&mut self.settings.license_scan_path)
                    .is_some()
                {
                    self.save_settings();
                }
            }
            FolderBrowserAction::Close => self.folder_browser.close_modal(),
        }
    }

    fn save_settings(&mut self) {
        match self.settings_service.update(&self.settings) {
            Ok(()) => self.toast_manager.success("Settings saved"),
            Err(err) => {
                log::error!("Failed to save settings: {:#}", err);
                self.toast_manager.error(format!("Could not save settings: {}", err));
            }
        }
    }
}
