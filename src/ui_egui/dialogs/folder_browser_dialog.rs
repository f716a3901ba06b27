//! Modal window for picking a server-side folder

use egui::{Color32, Margin, RichText, Stroke};

use crate::services::folder_browser::{BrowserState, FolderBrowser, FolderLoad};

/// Action result from the folder browser window
#[derive(Debug, PartialEq, Eq)]
pub enum FolderBrowserAction {
    None,
    /// A listing has to be fetched
    Load(FolderLoad),
    /// Commit the current folder
    Select,
    Close,
}

/// Background and text colors for the inline error panel
fn error_colors(dark: bool) -> (Color32, Color32) {
    if dark {
        (Color32::from_rgb(80, 30, 30), Color32::from_rgb(255, 120, 120))
    } else {
        (Color32::from_rgb(255, 220, 220), Color32::from_rgb(180, 40, 40))
    }
}

/// Render the folder browser; does nothing while it is closed
pub fn render_folder_browser(
    ctx: &egui::Context,
    browser: &mut FolderBrowser,
) -> FolderBrowserAction {
    if !browser.is_open() {
        return FolderBrowserAction::None;
    }

    let mut action = FolderBrowserAction::None;
    let mut window_open = true;

    egui::Window::new("📂 Select Folder")
        .open(&mut window_open)
        .collapsible(false)
        .resizable(true)
        .default_width(480.0)
        .default_height(420.0)
        .min_width(360.0)
        .min_height(260.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // Navigation row
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(browser.can_go_back(), egui::Button::new("⬅"))
                    .on_hover_text("Back")
                    .clicked()
                {
                    if let Some(load) = browser.go_back() {
                        action = FolderBrowserAction::Load(load);
                    }
                }
                if ui
                    .add_enabled(browser.can_go_forward(), egui::Button::new("➡"))
                    .on_hover_text("Forward")
                    .clicked()
                {
                    if let Some(load) = browser.go_forward() {
                        action = FolderBrowserAction::Load(load);
                    }
                }

                let path_text = if browser.current_path().is_empty() {
                    "…"
                } else {
                    browser.current_path()
                };
                ui.label(RichText::new(path_text).monospace());
            });

            ui.horizontal(|ui| {
                ui.label("Filter:");
                let mut term = browser.filter().to_string();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut term)
                        .desired_width(ui.available_width())
                        .hint_text("Type to filter folders..."),
                );
                if response.changed() {
                    browser.filter_folders(&term);
                }
            });

            ui.separator();

            let mut clicked_path: Option<String> = None;

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .max_height(280.0)
                .show(ui, |ui| match browser.state() {
                    BrowserState::Closed => {}
                    BrowserState::Loading => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Loading folders...");
                        });
                    }
                    BrowserState::Empty => {
                        ui.label(RichText::new("No folders found").italics());
                    }
                    BrowserState::Error(message) => {
                        let (bg, fg) = error_colors(ui.visuals().dark_mode);
                        egui::Frame::none()
                            .fill(bg)
                            .stroke(Stroke::new(1.0, fg))
                            .rounding(6.0)
                            .inner_margin(Margin::same(8.0))
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new(format!("✗ {}", message)).color(fg),
                                );
                            });
                    }
                    BrowserState::Listing => {
                        let mut shown = 0;
                        for entry in browser.visible_entries() {
                            shown += 1;
                            let response = ui
                                .selectable_label(false, format!("📁 {}", entry.name))
                                .on_hover_text(entry.path.as_str());
                            if response.clicked() {
                                clicked_path = Some(entry.path.clone());
                            }
                        }
                        if shown == 0 {
                            ui.label(RichText::new("No folders match the filter").italics());
                        }
                    }
                });

            if let Some(path) = clicked_path {
                action = FolderBrowserAction::Load(browser.navigate_to_folder(&path));
            }

            ui.add_space(8.0);
            ui.separator();

            ui.horizontal(|ui| {
                let can_select = !browser.current_path().is_empty()
                    && *browser.state() != BrowserState::Loading;
                if ui
                    .add_enabled(can_select, egui::Button::new("✔ Select this folder"))
                    .clicked()
                {
                    action = FolderBrowserAction::Select;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Cancel").clicked() {
                        action = FolderBrowserAction::Close;
                    }
                });
            });

            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                action = FolderBrowserAction::Close;
            }
        });

    if !window_open {
        action = FolderBrowserAction::Close;
    }

    action
}
