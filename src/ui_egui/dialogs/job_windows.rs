//! Job editor and call reminder windows opened from the calendar

use egui::{Color32, RichText};

use crate::models::calendar_event::CalendarEvent;
use crate::ui_egui::views::utils::parse_color;

#[derive(Debug, Clone, PartialEq)]
pub enum JobWindowKind {
    Editor,
    CallReminder,
}

/// An open window for a single job
#[derive(Debug, Clone)]
pub struct JobWindow {
    pub job_id: i64,
    pub kind: JobWindowKind,
    /// Calendar entry the window was opened from
    pub event: CalendarEvent,
    pub notes: String,
}

impl JobWindow {
    pub fn editor(job_id: i64, event: CalendarEvent) -> Self {
        Self {
            job_id,
            kind: JobWindowKind::Editor,
            event,
            notes: String::new(),
        }
    }

    pub fn call_reminder(job_id: i64, event: CalendarEvent) -> Self {
        Self {
            job_id,
            kind: JobWindowKind::CallReminder,
            event,
            notes: String::new(),
        }
    }

    fn title(&self) -> String {
        match self.kind {
            JobWindowKind::Editor => format!("✏ Job #{}", self.job_id),
            JobWindowKind::CallReminder => format!("📞 Call reminder – Job #{}", self.job_id),
        }
    }
}

/// Push `window` unless the same job is already open in the same kind of window
pub fn open_job_window(windows: &mut Vec<JobWindow>, window: JobWindow) {
    if let Some(existing) = windows
        .iter_mut()
        .find(|w| w.job_id == window.job_id && w.kind == window.kind)
    {
        existing.event = window.event;
        return;
    }
    windows.push(window);
}

/// Render every open job window, dropping the ones the user closed
pub fn render_job_windows(ctx: &egui::Context, windows: &mut Vec<JobWindow>) {
    windows.retain_mut(|window| {
        let mut open = true;
        let mut close_clicked = false;

        egui::Window::new(window.title())
            .id(egui::Id::new(("job_window", window.job_id, window.kind == JobWindowKind::Editor)))
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                let event = &window.event;
                ui.horizontal(|ui| {
                    if let Some(color) = event.color.as_deref().and_then(parse_color) {
                        ui.label(RichText::new("■").color(color));
                    }
                    ui.label(RichText::new(event.display_name()).strong());
                });
                ui.label(event.start.format("%A, %B %-d %Y at %H:%M").to_string());
                if let Some(end) = event.end {
                    ui.label(RichText::new(format!("until {}", end.format("%H:%M"))).weak());
                }

                ui.add_space(6.0);

                match window.kind {
                    JobWindowKind::Editor => {
                        ui.label("Notes:");
                        ui.add(
                            egui::TextEdit::multiline(&mut window.notes)
                                .desired_rows(4)
                                .desired_width(f32::INFINITY),
                        );
                    }
                    JobWindowKind::CallReminder => {
                        ui.label(
                            RichText::new("Call the customer to confirm this booking.")
                                .color(Color32::from_rgb(30, 80, 150)),
                        );
                        ui.label("Call notes:");
                        ui.add(
                            egui::TextEdit::multiline(&mut window.notes)
                                .desired_rows(3)
                                .desired_width(f32::INFINITY),
                        );
                    }
                }

                ui.add_space(6.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        close_clicked = true;
                    }
                });
            });

        open && !close_clicked
    });
}
