//! Week agenda: one section per day listing jobs and recurring occurrences.

use chrono::{Local, NaiveDate};
use egui::{Margin, RichText, Stroke, Vec2};

use super::utils::{format_event_tooltip, format_time_range, get_event_color};
use crate::models::calendar_event::CalendarEvent;
use crate::utils::date::{week_days, week_label};

#[derive(Debug, Clone, PartialEq)]
pub enum AgendaAction {
    None,
    PreviousWeek,
    NextWeek,
    Today,
    Refresh,
    OpenJob(CalendarEvent),
    CallReminder(CalendarEvent),
}

pub struct AgendaView<'a> {
    pub week_start: NaiveDate,
    pub events: &'a [CalendarEvent],
    /// A materialize request is in flight; event actions are disabled
    pub busy: bool,
    pub fetching: bool,
    pub fetch_error: Option<&'a str>,
}

impl AgendaView<'_> {
    pub fn show(&self, ui: &mut egui::Ui) -> AgendaAction {
        let mut action = AgendaAction::None;

        ui.horizontal(|ui| {
            if ui.button("◀").on_hover_text("Previous week").clicked() {
                action = AgendaAction::PreviousWeek;
            }
            if ui.button("Today").clicked() {
                action = AgendaAction::Today;
            }
            if ui.button("▶").on_hover_text("Next week").clicked() {
                action = AgendaAction::NextWeek;
            }
            ui.heading(week_label(self.week_start));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!self.fetching, egui::Button::new("⟳ Refresh"))
                    .clicked()
                {
                    action = AgendaAction::Refresh;
                }
                if self.fetching || self.busy {
                    ui.spinner();
                }
            });
        });

        if let Some(error) = self.fetch_error {
            ui.colored_label(egui::Color32::LIGHT_RED, format!("Could not load calendar: {}", error));
        }

        ui.separator();

        let today = Local::now().date_naive();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for day in week_days(self.week_start) {
                    let mut day_events: Vec<&CalendarEvent> = self
                        .events
                        .iter()
                        .filter(|e| e.start.date_naive() == day)
                        .collect();
                    day_events.sort_by_key(|e| e.start);

                    let heading = day.format("%A, %B %-d").to_string();
                    let heading = if day == today {
                        RichText::new(format!("{} (today)", heading)).strong()
                    } else {
                        RichText::new(heading).strong()
                    };
                    ui.label(heading);

                    if day_events.is_empty() {
                        ui.label(RichText::new("No jobs").italics().weak());
                    }

                    for event in day_events {
                        if let Some(event_action) = self.event_row(ui, event) {
                            action = event_action;
                        }
                    }

                    ui.add_space(8.0);
                }
            });

        action
    }

    fn event_row(&self, ui: &mut egui::Ui, event: &CalendarEvent) -> Option<AgendaAction> {
        let mut action = None;

        let response = egui::Frame::none()
            .rounding(egui::Rounding::same(6.0))
            .stroke(Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
            .inner_margin(Margin::same(6.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(Vec2::new(4.0, 20.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, get_event_color(event));

                    ui.label(RichText::new(format_time_range(event)).monospace());
                    ui.label(event.display_name());
                    if event.is_virtual() {
                        ui.label(RichText::new("↻").weak())
                            .on_hover_text("Recurring occurrence, booked on first open");
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add_enabled(!self.busy, egui::Button::new("📞"))
                            .on_hover_text("Call reminder")
                            .clicked()
                        {
                            action = Some(AgendaAction::CallReminder(event.clone()));
                        }
                        if ui
                            .add_enabled(!self.busy, egui::Button::new("✏ Open"))
                            .clicked()
                        {
                            action = Some(AgendaAction::OpenJob(event.clone()));
                        }
                    });
                });
            })
            .response;

        response.on_hover_text(format_event_tooltip(event));
        action
    }
}
