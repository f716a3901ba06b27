//! Common utility functions for calendar views.
//!
//! This module contains pure helper functions used across the agenda view
//! and the job windows.

use egui::Color32;

use crate::models::calendar_event::CalendarEvent;

const DEFAULT_EVENT_COLOR: Color32 = Color32::from_rgb(51, 102, 204);

/// Parse a hex color string to Color32.
///
/// # Arguments
/// * `hex` - A hex color string, optionally prefixed with '#' (e.g., "#FF5500" or "FF5500")
///
/// # Returns
/// * `Some(Color32)` if parsing succeeds
/// * `None` if the input is empty or invalid
pub fn parse_color(hex: &str) -> Option<Color32> {
    if hex.is_empty() {
        return None;
    }

    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() || hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color32::from_rgb(r, g, b))
}

pub fn get_event_color(event: &CalendarEvent) -> Color32 {
    event
        .color
        .as_deref()
        .and_then(parse_color)
        .unwrap_or(DEFAULT_EVENT_COLOR)
}

/// "09:00 - 10:30" or just "09:00" when the event has no end.
pub fn format_time_range(event: &CalendarEvent) -> String {
    let start = event.start.format("%H:%M").to_string();
    match event.end {
        Some(end) => format!("{} - {}", start, end.format("%H:%M")),
        None => start,
    }
}

/// Tooltip text for an event row.
pub fn format_event_tooltip(event: &CalendarEvent) -> String {
    let mut lines = vec![format!("📌 {}", event.display_name())];
    lines.push(format!(
        "🕐 {} ({})",
        format_time_range(event),
        event.start.format("%A, %B %d")
    ));

    if event.is_virtual() {
        lines.push("↻ Recurring – not yet booked as a job".to_string());
    } else if let Some(job_id) = event.metadata.job_id {
        lines.push(format!("Job #{}", job_id));
    }

    lines.join("\n")
}
