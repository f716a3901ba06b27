// Test fixtures - reusable test data
// Provides consistent calendar events and folder listings across test files

#![allow(dead_code)]

use chrono::DateTime;
use rental_scheduler::models::calendar_event::{CalendarEvent, EventMetadata};
use rental_scheduler::models::folder::{FolderEntry, FolderListing};

/// Sample calendar events
pub mod events {
    use super::*;

    /// A virtual occurrence of weekly series 12
    pub fn virtual_occurrence() -> CalendarEvent {
        CalendarEvent {
            id: "virtual-12-20250304".to_string(),
            title: "Weekly trailer rental".to_string(),
            start: DateTime::parse_from_rfc3339("2025-03-04T09:00:00+01:00").unwrap(),
            end: Some(DateTime::parse_from_rfc3339("2025-03-04T11:00:00+01:00").unwrap()),
            color: Some("#2e7d32".to_string()),
            metadata: EventMetadata {
                is_virtual: true,
                parent_id: Some(12),
                original_start: Some("2025-03-04T08:00:00Z".to_string()),
                job_id: None,
                job_name: Some("Trailer – J. Smith".to_string()),
            },
        }
    }

    /// Virtual occurrence whose render data lost its parent id
    pub fn missing_parent() -> CalendarEvent {
        let mut event = virtual_occurrence();
        event.metadata.parent_id = None;
        event
    }

    /// Virtual occurrence whose render data lost its original start
    pub fn missing_original_start() -> CalendarEvent {
        let mut event = virtual_occurrence();
        event.metadata.original_start = None;
        event
    }

    /// Virtual occurrence with a blank original start
    pub fn blank_original_start() -> CalendarEvent {
        let mut event = virtual_occurrence();
        event.metadata.original_start = Some(String::new());
        event
    }
}

/// Sample folder listings
pub mod folders {
    use super::*;

    pub fn listing(path: &str, names: &[&str]) -> FolderListing {
        FolderListing {
            current_path: path.to_string(),
            items: names
                .iter()
                .map(|name| FolderEntry::new(*name, format!("{}/{}", path, name)))
                .collect(),
        }
    }

    /// Listing served for the empty path
    pub fn home() -> FolderListing {
        listing("/srv", &["Archive", "licenses", "Scans_AB", "tmp"])
    }
}
