// Tests for folder browser navigation, history, filtering and selection
mod fixtures;

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use test_case::test_case;

use fixtures::folders::{home, listing};
use rental_scheduler::models::calendar_event::{CalendarEvent, MaterializedJob, VirtualOccurrence};
use rental_scheduler::models::folder::FolderListing;
use rental_scheduler::services::api::{ApiError, SchedulerApi};
use rental_scheduler::services::folder_browser::{BrowserState, FolderBrowser};

/// Serves canned listings by path and records every request
#[derive(Default)]
struct FakeFolderApi {
    listings: HashMap<String, Result<FolderListing, ApiError>>,
    requests: Mutex<Vec<String>>,
}

impl FakeFolderApi {
    fn with(mut self, path: &str, result: Result<FolderListing, ApiError>) -> Self {
        self.listings.insert(path.to_string(), result);
        self
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl SchedulerApi for FakeFolderApi {
    fn materialize_occurrence(&self, _: &VirtualOccurrence) -> Result<MaterializedJob, ApiError> {
        unimplemented!("not used by the folder browser")
    }

    fn browse_folders(&self, path: &str) -> Result<FolderListing, ApiError> {
        self.requests.lock().unwrap().push(path.to_string());
        self.listings.get(path).cloned().unwrap_or_else(|| {
            Err(ApiError::Status {
                status: 404,
                message: format!("Folder not found: {}", path),
            })
        })
    }

    fn calendar_events(&self, _: NaiveDate, _: NaiveDate) -> Result<Vec<CalendarEvent>, ApiError> {
        Ok(Vec::new())
    }
}

fn api() -> FakeFolderApi {
    FakeFolderApi::default()
        .with("", Ok(home()))
        .with("a", Ok(listing("a", &["x", "y"])))
        .with("b", Ok(listing("b", &["z"])))
        .with("c", Ok(listing("c", &[])))
        .with(
            "/denied",
            Err(ApiError::Status {
                status: 403,
                message: "Permission denied".to_string(),
            }),
        )
}

fn open_at(api: &FakeFolderApi, path: &str) -> FolderBrowser {
    let mut browser = FolderBrowser::new();
    let load = browser.open();
    browser.fetch(api, load);
    if !path.is_empty() {
        let load = browser.load_folders(path);
        browser.fetch(api, load);
    }
    browser
}

fn visible_names(browser: &FolderBrowser) -> Vec<String> {
    browser.visible_entries().map(|e| e.name.clone()).collect()
}

#[test]
fn test_open_requests_empty_path_and_lists_default_directory() {
    let api = api();
    let browser = open_at(&api, "");

    assert_eq!(api.requests(), vec![String::new()]);
    assert_eq!(browser.current_path(), "/srv");
    assert_eq!(browser.state(), &BrowserState::Listing);
    assert_eq!(browser.entries().len(), 4);
}

#[test]
fn test_navigate_records_path_navigated_away_from() {
    let api = api();
    let mut browser = open_at(&api, "a");
    assert!(browser.history().is_empty());

    let load = browser.navigate_to_folder("b");
    assert_eq!(load.path, "b");
    browser.fetch(&api, load);

    assert_eq!(browser.history().entries(), ["a".to_string()]);
    assert_eq!(browser.history().cursor(), Some(0));
    assert_eq!(browser.current_path(), "b");
}

#[test]
fn test_go_back_loads_previous_and_moves_cursor_before_start() {
    let api = api();
    let mut browser = open_at(&api, "a");
    let load = browser.navigate_to_folder("b");
    browser.fetch(&api, load);

    let load = browser.go_back().expect("history has an entry");
    assert_eq!(load.path, "a");
    assert_eq!(browser.history().cursor(), None);
    browser.fetch(&api, load);
    assert_eq!(browser.current_path(), "a");

    assert!(browser.go_back().is_none());
    assert_eq!(browser.history().cursor(), None);
}

#[test]
fn test_go_forward_replays_recorded_entry() {
    let api = api();
    let mut browser = open_at(&api, "a");
    let load = browser.navigate_to_folder("b");
    browser.fetch(&api, load);
    let load = browser.go_back().unwrap();
    browser.fetch(&api, load);

    // History stores the folder left behind, so forward lands on it again
    let load = browser.go_forward().expect("one entry ahead of the cursor");
    assert_eq!(load.path, "a");
    assert_eq!(browser.history().cursor(), Some(0));
    assert!(browser.go_forward().is_none());
}

#[test]
fn test_navigate_after_back_discards_forward_history() {
    let api = api();
    let mut browser = open_at(&api, "a");
    for target in ["b", "c"] {
        let load = browser.navigate_to_folder(target);
        browser.fetch(&api, load);
    }
    assert_eq!(browser.history().entries(), ["a".to_string(), "b".to_string()]);

    let load = browser.go_back().unwrap();
    browser.fetch(&api, load);
    assert_eq!(browser.current_path(), "b");
    assert_eq!(browser.history().cursor(), Some(0));

    let load = browser.navigate_to_folder("a");
    browser.fetch(&api, load);

    assert_eq!(browser.history().entries(), ["a".to_string(), "b".to_string()]);
    assert_eq!(browser.history().cursor(), Some(1));
    assert!(!browser.can_go_forward());
}

#[test]
fn test_failed_load_keeps_path_and_history() {
    let api = api();
    let mut browser = open_at(&api, "a");
    let load = browser.navigate_to_folder("b");
    browser.fetch(&api, load);
    let history_before = browser.history().clone();

    let load = browser.load_folders("/denied");
    browser.fetch(&api, load);

    assert_eq!(
        browser.state(),
        &BrowserState::Error("Permission denied".to_string())
    );
    assert_eq!(browser.current_path(), "b");
    assert_eq!(browser.history(), &history_before);
}

#[test]
fn test_failed_navigation_is_not_retried() {
    let api = api();
    let mut browser = open_at(&api, "a");

    let load = browser.navigate_to_folder("missing");
    browser.fetch(&api, load);

    assert!(matches!(browser.state(), BrowserState::Error(msg) if msg.contains("missing")));
    assert_eq!(browser.current_path(), "a");
    assert_eq!(
        api.requests().iter().filter(|p| p.as_str() == "missing").count(),
        1
    );
}

#[test]
fn test_network_error_message_is_shown_inline() {
    let api = api().with("/offline", Err(ApiError::Network("connection refused".into())));
    let mut browser = open_at(&api, "");
    let load = browser.load_folders("/offline");
    browser.fetch(&api, load);

    assert_eq!(
        browser.state(),
        &BrowserState::Error("Network error: connection refused".to_string())
    );
}

#[test]
fn test_empty_listing_shows_placeholder_state() {
    let api = api();
    let browser = open_at(&api, "c");
    assert_eq!(browser.state(), &BrowserState::Empty);
    assert_eq!(browser.visible_entries().count(), 0);
}

#[test_case("ab", vec!["Scans_AB"] ; "matches case insensitively")]
#[test_case("A", vec!["Archive", "Scans_AB"] ; "single letter")]
#[test_case("zzz", vec![] ; "no match")]
#[test_case("", vec!["Archive", "licenses", "Scans_AB", "tmp"] ; "empty shows all")]
fn test_filter_folders(term: &str, expected: Vec<&str>) {
    let api = api();
    let mut browser = open_at(&api, "");
    let requests_before = api.requests().len();

    browser.filter_folders(term);

    assert_eq!(visible_names(&browser), expected);
    assert_eq!(api.requests().len(), requests_before);
}

#[test]
fn test_filter_is_reversible() {
    let api = api();
    let mut browser = open_at(&api, "");

    browser.filter_folders("ab");
    assert_eq!(visible_names(&browser), vec!["Scans_AB"]);

    browser.filter_folders("");
    assert_eq!(browser.visible_entries().count(), browser.entries().len());
}

#[test]
fn test_select_commits_current_path_and_closes() {
    let api = api();
    let mut browser = open_at(&api, "b");
    let mut license_scan_path = String::from("/old/path");

    let selected = browser.select_current_folder(&mut license_scan_path);

    assert_eq!(selected.as_deref(), Some("b"));
    assert_eq!(license_scan_path, "b");
    assert!(!browser.is_open());
}

#[test]
fn test_reopen_starts_fresh() {
    let api = api();
    let mut browser = open_at(&api, "a");
    let load = browser.navigate_to_folder("b");
    browser.fetch(&api, load);
    browser.close_modal();

    let load = browser.open();
    assert_eq!(load.path, "");
    assert!(browser.history().is_empty());
    assert_eq!(browser.current_path(), "");
}
