//! State of the folder picker modal.
//!
//! The browser never performs I/O itself. Operations that need a listing
//! return a [`FolderLoad`] ticket; the caller fetches it (on a worker
//! thread in the app, inline in tests via [`FolderBrowser::fetch`]) and
//! hands the outcome back to [`FolderBrowser::finish_load`].

mod history;

pub use history::PathHistory;

use crate::models::folder::{FolderEntry, FolderListing};
use crate::services::api::{ApiError, SchedulerApi};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserState {
    Closed,
    Loading,
    Listing,
    /// Listing succeeded but had no sub-folders
    Empty,
    /// Last load failed; the message is shown in place of the list
    Error(String),
}

/// A listing the browser is waiting for.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a folder load does nothing until it is fetched"]
pub struct FolderLoad {
    pub path: String,
}

/// Where a picked folder is committed to.
pub trait PathInput {
    fn set_path(&mut self, path: &str);
}

impl PathInput for String {
    fn set_path(&mut self, path: &str) {
        self.clear();
        self.push_str(path);
    }
}

#[derive(Debug, Clone)]
pub struct FolderBrowser {
    state: BrowserState,
    current_path: String,
    entries: Vec<FolderEntry>,
    filter: String,
    history: PathHistory,
}

impl Default for FolderBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl FolderBrowser {
    pub fn new() -> Self {
        Self {
            state: BrowserState::Closed,
            current_path: String::new(),
            entries: Vec::new(),
            filter: String::new(),
            history: PathHistory::new(),
        }
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != BrowserState::Closed
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn entries(&self) -> &[FolderEntry] {
        &self.entries
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn history(&self) -> &PathHistory {
        &self.history
    }

    pub fn can_go_back(&self) -> bool {
        self.is_open() && self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.is_open() && self.history.can_go_forward()
    }

    /// Open the modal and ask for the server's default directory.
    pub fn open(&mut self) -> FolderLoad {
        self.current_path.clear();
        self.entries.clear();
        self.filter.clear();
        self.history.clear();
        log::debug!("Opening folder browser");
        self.load_folders("")
    }

    pub fn load_folders(&mut self, path: &str) -> FolderLoad {
        self.state = BrowserState::Loading;
        FolderLoad {
            path: path.to_string(),
        }
    }

    /// Apply the outcome of a load. Ignored once the modal is closed.
    pub fn finish_load(&mut self, load: FolderLoad, result: Result<FolderListing, ApiError>) {
        if !self.is_open() {
            log::debug!("Discarding folder listing for '{}': browser closed", load.path);
            return;
        }

        match result {
            Ok(listing) => {
                self.current_path = listing.current_path;
                self.entries = listing.items;
                self.filter.clear();
                self.state = if self.entries.is_empty() {
                    BrowserState::Empty
                } else {
                    BrowserState::Listing
                };
            }
            Err(err) => {
                match err.status() {
                    Some(status) => log::error!(
                        "Server rejected folder listing for '{}' (HTTP {}): {}",
                        load.path,
                        status,
                        err
                    ),
                    None => log::error!("Failed to load folders for '{}': {}", load.path, err),
                }
                self.state = BrowserState::Error(err.to_string());
            }
        }
    }

    /// Fetch `load` through `api` and apply it.
    pub fn fetch(&mut self, api: &dyn SchedulerApi, load: FolderLoad) {
        let result = api.browse_folders(&load.path);
        self.finish_load(load, result);
    }

    /// Enter `path`, remembering the folder being left.
    pub fn navigate_to_folder(&mut self, path: &str) -> FolderLoad {
        self.history.record(self.current_path.clone());
        self.load_folders(path)
    }

    pub fn go_back(&mut self) -> Option<FolderLoad> {
        let path = self.history.step_back()?;
        Some(self.load_folders(&path))
    }

    pub fn go_forward(&mut self) -> Option<FolderLoad> {
        let path = self.history.step_forward()?;
        Some(self.load_folders(&path))
    }

    pub fn filter_folders(&mut self, term: &str) {
        self.filter = term.to_string();
    }

    /// Entries matching the current filter, in listing order.
    pub fn visible_entries(&self) -> impl Iterator<Item = &FolderEntry> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.matches(&self.filter))
    }

    /// Commit the current path into `target` and close.
    ///
    /// Returns the committed path, or `None` if the modal was not open.
    pub fn select_current_folder(&mut self, target: &mut dyn PathInput) -> Option<String> {
        if !self.is_open() {
            return None;
        }
        let path = self.current_path.clone();
        target.set_path(&path);
        log::info!("Selected folder '{}'", path);
        self.close_modal();
        Some(path)
    }

    pub fn close_modal(&mut self) {
        if !self.is_open() {
            return;
        }
        self.state = BrowserState::Closed;
        self.entries.clear();
        self.filter.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(path: &str, names: &[&str]) -> FolderListing {
        FolderListing {
            current_path: path.to_string(),
            items: names
                .iter()
                .map(|n| FolderEntry::new(*n, format!("{}/{}", path, n)))
                .collect(),
        }
    }

    #[test]
    fn test_open_starts_loading_empty_path() {
        let mut browser = FolderBrowser::new();
        assert!(!browser.is_open());

        let load = browser.open();
        assert_eq!(load.path, "");
        assert_eq!(browser.state(), &BrowserState::Loading);
    }

    #[test]
    fn test_empty_listing_state() {
        let mut browser = FolderBrowser::new();
        let load = browser.open();
        browser.finish_load(load, Ok(listing("/srv", &[])));
        assert_eq!(browser.state(), &BrowserState::Empty);
        assert_eq!(browser.current_path(), "/srv");
    }

    #[test]
    fn test_results_after_close_are_discarded() {
        let mut browser = FolderBrowser::new();
        let load = browser.open();
        browser.close_modal();
        browser.finish_load(load, Ok(listing("/srv", &["a"])));

        assert!(!browser.is_open());
        assert!(browser.entries().is_empty());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut browser = FolderBrowser::new();
        browser.close_modal();
        let _ = browser.open();
        browser.close_modal();
        browser.close_modal();
        assert_eq!(browser.state(), &BrowserState::Closed);
    }

    #[test]
    fn test_select_when_closed_does_nothing() {
        let mut browser = FolderBrowser::new();
        let mut input = String::from("/keep");
        assert_eq!(browser.select_current_folder(&mut input), None);
        assert_eq!(input, "/keep");
    }
}
