// Folder module
// Directory listings returned by the server's folder browser endpoint

use serde::{Deserialize, Serialize};

/// One directory entry in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderEntry {
    pub name: String,
    pub path: String,
}

impl FolderEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Case-insensitive substring match on the entry name.
    pub fn matches(&self, term: &str) -> bool {
        term.is_empty() || self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Contents of a directory as resolved by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderListing {
    pub current_path: String,
    #[serde(default)]
    pub items: Vec<FolderEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_case_insensitive() {
        let entry = FolderEntry::new("Scans_ABC", "/srv/Scans_ABC");
        assert!(entry.matches("ab"));
        assert!(entry.matches("SCANS"));
        assert!(entry.matches(""));
        assert!(!entry.matches("xyz"));
    }

    #[test]
    fn test_listing_items_default_to_empty() {
        let listing: FolderListing = serde_json::from_str(r#"{"current_path": "/srv"}"#).unwrap();
        assert_eq!(listing.current_path, "/srv");
        assert!(listing.items.is_empty());
    }
}
