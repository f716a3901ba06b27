// Settings module
// Client configuration persisted as TOML

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the scheduler server, without trailing slash
    pub server_url: String,
    /// Token sent as `X-CSRFToken` on state-changing requests
    pub csrf_token: Option<String>,
    pub request_timeout_secs: u64,
    /// Path picked with the folder browser
    pub license_scan_path: String,
    pub week_starts_monday: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8000".to_string(),
            csrf_token: None,
            request_timeout_secs: 20,
            license_scan_path: String::new(),
            week_starts_monday: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        let url = self.server_url.trim();
        if url.is_empty() {
            return Err("Server URL cannot be empty".to_string());
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err("Server URL must start with http:// or https://".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be at least one second".to_string());
        }
        Ok(())
    }
}
