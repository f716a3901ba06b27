use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::blocking::{Client, Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{ApiError, CsrfTokenProvider, SchedulerApi};
use crate::models::calendar_event::{CalendarEvent, MaterializedJob, VirtualOccurrence};
use crate::models::folder::FolderListing;
use crate::models::settings::Settings;

const MATERIALIZE_PATH: &str = "/api/materialize-occurrence/";
const BROWSE_FOLDERS_PATH: &str = "/api/browse-folders/";
const CALENDAR_EVENTS_PATH: &str = "/api/calendar-events/";
const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Serialize)]
struct MaterializeBody<'a> {
    parent_id: i64,
    original_start: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// [`SchedulerApi`] over HTTP/JSON using a blocking reqwest client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct HttpSchedulerApi {
    client: Client,
    base_url: String,
    csrf: Arc<dyn CsrfTokenProvider>,
}

impl HttpSchedulerApi {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        csrf: Arc<dyn CsrfTokenProvider>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build scheduler HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf,
        })
    }

    pub fn from_settings(settings: &Settings, csrf: Arc<dyn CsrfTokenProvider>) -> Result<Self> {
        Self::new(
            &settings.server_url,
            Duration::from_secs(settings.request_timeout_secs),
            csrf,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str, query: &[(&str, &str)]) -> String {
        build_url(&self.base_url, path, query)
    }

    /// POST request for materializing `occurrence`, CSRF header attached
    /// when a token is available.
    fn materialize_request(&self, occurrence: &VirtualOccurrence) -> Result<Request, ApiError> {
        let body = MaterializeBody {
            parent_id: occurrence.parent_id,
            original_start: &occurrence.original_start,
        };

        let mut request = self.client.post(self.url(MATERIALIZE_PATH, &[])).json(&body);
        if let Some(token) = self.csrf.csrf_token() {
            request = request.header(CSRF_HEADER, token);
        } else {
            log::warn!("No CSRF token configured; materialize request may be rejected");
        }

        build_request(request)
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        self.execute(build_request(request)?)
    }

    fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let response = self
            .client
            .execute(request)
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| ApiError::Network(err.to_string()))?;

        decode_response(status.as_u16(), &body)
    }
}

impl SchedulerApi for HttpSchedulerApi {
    fn materialize_occurrence(
        &self,
        occurrence: &VirtualOccurrence,
    ) -> Result<MaterializedJob, ApiError> {
        let request = self.materialize_request(occurrence)?;
        log::debug!(
            "Materializing occurrence of series {} at {}",
            occurrence.parent_id,
            occurrence.original_start
        );
        self.execute(request)
    }

    fn browse_folders(&self, path: &str) -> Result<FolderListing, ApiError> {
        let request = self
            .client
            .get(self.url(BROWSE_FOLDERS_PATH, &[("path", path)]));
        self.send(request)
    }

    fn calendar_events(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CalendarEvent>, ApiError> {
        let start = start.format("%Y-%m-%d").to_string();
        let end = end.format("%Y-%m-%d").to_string();
        let request = self.client.get(self.url(
            CALENDAR_EVENTS_PATH,
            &[("start", start.as_str()), ("end", end.as_str())],
        ));
        self.send(request)
    }
}

fn build_request(request: RequestBuilder) -> Result<Request, ApiError> {
    request
        .header(reqwest::header::ACCEPT, "application/json")
        .build()
        .map_err(|err| ApiError::Network(err.to_string()))
}

fn build_url(base_url: &str, path: &str, query: &[(&str, &str)]) -> String {
    let mut url = format!("{}{}", base_url, path);
    for (i, (key, value)) in query.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with HTTP status {}", status));
        return Err(ApiError::Status { status, message });
    }

    serde_json::from_str(body).map_err(|err| ApiError::MalformedResponse(err.to_string()))
}
