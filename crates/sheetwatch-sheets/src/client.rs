//! The values-API client.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::SheetsError;
use crate::retry::retry_with_backoff;
use crate::types::{ErrorResponse, ValueRange};

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/";

/// Client for the Google Sheets values API.
///
/// Holds the HTTP client, the bearer access token, and the base URL. Use
/// [`SheetsClient::new`] for production or [`SheetsClient::with_base_url`]
/// to point at a mock server in tests.
pub struct SheetsClient {
    client: Client,
    access_token: String,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl SheetsClient {
    /// Creates a new client pointed at the production Sheets API.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure for transient errors; set to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        access_token: &str,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, SheetsError> {
        Self::with_base_url(
            access_token,
            timeout_secs,
            max_retries,
            backoff_base_ms,
            DEFAULT_BASE_URL,
        )
    }

    /// Creates a new client with a custom base URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SheetsError::InvalidBaseUrl`] if
    /// `base_url` does not parse as a usable base.
    pub fn with_base_url(
        access_token: &str,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_ms: u64,
        base_url: &str,
    ) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("sheetwatch/0.1 (entry-audit)")
            .build()?;

        // Normalise: exactly one trailing slash so path joins land under the
        // root rather than replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised)
            .map_err(|e| SheetsError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(SheetsError::InvalidBaseUrl(base_url.to_owned()));
        }

        Ok(Self {
            client,
            access_token: access_token.to_owned(),
            base_url: parsed,
            max_retries,
            backoff_base_ms,
        })
    }

    /// Fetches the raw cell strings of one column.
    ///
    /// Calls `GET v4/spreadsheets/{id}/values/{range}` with
    /// `majorDimension=COLUMNS` and returns the first (only) column of the
    /// response, with blank cells dropped. `range` should cover a single
    /// column and start below the header row, e.g. `"Form Responses
    /// 1!B2:B"`.
    ///
    /// Transient failures are retried per the configured back-off policy.
    ///
    /// # Errors
    ///
    /// - [`SheetsError::ApiError`] if the API returns its error envelope.
    /// - [`SheetsError::UnexpectedStatus`] on other non-2xx responses.
    /// - [`SheetsError::Http`] on network failure.
    /// - [`SheetsError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn fetch_column(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<Vec<String>, SheetsError> {
        let url = self.build_url(spreadsheet_id, range)?;
        let value_range = retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.request_value_range(&url)
        })
        .await?;

        let cells = value_range
            .values
            .into_iter()
            .next()
            .unwrap_or_default()
            .into_iter()
            .filter(|cell| !cell.trim().is_empty())
            .collect();
        Ok(cells)
    }

    /// Builds the full request URL with percent-encoded path segments.
    fn build_url(&self, spreadsheet_id: &str, range: &str) -> Result<Url, SheetsError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| SheetsError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", spreadsheet_id, "values", range]);
        url.query_pairs_mut()
            .append_pair("majorDimension", "COLUMNS");
        Ok(url)
    }

    /// Sends one GET request and parses the `ValueRange` envelope.
    async fn request_value_range(&self, url: &Url) -> Result<ValueRange, SheetsError> {
        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // The API wraps failures in a JSON envelope; fall back to the
            // bare status when the body is something else (proxy error, HTML).
            if let Ok(envelope) = serde_json::from_str::<ErrorResponse>(&body) {
                return Err(SheetsError::ApiError(envelope.error.message));
            }
            return Err(SheetsError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        serde_json::from_str(&body).map_err(|source| SheetsError::Deserialize {
            context: url.to_string(),
            source,
        })
    }
}
