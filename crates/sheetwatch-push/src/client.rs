//! The push client.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PushError;
use crate::types::{ErrorResponse, PushNote};

const DEFAULT_BASE_URL: &str = "https://api.pushbullet.com/";

/// Client for the Pushbullet pushes API.
///
/// The access token is supplied per send rather than held by the client:
/// one run delivers to several recipients (entry owner, administrator) and
/// each is identified by its own token.
pub struct PushClient {
    client: Client,
    base_url: Url,
}

impl PushClient {
    /// Creates a new client pointed at the production push API.
    ///
    /// # Errors
    ///
    /// Returns [`PushError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, PushError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PushError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PushError::InvalidBaseUrl`] if `base_url`
    /// does not parse as a usable base.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, PushError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("sheetwatch/0.1 (entry-audit)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised)
            .map_err(|e| PushError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(PushError::InvalidBaseUrl(base_url.to_owned()));
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Delivers one note to the owner of `access_token`.
    ///
    /// One call, no retry; a failure reaches the caller unchanged.
    ///
    /// # Errors
    ///
    /// - [`PushError::ApiError`] if the API returns its error envelope.
    /// - [`PushError::UnexpectedStatus`] on other non-2xx responses.
    /// - [`PushError::Http`] on network failure.
    pub async fn send_note(
        &self,
        access_token: &str,
        title: &str,
        body: &str,
    ) -> Result<(), PushError> {
        let url = self
            .base_url
            .join("v2/pushes")
            .map_err(|e| PushError::InvalidBaseUrl(e.to_string()))?;

        let response = self
            .client
            .post(url)
            .header("Access-Token", access_token)
            .json(&PushNote::new(title, body))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await?;
        if let Ok(envelope) = serde_json::from_str::<ErrorResponse>(&text) {
            return Err(PushError::ApiError(envelope.error.message));
        }
        Err(PushError::UnexpectedStatus {
            status: status.as_u16(),
        })
    }
}
