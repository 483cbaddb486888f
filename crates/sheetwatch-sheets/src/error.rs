use thiserror::Error;

/// Errors returned by the Sheets values-API client.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Sheets API returned an error envelope with a message.
    #[error("Sheets API error: {0}")]
    ApiError(String),

    /// Non-2xx response whose body was not the standard error envelope.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL cannot serve as a request base.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
