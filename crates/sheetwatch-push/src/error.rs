use thiserror::Error;

/// Errors returned by the push-notification client.
#[derive(Debug, Error)]
pub enum PushError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The push API rejected the request with an error message.
    #[error("push API error: {0}")]
    ApiError(String),

    /// Non-2xx response whose body was not the standard error envelope.
    #[error("unexpected HTTP status {status} from push API")]
    UnexpectedStatus { status: u16 },

    /// The configured base URL cannot serve as a request base.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
