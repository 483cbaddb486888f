use serde::{Deserialize, Serialize};

/// Request body of the `/v2/pushes` endpoint, `note` variant.
#[derive(Debug, Serialize)]
pub struct PushNote<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'a str,
    pub body: &'a str,
}

impl<'a> PushNote<'a> {
    #[must_use]
    pub fn new(title: &'a str, body: &'a str) -> Self {
        Self {
            kind: "note",
            title,
            body,
        }
    }
}

/// Error envelope accompanying non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
