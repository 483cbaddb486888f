use serde::Deserialize;

/// Response envelope of the `spreadsheets.values.get` endpoint.
///
/// `values` holds one inner vector per requested column (the client always
/// requests `majorDimension=COLUMNS`); the field is absent entirely when the
/// range contains no data, hence the default.
#[derive(Debug, Deserialize)]
pub struct ValueRange {
    pub range: Option<String>,
    #[serde(rename = "majorDimension")]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

/// Error envelope accompanying non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: Option<u16>,
    pub message: String,
    pub status: Option<String>,
}
