//! HTTP client for the Google Sheets `spreadsheets.values.get` endpoint.
//!
//! The audit core only ever needs one thing from the spreadsheet: the raw
//! cell strings of a single column. [`SheetsClient::fetch_column`] is that
//! one operation.

pub mod client;
pub mod error;
mod retry;
pub mod types;

pub use client::SheetsClient;
pub use error::SheetsError;
