//! HTTP client for the Pushbullet `/v2/pushes` note endpoint.
//!
//! One operation: deliver a title+body note to whoever owns the supplied
//! access token. No retry and no delivery verification; failures propagate
//! to the caller.

pub mod client;
pub mod error;
pub mod types;

pub use client::PushClient;
pub use error::PushError;
