//! Detection engine for the daily-entry sheet audit.
//!
//! Everything here is pure and synchronous: expected-range generation,
//! exception filtering, missing/duplicate date detection, message
//! composition, and the dispatch decision table. The HTTP collaborators
//! (sheet fetch, push delivery) live in their own crates and are driven by
//! the CLI binary.

pub mod config;
pub mod detect;
pub mod dispatch;
pub mod error;
pub mod ingest;
pub mod message;
pub mod pipeline;
pub mod profile;
pub mod range;

pub use config::{load_app_config, load_app_config_from_env, AppConfig, ConfigError};
pub use dispatch::{plan_sends, PlannedSend, Recipient};
pub use error::{Stage, StageError};
pub use pipeline::{run_audit, RunOutcome};
pub use profile::{load_profile, AuditProfile, ProfileError};
