//! Process configuration from environment variables.
//!
//! Audit parameters live in the YAML profile ([`crate::profile`]); this is
//! only what varies per deployment: credentials, endpoints, logging.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Clone)]
pub struct AppConfig {
    /// Bearer token for the Sheets values API.
    pub sheets_token: String,
    /// Push access token for the primary recipient.
    pub notice_token: String,
    /// Push access token for the administrator.
    pub admin_token: String,
    pub profile_path: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub fetch_max_retries: u32,
    pub fetch_backoff_base_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("sheets_token", &"[redacted]")
            .field("notice_token", &"[redacted]")
            .field("admin_token", &"[redacted]")
            .field("profile_path", &self.profile_path)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("fetch_max_retries", &self.fetch_max_retries)
            .field("fetch_backoff_base_ms", &self.fetch_backoff_base_ms)
            .finish()
    }
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are
/// invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are
/// invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function, decoupled from the actual environment so it can be tested with
/// a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let sheets_token = require("SHEETWATCH_SHEETS_TOKEN")?;
    let notice_token = require("SHEETWATCH_NOTICE_TOKEN")?;
    let admin_token = require("SHEETWATCH_ADMIN_TOKEN")?;

    let profile_path = PathBuf::from(or_default("SHEETWATCH_PROFILE_PATH", "./config/audit.yaml"));
    let log_level = or_default("SHEETWATCH_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("SHEETWATCH_REQUEST_TIMEOUT_SECS", "30")?;
    let fetch_max_retries = parse_u32("SHEETWATCH_MAX_RETRIES", "3")?;
    let fetch_backoff_base_ms = parse_u64("SHEETWATCH_RETRY_BACKOFF_BASE_MS", "1000")?;

    Ok(AppConfig {
        sheets_token,
        notice_token,
        admin_token,
        profile_path,
        log_level,
        request_timeout_secs,
        fetch_max_retries,
        fetch_backoff_base_ms,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("SHEETWATCH_SHEETS_TOKEN", "sheets-token");
        m.insert("SHEETWATCH_NOTICE_TOKEN", "notice-token");
        m.insert("SHEETWATCH_ADMIN_TOKEN", "admin-token");
        m
    }

    #[test]
    fn fails_without_sheets_token() {
        let mut map = full_env();
        map.remove("SHEETWATCH_SHEETS_TOKEN");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHEETWATCH_SHEETS_TOKEN"),
            "expected MissingEnvVar(SHEETWATCH_SHEETS_TOKEN), got: {result:?}"
        );
    }

    #[test]
    fn fails_without_notice_token() {
        let mut map = full_env();
        map.remove("SHEETWATCH_NOTICE_TOKEN");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHEETWATCH_NOTICE_TOKEN"),
            "expected MissingEnvVar(SHEETWATCH_NOTICE_TOKEN), got: {result:?}"
        );
    }

    #[test]
    fn fails_without_admin_token() {
        let mut map = full_env();
        map.remove("SHEETWATCH_ADMIN_TOKEN");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHEETWATCH_ADMIN_TOKEN"),
            "expected MissingEnvVar(SHEETWATCH_ADMIN_TOKEN), got: {result:?}"
        );
    }

    #[test]
    fn succeeds_with_defaults() {
        let cfg = build_app_config(lookup_from_map(&full_env())).expect("config should load");
        assert_eq!(cfg.profile_path, PathBuf::from("./config/audit.yaml"));
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.fetch_max_retries, 3);
        assert_eq!(cfg.fetch_backoff_base_ms, 1000);
    }

    #[test]
    fn timeout_override_is_parsed() {
        let mut map = full_env();
        map.insert("SHEETWATCH_REQUEST_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 60);
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let mut map = full_env();
        map.insert("SHEETWATCH_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHEETWATCH_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(SHEETWATCH_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn invalid_retry_count_is_rejected() {
        let mut map = full_env();
        map.insert("SHEETWATCH_MAX_RETRIES", "-1");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHEETWATCH_MAX_RETRIES"),
            "expected InvalidEnvVar(SHEETWATCH_MAX_RETRIES), got: {result:?}"
        );
    }

    #[test]
    fn debug_output_redacts_tokens() {
        let cfg = build_app_config(lookup_from_map(&full_env())).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("sheets-token"));
        assert!(!rendered.contains("notice-token"));
        assert!(!rendered.contains("admin-token"));
        assert!(rendered.contains("[redacted]"));
    }
}
