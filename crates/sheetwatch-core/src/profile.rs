//! The audit profile: which sheet to check, from when, and who gets told.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read audit profile {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse audit profile: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid audit profile: {0}")]
    Validation(String),
}

/// One audit's parameters, loaded from a YAML file.
///
/// `date_exceptions` stays as raw strings here; the exception-preparation
/// pipeline stage parses them so a malformed entry is recorded as a stage
/// failure rather than blocking the whole run at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditProfile {
    /// Shown in every notification title.
    pub project_name: String,
    pub spreadsheet_id: String,
    /// A1-style range of the date column, starting below the header row,
    /// e.g. `"Form Responses 1!B2:B"`.
    pub column_range: String,
    /// First date the audit expects an entry for.
    pub start_date: NaiveDate,
    /// `YYYY-MM-DD` strings; these dates are never reported missing.
    #[serde(default)]
    pub date_exceptions: Vec<String>,
    /// Minimum occurrence count for a date to be flagged as duplicated.
    #[serde(default = "default_dupe_threshold")]
    pub dupe_threshold: usize,
    /// Mirror detection messages to the administrator.
    #[serde(default)]
    pub admin_copy_msg: bool,
    /// Notify the administrator even when nothing was detected.
    #[serde(default)]
    pub admin_all_copy_mode: bool,
}

fn default_dupe_threshold() -> usize {
    2
}

/// Load and validate an audit profile from a YAML file.
///
/// # Errors
///
/// Returns `ProfileError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_profile(path: &Path) -> Result<AuditProfile, ProfileError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let profile: AuditProfile = serde_yaml::from_str(&content)?;
    validate_profile(&profile)?;
    Ok(profile)
}

fn validate_profile(profile: &AuditProfile) -> Result<(), ProfileError> {
    if profile.project_name.trim().is_empty() {
        return Err(ProfileError::Validation(
            "project_name must be non-empty".to_string(),
        ));
    }

    if profile.spreadsheet_id.trim().is_empty() {
        return Err(ProfileError::Validation(
            "spreadsheet_id must be non-empty".to_string(),
        ));
    }

    if profile.column_range.trim().is_empty() {
        return Err(ProfileError::Validation(
            "column_range must be non-empty".to_string(),
        ));
    }

    if profile.dupe_threshold < 2 {
        return Err(ProfileError::Validation(format!(
            "dupe_threshold {} would flag every reported date; must be at least 2",
            profile.dupe_threshold
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PROFILE: &str = r#"
project_name: Everything Tracker
spreadsheet_id: 1AbC-example
column_range: "Form Responses 1!B2:B"
start_date: 2022-02-26
date_exceptions:
  - "2022-05-12"
dupe_threshold: 3
admin_copy_msg: true
admin_all_copy_mode: true
"#;

    const MINIMAL_PROFILE: &str = r#"
project_name: Everything Tracker
spreadsheet_id: 1AbC-example
column_range: "Form Responses 1!B2:B"
start_date: 2022-02-26
"#;

    fn parse(yaml: &str) -> Result<AuditProfile, ProfileError> {
        let profile: AuditProfile = serde_yaml::from_str(yaml)?;
        validate_profile(&profile)?;
        Ok(profile)
    }

    #[test]
    fn full_profile_round_trips() {
        let profile = parse(FULL_PROFILE).expect("full profile should parse");
        assert_eq!(profile.project_name, "Everything Tracker");
        assert_eq!(
            profile.start_date,
            NaiveDate::from_ymd_opt(2022, 2, 26).unwrap()
        );
        assert_eq!(profile.date_exceptions, vec!["2022-05-12".to_string()]);
        assert_eq!(profile.dupe_threshold, 3);
        assert!(profile.admin_copy_msg);
        assert!(profile.admin_all_copy_mode);
    }

    #[test]
    fn minimal_profile_applies_defaults() {
        let profile = parse(MINIMAL_PROFILE).expect("minimal profile should parse");
        assert!(profile.date_exceptions.is_empty());
        assert_eq!(profile.dupe_threshold, 2);
        assert!(!profile.admin_copy_msg);
        assert!(!profile.admin_all_copy_mode);
    }

    #[test]
    fn empty_project_name_is_rejected() {
        let yaml = MINIMAL_PROFILE.replace("Everything Tracker", "  ");
        let result = parse(&yaml);
        assert!(
            matches!(result, Err(ProfileError::Validation(ref m)) if m.contains("project_name")),
            "expected project_name validation error, got: {result:?}"
        );
    }

    #[test]
    fn dupe_threshold_below_two_is_rejected() {
        let yaml = format!("{MINIMAL_PROFILE}dupe_threshold: 1\n");
        let result = parse(&yaml);
        assert!(
            matches!(result, Err(ProfileError::Validation(ref m)) if m.contains("dupe_threshold")),
            "expected dupe_threshold validation error, got: {result:?}"
        );
    }

    #[test]
    fn malformed_start_date_is_a_parse_error() {
        let yaml = MINIMAL_PROFILE.replace("2022-02-26", "02/26/2022");
        assert!(matches!(parse(&yaml), Err(ProfileError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_profile(Path::new("/nonexistent/audit.yaml"));
        assert!(matches!(result, Err(ProfileError::Io { .. })));
    }
}
