//! Stage orchestration for one audit run.
//!
//! Each stage is a pure function; this orchestrator aggregates their
//! failures into one list before the dispatcher decides what to send.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::detect::{duplicate_dates, missing_dates, DuplicateDate};
use crate::error::{Stage, StageError};
use crate::ingest::parse_observed_dates;
use crate::message::{combined_body, compose_title};
use crate::profile::AuditProfile;
use crate::range::{apply_exceptions, expected_range, parse_exceptions};

/// Everything one run computed: detection results, recorded stage errors,
/// and the composed notification payload.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub today: NaiveDate,
    pub missing: Vec<NaiveDate>,
    pub duplicates: Vec<DuplicateDate>,
    pub errors: Vec<StageError>,
    pub title: String,
    pub body: String,
}

impl RunOutcome {
    #[must_use]
    pub fn missing_detected(&self) -> bool {
        !self.missing.is_empty()
    }

    #[must_use]
    pub fn dupe_detected(&self) -> bool {
        !self.duplicates.is_empty()
    }

    /// True when there is a detection worth telling the primary recipient
    /// about.
    #[must_use]
    pub fn message_exists(&self) -> bool {
        self.missing_detected() || self.dupe_detected()
    }

    #[must_use]
    pub fn error_detected(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Runs the detection pipeline over one fetched date column.
///
/// `fetched` carries the raw cells from the sheet, or the fetch failure
/// description. A fallible stage records a [`StageError`] instead of
/// aborting; later stages run on whatever survived (an empty observed list,
/// an empty exception set), so the outcome always carries a complete message
/// payload for the dispatcher to judge. Errors recorded here are never
/// dropped: the dispatcher surfaces each one verbatim to the administrator.
#[must_use]
pub fn run_audit(
    profile: &AuditProfile,
    today: NaiveDate,
    fetched: Result<Vec<String>, String>,
) -> RunOutcome {
    let mut errors = Vec::new();

    let observed = match fetched
        .and_then(|cells| parse_observed_dates(&cells).map_err(|e| e.to_string()))
    {
        Ok(dates) => dates,
        Err(detail) => {
            errors.push(StageError::new(Stage::DateColumnFetch, detail));
            Vec::new()
        }
    };

    let expected = expected_range(profile.start_date, today);

    let exceptions = match parse_exceptions(&profile.date_exceptions) {
        Ok(set) => set,
        Err(e) => {
            errors.push(StageError::new(Stage::ExceptionPreparation, e.to_string()));
            BTreeSet::new()
        }
    };

    let candidates = apply_exceptions(expected, &exceptions);
    let missing = missing_dates(&candidates, &observed);
    let duplicates = duplicate_dates(&observed, profile.dupe_threshold);

    if !errors.is_empty() {
        tracing::warn!(
            failed_stages = errors.len(),
            "audit degraded: continuing with partial data"
        );
    }

    let title = compose_title(&profile.project_name, today);
    let body = combined_body(&missing, &duplicates);

    RunOutcome {
        today,
        missing,
        duplicates,
        errors,
        title,
        body,
    }
}
