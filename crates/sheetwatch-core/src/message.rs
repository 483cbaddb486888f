//! Notification text rendering.
//!
//! Pure formatting over already-computed detection results; the dispatcher
//! decides which of these ever reach a recipient.

use chrono::NaiveDate;

use crate::detect::DuplicateDate;
use crate::error::StageError;

/// Body used on the admin quiet-copy path when nothing was detected.
pub const NOTHING_TO_NOTIFY: &str = "Nothing to notify - Admin Only Message";

/// Separator line between the missing and duplicate sections of a combined
/// message.
const SECTION_SEPARATOR: &str = "-Additionally-";

/// Title for every notification: project name, fixed separator, today's
/// date in ISO form.
#[must_use]
pub fn compose_title(project_name: &str, today: NaiveDate) -> String {
    format!("{project_name} Notice | {}", today.format("%Y-%m-%d"))
}

/// Missing-dates section: preamble, one ISO date per line ascending, fixed
/// call-to-action footer.
#[must_use]
pub fn missing_body(missing: &[NaiveDate]) -> String {
    let lines = missing
        .iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Missing data for...\n{lines}\n\n(Date format is Year, Month, Day)\n\n\
         Please enter the data ASAP\nbefore you forget how the\nday went!"
    )
}

/// Duplicate-dates section: preamble, one `date | Duplicated N times` line
/// per entry ascending, fixed remediation footer.
#[must_use]
pub fn duplicate_body(duplicates: &[DuplicateDate]) -> String {
    let lines = duplicates
        .iter()
        .map(|d| format!("{} | Duplicated {} times", d.date.format("%Y-%m-%d"), d.count))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Duplicate dates detected...\n{lines}\n\nPlease fix this in the data")
}

/// The body the primary recipient sees: missing section first, duplicate
/// section second, joined by the separator when both are present. Falls back
/// to the [`NOTHING_TO_NOTIFY`] placeholder when there is nothing to report.
#[must_use]
pub fn combined_body(missing: &[NaiveDate], duplicates: &[DuplicateDate]) -> String {
    match (missing.is_empty(), duplicates.is_empty()) {
        (false, false) => format!(
            "{}\n\n{SECTION_SEPARATOR}\n\n{}",
            missing_body(missing),
            duplicate_body(duplicates)
        ),
        (false, true) => missing_body(missing),
        (true, false) => duplicate_body(duplicates),
        (true, true) => NOTHING_TO_NOTIFY.to_owned(),
    }
}

/// Admin error notice: every recorded stage failure, verbatim, one per line.
#[must_use]
pub fn error_notice_body(errors: &[StageError]) -> String {
    let lines = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    format!("ADMIN ONLY NOTICE:\n\nThere were errors running the audit...\n\n{lines}")
}
