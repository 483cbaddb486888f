//! Expected-range generation and exception filtering.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use thiserror::Error;

/// Generates the ascending sequence of dates that should have an entry:
/// `start` through the day before `today`, inclusive.
///
/// Today itself is never expected: the entry for a day is only overdue once
/// the day is over. Empty when `start` is after that upper bound. `today` is
/// injected rather than read from the clock so callers control the reference
/// point.
#[must_use]
pub fn expected_range(start: NaiveDate, today: NaiveDate) -> Vec<NaiveDate> {
    let Some(yesterday) = today.pred_opt() else {
        return Vec::new();
    };
    if start > yesterday {
        return Vec::new();
    }
    start.iter_days().take_while(|d| *d <= yesterday).collect()
}

/// An exception-list entry that does not parse as a `YYYY-MM-DD` date.
#[derive(Debug, Error)]
#[error("invalid exception date \"{value}\": {source}")]
pub struct ExceptionParseError {
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Parses the configured `YYYY-MM-DD` exception strings into a date set.
///
/// # Errors
///
/// Returns [`ExceptionParseError`] for the first entry that does not parse;
/// a partially-parsed exception list is never applied.
pub fn parse_exceptions(raw: &[String]) -> Result<BTreeSet<NaiveDate>, ExceptionParseError> {
    raw.iter()
        .map(|value| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| ExceptionParseError {
                value: value.clone(),
                source,
            })
        })
        .collect()
}

/// Removes any date present in `exceptions`, preserving input order.
#[must_use]
pub fn apply_exceptions(dates: Vec<NaiveDate>, exceptions: &BTreeSet<NaiveDate>) -> Vec<NaiveDate> {
    dates
        .into_iter()
        .filter(|d| !exceptions.contains(d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn range_runs_from_start_through_yesterday() {
        let range = expected_range(date(2022, 2, 26), date(2022, 3, 1));
        assert_eq!(
            range,
            vec![date(2022, 2, 26), date(2022, 2, 27), date(2022, 2, 28)]
        );
    }

    #[test]
    fn range_length_matches_day_count() {
        let start = date(2024, 1, 1);
        let today = date(2024, 3, 15);
        let range = expected_range(start, today);
        let expected_len = (today.pred_opt().unwrap() - start).num_days() + 1;
        assert_eq!(range.len() as i64, expected_len);
        // Contiguity: every consecutive pair differs by exactly one day.
        for pair in range.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 1);
        }
    }

    #[test]
    fn start_equal_to_yesterday_yields_single_date() {
        let range = expected_range(date(2022, 3, 1), date(2022, 3, 2));
        assert_eq!(range, vec![date(2022, 3, 1)]);
    }

    #[test]
    fn start_equal_to_today_yields_empty_range() {
        assert!(expected_range(date(2022, 3, 1), date(2022, 3, 1)).is_empty());
    }

    #[test]
    fn start_after_today_yields_empty_range() {
        assert!(expected_range(date(2023, 1, 1), date(2022, 3, 1)).is_empty());
    }

    #[test]
    fn parse_exceptions_accepts_iso_dates() {
        let raw = vec!["2022-05-12".to_string(), "2022-05-10".to_string()];
        let set = parse_exceptions(&raw).expect("valid exception list");
        assert!(set.contains(&date(2022, 5, 12)));
        assert!(set.contains(&date(2022, 5, 10)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn parse_exceptions_rejects_malformed_entry() {
        let raw = vec!["2022-05-12".to_string(), "05/13/2022".to_string()];
        let err = parse_exceptions(&raw).expect_err("slash format must be rejected");
        assert_eq!(err.value, "05/13/2022");
    }

    #[test]
    fn apply_exceptions_removes_members_preserving_order() {
        let dates = vec![date(2022, 2, 26), date(2022, 2, 27), date(2022, 2, 28)];
        let exceptions = [date(2022, 2, 27)].into_iter().collect();
        assert_eq!(
            apply_exceptions(dates, &exceptions),
            vec![date(2022, 2, 26), date(2022, 2, 28)]
        );
    }

    #[test]
    fn apply_exceptions_with_empty_set_is_identity() {
        let dates = vec![date(2022, 2, 26), date(2022, 2, 27)];
        assert_eq!(apply_exceptions(dates.clone(), &BTreeSet::new()), dates);
    }
}
