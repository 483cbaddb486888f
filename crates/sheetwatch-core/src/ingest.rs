//! Parsing of raw sheet cells into observed entry dates.

use chrono::NaiveDate;
use thiserror::Error;

/// Format the form writes into the date column.
const CELL_DATE_FORMAT: &str = "%m/%d/%Y";

/// A non-blank date cell that does not parse as `MM/DD/YYYY`.
#[derive(Debug, Error)]
#[error("unparseable date cell \"{cell}\": {source}")]
pub struct CellParseError {
    pub cell: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Parses raw cell strings into calendar dates.
///
/// Blank and whitespace-only cells are dropped before parsing. The cell
/// format carries no time component, so two entries on the same day compare
/// equal regardless of when they were submitted.
///
/// # Errors
///
/// Returns [`CellParseError`] for the first non-blank cell that does not
/// parse. The whole column is rejected rather than rows being skipped: a
/// skipped row would show up downstream as a missing date and misdirect the
/// recipient.
pub fn parse_observed_dates(cells: &[String]) -> Result<Vec<NaiveDate>, CellParseError> {
    cells
        .iter()
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .map(|cell| {
            NaiveDate::parse_from_str(cell, CELL_DATE_FORMAT).map_err(|source| CellParseError {
                cell: cell.to_owned(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slash_dates() {
        let cells = vec!["2/26/2022".to_string(), "02/27/2022".to_string()];
        let dates = parse_observed_dates(&cells).expect("valid cells");
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2022, 2, 26).unwrap(),
                NaiveDate::from_ymd_opt(2022, 2, 27).unwrap(),
            ]
        );
    }

    #[test]
    fn drops_blank_and_whitespace_cells() {
        let cells = vec![
            "2/26/2022".to_string(),
            String::new(),
            "   ".to_string(),
            "2/27/2022".to_string(),
        ];
        let dates = parse_observed_dates(&cells).expect("blank cells are dropped");
        assert_eq!(dates.len(), 2);
    }

    #[test]
    fn rejects_iso_formatted_cell() {
        let cells = vec!["2022-02-26".to_string()];
        let err = parse_observed_dates(&cells).expect_err("ISO format is not the cell format");
        assert_eq!(err.cell, "2022-02-26");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(parse_observed_dates(&[]).expect("empty is fine").is_empty());
    }
}
