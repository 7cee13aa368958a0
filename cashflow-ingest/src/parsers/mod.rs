//! One converter per export format, plus the cell coercions they share.

pub mod intesa;
pub mod revolut;
pub mod vivid;

use cashflow_core::{Cell, Error, Result};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Coerce a cell into `Cell::Number`. Accepts an optional sign and ","
/// thousands separators: "1,234.56" → 1234.56.
pub(crate) fn to_number(column: &str, cell: &Cell) -> Result<Cell> {
    match cell {
        Cell::Number(_) => Ok(cell.clone()),
        Cell::Text(s) => {
            let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
            let cleaned = cleaned.strip_prefix('+').unwrap_or(&cleaned);
            Decimal::from_str(cleaned)
                .or_else(|_| Decimal::from_scientific(cleaned))
                .map(Cell::Number)
                .map_err(|_| Error::type_mismatch(column, "a number", s.as_str()))
        }
        other => Err(Error::type_mismatch(column, "a number", other.type_name())),
    }
}

/// Coerce a cell into `Cell::Timestamp` using a chrono format. Date-only
/// formats yield midnight.
pub(crate) fn to_timestamp(column: &str, cell: &Cell, format: &str) -> Result<Cell> {
    match cell {
        Cell::Timestamp(_) => Ok(cell.clone()),
        Cell::Text(s) => {
            let s = s.trim();
            NaiveDateTime::parse_from_str(s, format)
                .or_else(|_| {
                    NaiveDate::parse_from_str(s, format).map(|d| d.and_time(chrono::NaiveTime::MIN))
                })
                .map(Cell::Timestamp)
                .map_err(|_| Error::type_mismatch(column, "a timestamp", s))
        }
        other => Err(Error::type_mismatch(column, "a timestamp", other.type_name())),
    }
}

pub(crate) fn lowercase(cell: &Cell) -> Result<Cell> {
    Ok(match cell {
        Cell::Text(s) => Cell::Text(s.to_lowercase()),
        other => other.clone(),
    })
}

pub(crate) fn strip_commas(cell: &Cell) -> Result<Cell> {
    Ok(match cell {
        Cell::Text(s) => Cell::Text(s.replace(',', "")),
        other => other.clone(),
    })
}

pub(crate) fn is_nonzero(cell: &Cell) -> bool {
    cell.as_number().is_none_or(|n| !n.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_number_strips_thousands() {
        let n = to_number("Importo", &Cell::text("1,234.56")).unwrap();
        assert_eq!(n, Cell::Number(Decimal::new(123456, 2)));
        let n = to_number("Amount", &Cell::text(" -10 ")).unwrap();
        assert_eq!(n, Cell::Number(Decimal::from(-10)));
        let n = to_number("Amount", &Cell::text("+3.5")).unwrap();
        assert_eq!(n, Cell::Number(Decimal::new(35, 1)));
    }

    #[test]
    fn test_to_number_rejects_garbage() {
        let err = to_number("Amount", &Cell::text("ten")).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { ref column, .. } if column == "Amount"));
        assert!(to_number("Amount", &Cell::Empty).is_err());
    }

    #[test]
    fn test_to_timestamp_date_only_is_midnight() {
        let cell = to_timestamp("Data", &Cell::text("03/15/2023"), "%m/%d/%Y").unwrap();
        let expected = NaiveDate::from_ymd_opt(2023, 3, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(cell, Cell::Timestamp(expected));
    }

    #[test]
    fn test_to_timestamp_with_time() {
        let cell = to_timestamp("Started Date", &Cell::text("2022-05-24 6:20:07"), "%Y-%m-%d %H:%M:%S")
            .unwrap();
        assert_eq!(cell.to_string(), "2022-05-24 06:20:07");
        assert!(to_timestamp("Started Date", &Cell::text("yesterday"), "%Y-%m-%d %H:%M:%S").is_err());
    }

    #[test]
    fn test_is_nonzero() {
        assert!(!is_nonzero(&Cell::Number(Decimal::ZERO)));
        assert!(!is_nonzero(&Cell::Number(Decimal::new(0, 2))));
        assert!(is_nonzero(&Cell::Number(Decimal::new(1, 2))));
        assert!(is_nonzero(&Cell::Empty));
    }
}
