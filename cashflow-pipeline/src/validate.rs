//! Checks run before and after the derived-field stages.

use cashflow_core::{CANONICAL_COLUMNS, Cell, Error, Frame, Result};
use regex::Regex;

use crate::pipeline::ProcessedTable;

const REQUIRED_COLUMNS: [&str; 3] = ["Description", "Date", "Amount"];

/// The converted frame must have rows, the three required columns, and a
/// timestamp in the first Date cell.
pub fn preflight_check(frame: &Frame) -> Result<()> {
    if frame.is_empty() {
        return Err(Error::EmptyInput);
    }

    for column in REQUIRED_COLUMNS {
        frame.column_index(column)?;
    }

    match frame.get(0, "Date") {
        Some(Cell::Timestamp(_)) => Ok(()),
        Some(other) => Err(Error::type_mismatch("Date", "a timestamp", other.type_name())),
        None => Err(Error::MissingColumn("Date".to_string())),
    }
}

/// Final shape check on the processed table.
pub fn validate(table: &ProcessedTable) -> Result<()> {
    if table.columns() != CANONICAL_COLUMNS {
        return Err(Error::Validation(format!(
            "unexpected column order: {}",
            table.columns().join(",")
        )));
    }

    let uuid_re = Regex::new(r"^[0-9a-f]{7}$")?;

    for (i, txn) in table.transactions().iter().enumerate() {
        if !uuid_re.is_match(&txn.uuid) {
            return Err(Error::Validation(format!("row {i}: bad UUID '{}'", txn.uuid)));
        }
        if txn.category.trim().is_empty() {
            return Err(Error::Validation(format!("row {i}: empty Category")));
        }
        if txn.month.trim().is_empty() {
            return Err(Error::Validation(format!("row {i}: empty Month")));
        }
    }

    Ok(())
}
