//! Revolut account statement export.
//!
//! Expected layout:
//!   Type,Product,Started Date,Completed Date,Description,Amount,Fee,Currency,State,Balance
//!   TOPUP,Current,2022-05-01 20:36:10,2022-05-01 20:36:15,Google Pay Top-Up by *3304,10,0,EUR,COMPLETED,10
//!   TRANSFER,Current,2022-05-16 21:01:05,2022-05-16 21:01:08,To Luca Parolari,-10,0,EUR,COMPLETED,0

use cashflow_core::{Frame, Result};
use tracing::debug;

use super::{is_nonzero, lowercase, to_number, to_timestamp};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const COMPLETED: &str = "COMPLETED";

const DROPPED_COLUMNS: [&str; 7] = [
    "Type",
    "Product",
    "Completed Date",
    "Fee",
    "Currency",
    "State",
    "Balance",
];

pub fn convert(mut frame: Frame) -> Result<Frame> {
    let total = frame.len();

    frame.map_column("Description", lowercase)?;

    let pending = frame.retain_where("State", |c| c.as_text().map(str::trim) == Some(COMPLETED))?;

    frame.map_column("Amount", |c| to_number("Amount", c))?;
    let zero = frame.retain_where("Amount", is_nonzero)?;

    frame.map_column("Started Date", |c| to_timestamp("Started Date", c, DATE_FORMAT))?;

    frame.drop_columns(&DROPPED_COLUMNS)?;
    frame.rename_column("Started Date", "Date")?;

    debug!(total, kept = frame.len(), pending, zero, "revolut: converted");
    Ok(frame)
}
