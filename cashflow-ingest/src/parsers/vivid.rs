//! Vivid Money export. Dates are day-first with dots; Description and
//! Amount already carry their canonical names.
//!
//!   Booking Date,Value Date,Type,Description,Amount,Currency,FX-rate,Included Markup
//!   02.03.2023,01.03.2023,Card,REWE Markt,-12.34,EUR,,

use cashflow_core::{Frame, Result};
use tracing::debug;

use super::{to_number, to_timestamp};

const DATE_FORMAT: &str = "%d.%m.%Y";

const DROPPED_COLUMNS: [&str; 6] = [
    "Booking Date",
    "Value Date",
    "Type",
    "Currency",
    "FX-rate",
    "Included Markup",
];

pub fn convert(mut frame: Frame) -> Result<Frame> {
    frame.derive_column("Value Date", "Date", |c| to_timestamp("Value Date", c, DATE_FORMAT))?;
    frame.drop_columns(&DROPPED_COLUMNS)?;
    frame.map_column("Amount", |c| to_number("Amount", c))?;

    debug!(kept = frame.len(), "vivid: converted");
    Ok(frame)
}
