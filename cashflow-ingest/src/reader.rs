//! Load a headed CSV export into a text-only `Frame`.

use cashflow_core::{Cell, Frame, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read a CSV with a header row. Every non-empty field becomes `Cell::Text`,
/// empty fields become `Cell::Empty`; typing is left to the converters.
pub fn read_csv<R: Read>(reader: R) -> Result<Frame> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.strip_prefix('\u{feff}').unwrap_or(h).to_string())
        .collect();

    let mut frame = Frame::new(headers);
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        frame.push_row(record.iter().map(Cell::from_field).collect());
    }

    debug!(rows = frame.len(), columns = frame.headers().len(), "read csv");
    Ok(frame)
}

pub fn read_csv_path(path: impl AsRef<Path>) -> Result<Frame> {
    let file = std::fs::File::open(path.as_ref())?;
    read_csv(file)
}
