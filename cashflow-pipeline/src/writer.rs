//! Render a processed table as CSV in canonical column order.

use cashflow_core::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::pipeline::ProcessedTable;

pub fn write_csv<W: Write>(table: &ProcessedTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(table.columns())?;
    for record in table.records() {
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write through a temp file in the destination directory, then rename it
/// into place. On error the destination is left untouched.
pub fn write_csv_path(table: &ProcessedTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)?;
    write_csv(table, &mut tmp)?;
    tmp.persist(path).map_err(|e| e.error)?;
    debug!(path = %path.display(), rows = table.len(), "wrote csv");
    Ok(())
}
