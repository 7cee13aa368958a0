//! cashflow-pipeline: convert → preflight → derived fields → ordering → validation,
//! plus CSV output and vocab retraining.

pub mod pipeline;
pub mod retrain;
pub mod validate;
pub mod writer;

pub use pipeline::{DEFAULT_BUDGET, Pipeline, ProcessedTable};
pub use retrain::retrain;
pub use validate::{preflight_check, validate};
pub use writer::{write_csv, write_csv_path};

use cashflow_core::Result;
use std::path::Path;

/// Read `input`, run the pipeline, and write `output`. Nothing is written
/// unless every stage succeeds.
pub fn process_path(
    pipeline: &Pipeline<'_>,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ProcessedTable> {
    let frame = cashflow_ingest::read_csv_path(input)?;
    let table = pipeline.run(frame)?;
    write_csv_path(&table, output)?;
    Ok(table)
}
