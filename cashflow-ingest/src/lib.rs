//! cashflow-ingest: CSV loading and per-source converters into the canonical frame shape.

pub mod parsers;
pub mod processor;
pub mod reader;

pub use processor::Processor;
pub use reader::{read_csv, read_csv_path};
