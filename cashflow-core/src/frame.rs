//! Column-addressed in-memory table used between CSV load and the pipeline.
//!
//! Source converters are expressed as a handful of column operations
//! (rename, drop, map, filter) over a `Frame`. Every operation that names a
//! column fails with `Error::MissingColumn` when the column is absent.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::fmt;

use crate::error::{Error, Result};

/// Timestamp rendering shared by `Cell` display and the canonical output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(Decimal),
    Timestamp(NaiveDateTime),
}

impl Cell {
    /// Raw CSV field: empty strings become `Empty`, everything else is text.
    pub fn from_field(field: &str) -> Self {
        if field.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(field.to_string())
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Cell::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::Empty => "empty",
            Cell::Text(_) => "text",
            Cell::Number(_) => "number",
            Cell::Timestamp(_) => "timestamp",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Timestamp(ts) => write!(f, "{}", ts.format(TIMESTAMP_FORMAT)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Frame {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Build a frame from string headers and rows. Short rows are padded with
    /// `Empty`, long rows truncated, so every row matches the header width.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let mut frame = Self::new(headers);
        for row in rows {
            frame.push_row(row);
        }
        frame
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.headers.len(), Cell::Empty);
        self.rows.push(row);
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    /// Cell at (`row`, `column`), if both exist.
    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column).ok()?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }

    /// Replace every cell of `column` with `f(cell)`.
    pub fn map_column<F>(&mut self, column: &str, mut f: F) -> Result<()>
    where
        F: FnMut(&Cell) -> Result<Cell>,
    {
        let idx = self.column_index(column)?;
        for row in &mut self.rows {
            row[idx] = f(&row[idx])?;
        }
        Ok(())
    }

    /// Compute `target` from `source` cell by cell. `target` is overwritten
    /// when it exists and appended otherwise.
    pub fn derive_column<F>(&mut self, source: &str, target: &str, mut f: F) -> Result<()>
    where
        F: FnMut(&Cell) -> Result<Cell>,
    {
        let src = self.column_index(source)?;
        let values = self
            .rows
            .iter()
            .map(|r| f(&r[src]))
            .collect::<Result<Vec<_>>>()?;
        self.set_column(target, values);
        Ok(())
    }

    /// Set a whole column. Missing trailing values are filled with `Empty`.
    pub fn set_column(&mut self, name: &str, values: Vec<Cell>) {
        let idx = match self.column_index(name) {
            Ok(idx) => idx,
            Err(_) => {
                self.headers.push(name.to_string());
                for row in &mut self.rows {
                    row.push(Cell::Empty);
                }
                self.headers.len() - 1
            }
        };
        let mut values = values.into_iter();
        for row in &mut self.rows {
            row[idx] = values.next().unwrap_or(Cell::Empty);
        }
    }

    /// Keep only the rows whose `column` cell satisfies `keep`.
    /// Returns the number of rows dropped.
    pub fn retain_where<F>(&mut self, column: &str, mut keep: F) -> Result<usize>
    where
        F: FnMut(&Cell) -> bool,
    {
        let idx = self.column_index(column)?;
        let before = self.rows.len();
        self.rows.retain(|r| keep(&r[idx]));
        Ok(before - self.rows.len())
    }

    /// Drop the named columns. Nothing is dropped unless all of them exist.
    pub fn drop_columns(&mut self, names: &[&str]) -> Result<()> {
        let mut indices = names
            .iter()
            .map(|n| self.column_index(n))
            .collect::<Result<Vec<_>>>()?;
        indices.sort_unstable();
        indices.dedup();
        for idx in indices.into_iter().rev() {
            self.headers.remove(idx);
            for row in &mut self.rows {
                row.remove(idx);
            }
        }
        Ok(())
    }

    pub fn rename_column(&mut self, from: &str, to: &str) -> Result<()> {
        let idx = self.column_index(from)?;
        self.headers[idx] = to.to_string();
        Ok(())
    }

    pub fn rename_columns(&mut self, pairs: &[(&str, &str)]) -> Result<()> {
        for (from, to) in pairs {
            self.rename_column(from, to)?;
        }
        Ok(())
    }
}
