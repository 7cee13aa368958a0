//! The stage sequence applied to every source format.

use cashflow_core::{
    CANONICAL_COLUMNS, Cell, CategoryClassifier, Error, Frame, Result, Transaction, fingerprint,
};
use cashflow_ingest::Processor;
use tracing::{debug, info};

use crate::validate::{preflight_check, validate};

/// Constant label written to the Budget column unless configured otherwise.
pub const DEFAULT_BUDGET: &str = "utilities";

/// Rows in canonical column order, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedTable {
    columns: Vec<String>,
    transactions: Vec<Transaction>,
}

impl ProcessedTable {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// String fields per row, dates already formatted.
    pub fn records(&self) -> impl Iterator<Item = [String; 7]> + '_ {
        self.transactions.iter().map(Transaction::to_record)
    }
}

pub struct Pipeline<'a> {
    processor: Processor,
    classifier: &'a CategoryClassifier,
    budget: String,
}

impl<'a> Pipeline<'a> {
    pub fn new(processor: Processor, classifier: &'a CategoryClassifier) -> Self {
        Self {
            processor,
            classifier,
            budget: DEFAULT_BUDGET.to_string(),
        }
    }

    pub fn with_budget(mut self, budget: impl Into<String>) -> Self {
        self.budget = budget.into();
        self
    }

    pub fn run(&self, frame: Frame) -> Result<ProcessedTable> {
        let input_rows = frame.len();
        let frame = self.processor.convert(frame)?;

        preflight_check(&frame)?;

        let mut rows = to_transactions(&frame)?;
        add_uuid(&mut rows);
        let classified = add_category(&mut rows, self.classifier);
        add_budget(&mut rows, &self.budget);
        add_month(&mut rows);
        let table = order_columns(rows);

        validate(&table)?;

        info!(
            processor = %self.processor,
            input_rows,
            output_rows = table.len(),
            classified,
            "pipeline finished"
        );
        Ok(table)
    }
}

/// Type the converted frame. `Category` is carried over when the source has
/// one; empty categories are left for `add_category`.
fn to_transactions(frame: &Frame) -> Result<Vec<Transaction>> {
    let description = frame.column_index("Description")?;
    let date = frame.column_index("Date")?;
    let amount = frame.column_index("Amount")?;
    let category = frame.column_index("Category").ok();

    frame
        .rows()
        .iter()
        .map(|row| {
            let date = row[date]
                .as_timestamp()
                .ok_or_else(|| Error::type_mismatch("Date", "a timestamp", row[date].to_string()))?;
            let amount = row[amount]
                .as_number()
                .ok_or_else(|| Error::type_mismatch("Amount", "a number", row[amount].to_string()))?;
            let category = category
                .map(|idx| &row[idx])
                .filter(|c| !c.is_empty())
                .map(Cell::to_string)
                .unwrap_or_default();

            Ok(Transaction {
                uuid: String::new(),
                description: row[description].to_string(),
                date,
                amount,
                category,
                budget: String::new(),
                month: String::new(),
            })
        })
        .collect()
}

fn add_uuid(rows: &mut [Transaction]) {
    for row in rows {
        row.uuid = fingerprint(&row.date, row.amount, &row.description);
    }
}

/// Returns how many rows were classified from the vocab.
fn add_category(rows: &mut [Transaction], classifier: &CategoryClassifier) -> usize {
    let mut classified = 0;
    for row in rows.iter_mut().filter(|r| r.category.is_empty()) {
        row.category = classifier.classify(&row.description).to_string();
        classified += 1;
    }
    debug!(classified, "categories filled");
    classified
}

fn add_budget(rows: &mut [Transaction], budget: &str) {
    for row in rows {
        row.budget = budget.to_string();
    }
}

fn add_month(rows: &mut [Transaction]) {
    for row in rows {
        row.month = Transaction::month_label(&row.date);
    }
}

fn order_columns(transactions: Vec<Transaction>) -> ProcessedTable {
    ProcessedTable {
        columns: CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
        transactions,
    }
}
