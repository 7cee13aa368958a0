use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid processor type '{0}' (expected one of: revolut, intesa, vivid)")]
    InvalidProcessor(String),
    #[error("Missing '{0}' column")]
    MissingColumn(String),
    #[error("No rows found")]
    EmptyInput,
    #[error("Column '{column}' should be {expected}, found '{found}'")]
    TypeMismatch {
        column: String,
        expected: &'static str,
        found: String,
    },
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Vocab error: {0}")]
    Vocab(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    pub fn type_mismatch(column: &str, expected: &'static str, found: impl Into<String>) -> Self {
        Error::TypeMismatch {
            column: column.to_string(),
            expected,
            found: found.into(),
        }
    }
}
