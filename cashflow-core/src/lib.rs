//! cashflow-core: shared types for statement normalization (frames, rows, vocab, classifier)

pub mod classifier;
pub mod error;
pub mod frame;
pub mod transaction;
pub mod vocab;

pub use classifier::{CategoryClassifier, UNKNOWN_CATEGORY};
pub use error::{Error, Result};
pub use frame::{Cell, Frame};
pub use transaction::{CANONICAL_COLUMNS, Transaction, fingerprint};
pub use vocab::Vocab;
