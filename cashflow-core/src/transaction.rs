//! Canonical transaction row and its derived fields.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::frame::TIMESTAMP_FORMAT;

/// Output column order shared by every source format.
pub const CANONICAL_COLUMNS: [&str; 7] = [
    "UUID",
    "Description",
    "Date",
    "Amount",
    "Category",
    "Budget",
    "Month",
];

/// Length of the hex fingerprint used as row identity.
pub const FINGERPRINT_LEN: usize = 7;

/// A normalized transaction, ready to be written as one output line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub uuid: String,
    pub description: String,
    pub date: NaiveDateTime,
    /// Signed amount in the source currency, passed through unconverted.
    pub amount: Decimal,
    pub category: String,
    pub budget: String,
    pub month: String,
}

impl Transaction {
    /// "May 2022"
    pub fn month_label(date: &NaiveDateTime) -> String {
        date.format("%B %Y").to_string()
    }

    pub fn formatted_date(&self) -> String {
        self.date.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Field values in `CANONICAL_COLUMNS` order.
    pub fn to_record(&self) -> [String; 7] {
        [
            self.uuid.clone(),
            self.description.clone(),
            self.formatted_date(),
            self.amount.to_string(),
            self.category.clone(),
            self.budget.clone(),
            self.month.clone(),
        ]
    }
}

/// Deterministic short identity over (date, amount, description).
///
/// Amounts are normalized first so `10`, `10.0` and `10.00` agree.
/// Collisions are possible and accepted within a single file.
pub fn fingerprint(date: &NaiveDateTime, amount: Decimal, description: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(date.format(TIMESTAMP_FORMAT).to_string().as_bytes());
    hasher.update(amount.normalize().to_string().as_bytes());
    hasher.update(description.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..FINGERPRINT_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let d = ts("2022-05-01 20:36:10");
        let a = Decimal::from(10);
        let first = fingerprint(&d, a, "google pay top-up by *3304");
        let second = fingerprint(&d, a, "google pay top-up by *3304");
        assert_eq!(first, second);
        assert_eq!(first.len(), FINGERPRINT_LEN);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_fingerprint_changes_with_each_field() {
        let d = ts("2022-05-01 20:36:10");
        let a = Decimal::from(10);
        let base = fingerprint(&d, a, "coffee");

        assert_ne!(base, fingerprint(&ts("2022-05-02 20:36:10"), a, "coffee"));
        assert_ne!(base, fingerprint(&d, Decimal::from(11), "coffee"));
        assert_ne!(base, fingerprint(&d, a, "tea"));
    }

    #[test]
    fn test_fingerprint_ignores_trailing_zeros() {
        let d = ts("2022-05-01 00:00:00");
        let a = fingerprint(&d, Decimal::from_str("10").unwrap(), "x");
        let b = fingerprint(&d, Decimal::from_str("10.00").unwrap(), "x");
        assert_eq!(a, b);
    }

    #[test]
    fn test_month_label_and_record() {
        let d = ts("2022-05-24 06:20:07");
        assert_eq!(Transaction::month_label(&d), "May 2022");

        let txn = Transaction {
            uuid: "abc1234".into(),
            description: "payment from parolari luca".into(),
            date: d,
            amount: Decimal::from(250),
            category: "income".into(),
            budget: "utilities".into(),
            month: Transaction::month_label(&d),
        };
        let rec = txn.to_record();
        assert_eq!(rec[2], "2022-05-24 06:20:07");
        assert_eq!(rec[3], "250");
        assert_eq!(rec[6], "May 2022");
    }
}
