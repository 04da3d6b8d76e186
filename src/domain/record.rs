use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Satang;

pub type RecordId = Uuid;

/// Whether a record adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Income => write!(f, "income"),
            Kind::Expense => write!(f, "expense"),
        }
    }
}

/// A single user-entered monetary event. Records are immutable - the ledger
/// is append-only and corrections are out of scope.
///
/// The serialized form matches the persisted layout:
/// `{"id": "...", "amount": 5000, "type": "income", "date": "2026-08-25"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: RecordId,
    /// Amount in satang (always non-negative); `kind` carries the sign
    pub amount: Satang,
    #[serde(rename = "type")]
    pub kind: Kind,
    /// Creation date, display-only; never used in computation
    pub date: String,
}

impl TransactionRecord {
    /// Create a new record stamped with a fresh id and today's date.
    pub fn new(amount: Satang, kind: Kind) -> Self {
        assert!(amount >= 0, "Record amount must be non-negative");
        Self {
            id: Uuid::new_v4(),
            amount,
            kind,
            date: Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}
