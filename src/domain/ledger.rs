use super::{Kind, Satang, TransactionRecord};

/// Compute the net balance over a sequence of records.
/// Balance = sum of income amounts - sum of expense amounts
///
/// The fold is exact integer arithmetic, so the result does not depend on
/// record order even though the ledger preserves insertion order for display.
pub fn compute_balance(records: &[TransactionRecord]) -> Satang {
    records.iter().fold(0, |balance, record| match record.kind {
        Kind::Income => balance + record.amount,
        Kind::Expense => balance - record.amount,
    })
}
