use anyhow::Context;
use tracing::warn;

use crate::domain::{compute_balance, parse_amount, Kind, Satang, TransactionRecord};
use crate::storage::KvStore;

use super::AppError;

/// Fixed storage key holding the JSON-serialized ledger.
const RECORDS_KEY: &str = "records";

/// Owns the in-memory ledger and its derived balance, and keeps durable
/// storage consistent with them. This is the primary interface for any
/// client (CLI, TUI, etc.).
///
/// A `LedgerStore` value only exists after the persisted ledger has been
/// loaded, so operations can never observe an uninitialized store.
pub struct LedgerStore {
    repo: KvStore,
    records: Vec<TransactionRecord>,
    balance: Satang,
}

/// Result of appending a transaction.
#[derive(Debug)]
pub struct AddResult {
    pub record: TransactionRecord,
    /// False when the durable write failed. The in-memory ledger still
    /// holds the record; the next cold start may not see it.
    pub persisted: bool,
}

impl LedgerStore {
    /// Open the ledger at the given database path, creating the database
    /// file on first run, and load any persisted records.
    pub async fn open(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}?mode=rwc", database_path);
        let repo = KvStore::init(&db_url).await?;
        Ok(Self::load(repo).await)
    }

    /// Load the persisted ledger from the storage collaborator and
    /// recompute the balance.
    ///
    /// A missing value means a first run and yields an empty ledger. An
    /// unreadable or corrupt value is logged and also degrades to an empty
    /// ledger rather than failing: a fresh ledger is a valid recovery
    /// state, and nothing here should ever take the session down.
    pub async fn load(repo: KvStore) -> Self {
        let records: Vec<TransactionRecord> = match repo.get(RECORDS_KEY).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(records) => records,
                Err(err) => {
                    warn!("Persisted ledger is corrupt, starting empty: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("Failed to read persisted ledger, starting empty: {err:#}");
                Vec::new()
            }
        };

        let balance = compute_balance(&records);
        Self {
            repo,
            records,
            balance,
        }
    }

    /// The ledger, in insertion order.
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Net balance over the ledger (income minus expenses).
    pub fn balance(&self) -> Satang {
        self.balance
    }

    /// Validate a user-entered amount and append a new record.
    ///
    /// Rejected input (empty or non-numeric) leaves the ledger and balance
    /// untouched. On success the full updated ledger is written to storage;
    /// a failed write is logged and reported via [`AddResult::persisted`],
    /// with the in-memory state kept as the source of truth for the
    /// session.
    pub async fn add_transaction(
        &mut self,
        raw_amount: &str,
        kind: Kind,
    ) -> Result<AddResult, AppError> {
        let amount = parse_amount(raw_amount)?;

        let record = TransactionRecord::new(amount, kind);
        self.records.push(record.clone());

        let persisted = match self.persist().await {
            Ok(()) => true,
            Err(err) => {
                warn!("Failed to persist ledger, record kept in memory: {err:#}");
                false
            }
        };

        self.balance = compute_balance(&self.records);

        Ok(AddResult { record, persisted })
    }

    /// Write the full serialized ledger under the fixed storage key.
    async fn persist(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string(&self.records).context("Failed to serialize ledger")?;
        self.repo.set(RECORDS_KEY, &json).await
    }
}
