// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use satang::application::LedgerStore;
use tempfile::TempDir;

/// Helper to create a test store with a temporary database
pub async fn test_store() -> Result<(LedgerStore, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let store = LedgerStore::open(db_path.to_str().unwrap()).await?;
    Ok((store, temp_dir))
}

/// Helper to reopen a store on an existing database (simulates an app restart)
pub async fn reopen_store(temp_dir: &TempDir) -> Result<LedgerStore> {
    let db_path = temp_dir.path().join("test.db");
    Ok(LedgerStore::open(db_path.to_str().unwrap()).await?)
}
