mod common;

use anyhow::Result;
use common::{reopen_store, test_store};
use satang::application::AppError;
use satang::domain::Kind;

#[tokio::test]
async fn test_fresh_store_is_empty() -> Result<()> {
    let (store, _temp) = test_store().await?;

    assert!(store.records().is_empty());
    assert_eq!(store.balance(), 0);

    Ok(())
}

#[tokio::test]
async fn test_add_income() -> Result<()> {
    let (mut store, _temp) = test_store().await?;

    let result = store.add_transaction("100", Kind::Income).await?;

    assert!(result.persisted);
    assert_eq!(result.record.amount, 10000);
    assert_eq!(result.record.kind, Kind::Income);
    assert_eq!(store.records().len(), 1);
    assert_eq!(store.balance(), 10000);

    Ok(())
}

#[tokio::test]
async fn test_add_expense_subtracts_from_balance() -> Result<()> {
    let (mut store, _temp) = test_store().await?;

    store.add_transaction("100", Kind::Income).await?;
    let before = store.balance();

    store.add_transaction("30", Kind::Expense).await?;

    assert_eq!(store.balance(), before - 3000);

    Ok(())
}

#[tokio::test]
async fn test_records_keep_insertion_order() -> Result<()> {
    let (mut store, _temp) = test_store().await?;

    let first = store.add_transaction("10", Kind::Income).await?.record;
    let second = store.add_transaction("20", Kind::Expense).await?.record;
    let third = store.add_transaction("30", Kind::Income).await?.record;

    let ids: Vec<_> = store.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

#[tokio::test]
async fn test_empty_amount_is_rejected() -> Result<()> {
    let (mut store, _temp) = test_store().await?;

    let err = store.add_transaction("", Kind::Income).await.unwrap_err();

    assert!(matches!(err, AppError::EmptyAmount));
    assert!(store.records().is_empty());
    assert_eq!(store.balance(), 0);

    Ok(())
}

#[tokio::test]
async fn test_non_numeric_amount_is_rejected() -> Result<()> {
    let (mut store, _temp) = test_store().await?;

    store.add_transaction("100", Kind::Income).await?;
    store.add_transaction("30", Kind::Expense).await?;

    let err = store
        .add_transaction("abc", Kind::Expense)
        .await
        .unwrap_err();

    // Ledger and balance are untouched by the rejected entry
    assert!(matches!(err, AppError::InvalidAmount(_)));
    assert_eq!(store.records().len(), 2);
    assert_eq!(store.balance(), 7000);

    Ok(())
}

#[tokio::test]
async fn test_multibyte_amount_is_rejected() -> Result<()> {
    let (mut store, _temp) = test_store().await?;

    let err = store
        .add_transaction("5.1\u{20a9}00", Kind::Expense)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidAmount(_)));
    assert!(store.records().is_empty());
    assert_eq!(store.balance(), 0);

    Ok(())
}

#[tokio::test]
async fn test_negative_amount_is_rejected() -> Result<()> {
    let (mut store, _temp) = test_store().await?;

    let err = store
        .add_transaction("-50", Kind::Expense)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidAmount(_)));
    assert!(store.records().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_income_expense_reload_scenario() -> Result<()> {
    let (mut store, temp) = test_store().await?;

    store.add_transaction("100", Kind::Income).await?;
    assert_eq!(store.balance(), 10000);
    assert_eq!(store.records().len(), 1);

    store.add_transaction("30", Kind::Expense).await?;
    assert_eq!(store.balance(), 7000);
    assert_eq!(store.records().len(), 2);
    assert_eq!(store.records()[0].kind, Kind::Income);
    assert_eq!(store.records()[1].kind, Kind::Expense);

    // Reload from storage: ledger and balance match the in-memory state
    let reloaded = reopen_store(&temp).await?;
    assert_eq!(reloaded.records(), store.records());
    assert_eq!(reloaded.balance(), 7000);

    Ok(())
}
