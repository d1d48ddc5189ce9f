// ABOUTME: Integration tests for the recipe store backends
// ABOUTME: Verifies replacement semantics, detail invalidation and file store durability
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use anyhow::Result;
use common::{instructions, summary};
use foodlink_server::config::StoreBackend;
use foodlink_server::constants::store::{DETAILS_FILE, SUMMARIES_FILE};
use foodlink_server::models::RecipeDetailBatch;
use foodlink_server::store::{JsonFileRecipeStore, RecipeStore, Store};
use tempfile::TempDir;

fn sample_batch() -> RecipeDetailBatch {
    RecipeDetailBatch::from_fetched(vec![
        (1, instructions(&[("Chop.", &["knife"])])),
        (2, instructions(&[("Stir.", &["spoon"])])),
    ])
}

/// Behavior every backend must share
async fn check_replacement_semantics(store: &dyn RecipeStore) -> Result<()> {
    assert!(store.summaries().await?.is_none());
    assert!(store.details().await?.is_none());

    let first = vec![summary(1, "Salad", &["lettuce"]), summary(2, "Soup", &[])];
    store.replace_summaries(first.clone()).await?;
    assert!(store.replace_details(sample_batch()).await?);
    assert_eq!(store.summaries().await?, Some(first));
    assert_eq!(store.details().await?, Some(sample_batch()));

    // A new search replaces the summaries and drops the old batch
    let second = vec![summary(3, "Stew", &["beef"])];
    store.replace_summaries(second.clone()).await?;
    assert_eq!(store.summaries().await?, Some(second));
    assert!(store.details().await?.is_none());

    // A batch fetched for the previous search is refused
    assert!(!store.replace_details(sample_batch()).await?);
    assert!(store.details().await?.is_none());

    store.health_check().await?;
    store.clear_all().await?;
    assert!(store.summaries().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_memory_store_replacement() -> Result<()> {
    common::init_test_logging();
    check_replacement_semantics(&Store::memory()).await
}

#[tokio::test]
async fn test_file_store_replacement() -> Result<()> {
    common::init_test_logging();
    let dir = TempDir::new()?;
    let store = Store::new(&StoreBackend::File {
        data_dir: dir.path().to_path_buf(),
    })
    .await?;
    assert_eq!(store.backend_name(), "file");

    check_replacement_semantics(&store).await
}

#[tokio::test]
async fn test_file_store_survives_reopen() -> Result<()> {
    let dir = TempDir::new()?;
    let summaries = vec![
        summary(1, "Apple Crumble", &["1 cup oats"]),
        summary(2, "Apple Pie", &[]),
    ];

    {
        let store = JsonFileRecipeStore::open(dir.path()).await?;
        store.replace_summaries(summaries.clone()).await?;
        assert!(store.replace_details(sample_batch()).await?);
    }

    let reopened = JsonFileRecipeStore::open(dir.path()).await?;
    assert_eq!(reopened.summaries().await?, Some(summaries));
    assert_eq!(reopened.details().await?, Some(sample_batch()));
    Ok(())
}

#[tokio::test]
async fn test_file_store_writes_plain_json_documents() -> Result<()> {
    let dir = TempDir::new()?;
    let store = JsonFileRecipeStore::open(dir.path()).await?;
    store
        .replace_summaries(vec![summary(1, "Toast", &["bread"]), summary(2, "Jam", &[])])
        .await?;
    assert!(store.replace_details(sample_batch()).await?);

    let summaries: serde_json::Value =
        serde_json::from_slice(&std::fs::read(dir.path().join(SUMMARIES_FILE))?)?;
    assert_eq!(summaries[0]["id"], 1);
    assert_eq!(summaries[0]["missedIngredients"][0]["original"], "bread");

    let details: serde_json::Value =
        serde_json::from_slice(&std::fs::read(dir.path().join(DETAILS_FILE))?)?;
    assert_eq!(details["recipe_ids"], serde_json::json!([1, 2]));

    // Only the two documents remain; temp files were renamed away
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_file_store_creates_missing_directory() -> Result<()> {
    let dir = TempDir::new()?;
    let nested = dir.path().join("state").join("recipes");

    let store = JsonFileRecipeStore::open(&nested).await?;
    store.health_check().await?;
    assert!(nested.is_dir());
    assert_eq!(store.data_dir(), nested.as_path());
    Ok(())
}

#[tokio::test]
async fn test_concurrent_writers_leave_a_whole_collection() -> Result<()> {
    let dir = TempDir::new()?;
    let store = JsonFileRecipeStore::open(dir.path()).await?;

    let mut handles = Vec::new();
    for id in 1..=8_u64 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let summaries = vec![summary(id, "A", &[]), summary(id * 100, "B", &[])];
            store.replace_summaries(summaries).await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    let stored = store.summaries().await?.unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[1].id, stored[0].id * 100);
    Ok(())
}

#[tokio::test]
async fn test_details_without_summaries_are_refused() -> Result<()> {
    let dir = TempDir::new()?;
    let file = JsonFileRecipeStore::open(dir.path()).await?;
    let memory = Store::memory();

    for store in [&file as &dyn RecipeStore, &memory] {
        assert!(!store.replace_details(sample_batch()).await?);
        assert!(store.details().await?.is_none());
    }
    assert!(!dir.path().join(DETAILS_FILE).exists());
    Ok(())
}
