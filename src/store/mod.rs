// ABOUTME: Recipe store abstraction holding the latest search result and detail batch
// ABOUTME: Pluggable backends (in-memory, JSON files) with whole-collection replacement
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Store factory for selecting a backend from configuration
pub mod factory;
/// JSON file store with atomic document replacement
pub mod file;
/// In-memory store
pub mod memory;

pub use factory::Store;
pub use file::JsonFileRecipeStore;
pub use memory::InMemoryRecipeStore;

use crate::errors::AppResult;
use crate::models::{RecipeDetailBatch, RecipeSummary};

/// Single-slot storage for the most recent recipe search
///
/// The store holds at most one summary collection and one detail batch. Every
/// write replaces a whole collection; readers see either the previous or the
/// new collection, never a mix.
///
/// # Examples
///
/// ```rust,no_run
/// use foodlink_server::store::{InMemoryRecipeStore, RecipeStore};
/// # async fn example() -> foodlink_server::errors::AppResult<()> {
/// let store = InMemoryRecipeStore::new();
/// assert!(store.summaries().await?.is_none());
///
/// store.replace_summaries(Vec::new()).await?;
/// assert_eq!(store.summaries().await?, Some(Vec::new()));
///
/// // Accepted only because it matches the (empty) stored summaries
/// assert!(store.replace_details(Default::default()).await?);
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait RecipeStore: Send + Sync {
    /// Replace the summary collection
    ///
    /// Any detail batch from the previous search is discarded so stale
    /// instructions are never joined with the new summaries.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be persisted
    async fn replace_summaries(&self, summaries: Vec<RecipeSummary>) -> AppResult<()>;

    /// Replace the detail batch if it was fetched for the stored summaries
    ///
    /// The check and the write happen under the store's write lock. A batch
    /// whose recipe ids no longer match the stored summaries (a newer search
    /// landed while it was being fetched) is discarded and `false` returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch cannot be persisted
    async fn replace_details(&self, batch: RecipeDetailBatch) -> AppResult<bool>;

    /// Current summaries, `None` before the first search
    ///
    /// # Errors
    ///
    /// Returns an error if stored data cannot be read
    async fn summaries(&self) -> AppResult<Option<Vec<RecipeSummary>>>;

    /// Current detail batch, `None` until a search has been enriched
    ///
    /// # Errors
    ///
    /// Returns an error if stored data cannot be read
    async fn details(&self) -> AppResult<Option<RecipeDetailBatch>>;

    /// Verify the backend is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable
    async fn health_check(&self) -> AppResult<()>;

    /// Drop both collections
    ///
    /// # Errors
    ///
    /// Returns an error if stored data cannot be removed
    async fn clear_all(&self) -> AppResult<()>;
}
