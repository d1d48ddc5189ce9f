// ABOUTME: Store factory for configuration-based backend selection
// ABOUTME: Wraps the in-memory and JSON file stores behind one cloneable type
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{InMemoryRecipeStore, JsonFileRecipeStore, RecipeStore};
use crate::config::StoreBackend;
use crate::errors::AppResult;
use crate::models::{RecipeDetailBatch, RecipeSummary};
use tracing::info;

/// Unified recipe store
#[derive(Clone)]
pub enum Store {
    /// Process-local store
    Memory(InMemoryRecipeStore),
    /// JSON documents on disk
    File(JsonFileRecipeStore),
}

impl Store {
    /// Create the store selected by configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the file backend's data directory cannot be created
    pub async fn new(backend: &StoreBackend) -> AppResult<Self> {
        match backend {
            StoreBackend::Memory => {
                info!("Initializing in-memory recipe store");
                Ok(Self::memory())
            }
            StoreBackend::File { data_dir } => {
                info!("Initializing JSON file recipe store at {}", data_dir.display());
                Ok(Self::File(JsonFileRecipeStore::open(data_dir).await?))
            }
        }
    }

    /// Empty in-memory store
    #[must_use]
    pub fn memory() -> Self {
        Self::Memory(InMemoryRecipeStore::new())
    }

    /// Backend name for logs and health output
    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::File(_) => "file",
        }
    }

    fn inner(&self) -> &dyn RecipeStore {
        match self {
            Self::Memory(store) => store,
            Self::File(store) => store,
        }
    }
}

#[async_trait::async_trait]
impl RecipeStore for Store {
    async fn replace_summaries(&self, summaries: Vec<RecipeSummary>) -> AppResult<()> {
        self.inner().replace_summaries(summaries).await
    }

    async fn replace_details(&self, batch: RecipeDetailBatch) -> AppResult<bool> {
        self.inner().replace_details(batch).await
    }

    async fn summaries(&self) -> AppResult<Option<Vec<RecipeSummary>>> {
        self.inner().summaries().await
    }

    async fn details(&self) -> AppResult<Option<RecipeDetailBatch>> {
        self.inner().details().await
    }

    async fn health_check(&self) -> AppResult<()> {
        self.inner().health_check().await
    }

    async fn clear_all(&self) -> AppResult<()> {
        self.inner().clear_all().await
    }
}
