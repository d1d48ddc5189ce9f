// ABOUTME: In-memory recipe store backed by a single RwLock-guarded snapshot
// ABOUTME: Default backend; contents are lost when the process exits
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::RecipeStore;
use crate::errors::AppResult;
use crate::models::{RecipeDetailBatch, RecipeSummary};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Slots {
    summaries: Option<Arc<Vec<RecipeSummary>>>,
    details: Option<Arc<RecipeDetailBatch>>,
}

/// Process-local store
///
/// Both collections live behind one lock so replacing the summaries and
/// discarding the old detail batch is a single step.
#[derive(Clone, Default)]
pub struct InMemoryRecipeStore {
    slots: Arc<RwLock<Slots>>,
}

impl InMemoryRecipeStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn replace_summaries(&self, summaries: Vec<RecipeSummary>) -> AppResult<()> {
        let mut slots = self.slots.write().await;
        slots.summaries = Some(Arc::new(summaries));
        slots.details = None;
        drop(slots);
        Ok(())
    }

    async fn replace_details(&self, batch: RecipeDetailBatch) -> AppResult<bool> {
        let mut slots = self.slots.write().await;
        let current = slots
            .summaries
            .as_ref()
            .is_some_and(|summaries| batch.fetched_for(summaries));
        if current {
            slots.details = Some(Arc::new(batch));
        }
        drop(slots);
        Ok(current)
    }

    async fn summaries(&self) -> AppResult<Option<Vec<RecipeSummary>>> {
        let summaries = self.slots.read().await.summaries.clone();
        Ok(summaries.map(|summaries| summaries.as_ref().clone()))
    }

    async fn details(&self) -> AppResult<Option<RecipeDetailBatch>> {
        let details = self.slots.read().await.details.clone();
        Ok(details.map(|batch| batch.as_ref().clone()))
    }

    async fn health_check(&self) -> AppResult<()> {
        // In-memory store is always healthy
        Ok(())
    }

    async fn clear_all(&self) -> AppResult<()> {
        *self.slots.write().await = Slots::default();
        Ok(())
    }
}
