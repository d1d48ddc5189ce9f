// ABOUTME: Recipe search and enrichment orchestration over the recipe API and store
// ABOUTME: Serves the equipment, missing ingredient, steps and per-recipe detail views
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::shaper;
use crate::constants::recipes::{CLIENT_INGREDIENT_SEPARATOR, SEARCH_RESULT_COUNT};
use crate::errors::{AppError, AppResult};
use crate::external::RecipeApi;
use crate::models::{InstructionSet, RecipeDetailBatch, RecipeSummary};
use crate::store::{RecipeStore, Store};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Split a `&`-separated ingredient list
///
/// Entries are trimmed, blanks dropped and duplicates removed, keeping the
/// first occurrence's position.
#[must_use]
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(CLIENT_INGREDIENT_SEPARATOR)
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .filter(|ingredient| seen.insert(*ingredient))
        .map(str::to_owned)
        .collect()
}

/// Recipe search, enrichment and the views derived from the latest search
#[derive(Clone)]
pub struct RecipeService {
    api: Arc<dyn RecipeApi>,
    store: Store,
}

impl RecipeService {
    /// Create a service over a recipe API and store
    #[must_use]
    pub fn new(api: Arc<dyn RecipeApi>, store: Store) -> Self {
        Self { api, store }
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Search recipes by ingredients and persist the result
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty ingredient list, or the upstream or
    /// storage error that stopped the search
    pub async fn search(&self, ingredients: &[String]) -> AppResult<Vec<RecipeSummary>> {
        if ingredients.is_empty() {
            return Err(AppError::invalid_input(
                "At least one ingredient is required",
            ));
        }

        let summaries = self
            .api
            .find_by_ingredients(ingredients, SEARCH_RESULT_COUNT)
            .await?;
        info!(
            ingredients = ingredients.len(),
            recipes = summaries.len(),
            "Recipe search completed"
        );

        self.store.replace_summaries(summaries.clone()).await?;
        Ok(summaries)
    }

    /// Fetch instructions for every summary, in order, and persist the batch
    ///
    /// Fetches run one after another. If any fetch fails nothing is persisted.
    /// If another search replaced the stored summaries in the meantime the
    /// batch is returned but not persisted, so it is never served next to
    /// the newer summaries.
    ///
    /// # Errors
    ///
    /// Returns the first upstream error, or a storage error
    pub async fn enrich(&self, summaries: &[RecipeSummary]) -> AppResult<RecipeDetailBatch> {
        let mut fetched = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let instructions = self.api.analyzed_instructions(summary.id).await?;
            debug!(
                recipe_id = summary.id,
                groups = instructions.groups().len(),
                "Fetched analyzed instructions"
            );
            fetched.push((summary.id, instructions));
        }

        let batch = RecipeDetailBatch::from_fetched(fetched);
        if !self.store.replace_details(batch.clone()).await? {
            warn!(
                recipes = summaries.len(),
                "Discarded recipe details; a newer search replaced the stored summaries"
            );
        }
        Ok(batch)
    }

    /// Search, then enrich the results
    ///
    /// # Errors
    ///
    /// Returns any error from [`Self::search`] or [`Self::enrich`]
    pub async fn search_and_enrich(
        &self,
        ingredients: &[String],
    ) -> AppResult<Vec<RecipeSummary>> {
        let summaries = self.search(ingredients).await?;
        self.enrich(&summaries).await?;
        Ok(summaries)
    }

    /// Equipment names per recipe of the latest enriched search
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no detail batch is stored
    pub async fn equipment_view(&self) -> AppResult<Vec<Vec<String>>> {
        let batch = self.stored_details().await?;
        Ok(shaper::batch_equipment(&batch)
            .into_iter()
            .map(|names| names.into_iter().collect())
            .collect())
    }

    /// Missing ingredient lines per recipe of the latest search
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no search result is stored
    pub async fn missing_ingredients_view(&self) -> AppResult<Vec<Vec<String>>> {
        let summaries = self.stored_summaries().await?;
        Ok(shaper::batch_missing_ingredients(&summaries))
    }

    /// Rendered step text per recipe of the latest enriched search
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no detail batch is stored
    pub async fn steps_view(&self) -> AppResult<Vec<String>> {
        let batch = self.stored_details().await?;
        Ok(shaper::batch_steps(&batch))
    }

    /// Instructions of one recipe from the latest enriched search
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing is stored, no summary has this id, or the
    /// stored batch does not hold instructions for it
    pub async fn detail_by_id(&self, recipe_id: u64) -> AppResult<InstructionSet> {
        let summaries = self.stored_summaries().await?;
        let index = summaries
            .iter()
            .position(|summary| summary.id == recipe_id)
            .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))?;

        let batch = self.stored_details().await?;
        batch.aligned_at(index, recipe_id).cloned().ok_or_else(|| {
            AppError::not_found(format!("Instructions for recipe {recipe_id}"))
        })
    }

    async fn stored_summaries(&self) -> AppResult<Vec<RecipeSummary>> {
        self.store
            .summaries()
            .await?
            .ok_or_else(|| AppError::not_found("Recipe search result"))
    }

    async fn stored_details(&self) -> AppResult<RecipeDetailBatch> {
        self.store
            .details()
            .await?
            .ok_or_else(|| AppError::not_found("Recipe details"))
    }
}
