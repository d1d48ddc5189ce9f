// ABOUTME: Recipe route handlers for ingredient search and the derived recipe views
// ABOUTME: Keeps the legacy camelCase paths the web client already calls
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::errors::AppError;
use crate::models::{InstructionSet, RecipeSummary};
use crate::recipes::parse_ingredients;
use crate::server::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

/// Body of `POST /giveIngredients`
#[derive(Debug, Deserialize)]
pub struct GiveIngredientsRequest {
    /// Ingredients separated by `&`, e.g. `"apples&flour&sugar"`
    pub ingredients: String,
}

/// Recipe routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/giveIngredients", post(Self::handle_give_ingredients))
            .route("/getNecessaryEquipment", get(Self::handle_equipment))
            .route("/getMissingIngredients", get(Self::handle_missing_ingredients))
            .route("/getIngredientSteps", get(Self::handle_steps))
            .route("/getRecipeDetails/:id", get(Self::handle_recipe_details))
            .with_state(resources)
    }

    /// Handle POST /giveIngredients - search recipes and fetch their instructions
    async fn handle_give_ingredients(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<GiveIngredientsRequest>, JsonRejection>,
    ) -> Result<Json<Vec<RecipeSummary>>, AppError> {
        let Json(request) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let ingredients = parse_ingredients(&request.ingredients);

        let summaries = resources.recipes.search_and_enrich(&ingredients).await?;
        Ok(Json(summaries))
    }

    /// Handle GET /getNecessaryEquipment - equipment names per recipe
    async fn handle_equipment(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<Vec<String>>>, AppError> {
        Ok(Json(resources.recipes.equipment_view().await?))
    }

    /// Handle GET /getMissingIngredients - missing ingredient lines per recipe
    async fn handle_missing_ingredients(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<Vec<String>>>, AppError> {
        Ok(Json(resources.recipes.missing_ingredients_view().await?))
    }

    /// Handle GET /getIngredientSteps - rendered steps per recipe
    async fn handle_steps(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<String>>, AppError> {
        Ok(Json(resources.recipes.steps_view().await?))
    }

    /// Handle GET /getRecipeDetails/:id - instructions for one recipe
    async fn handle_recipe_details(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Json<InstructionSet>, AppError> {
        let recipe_id: u64 = id
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_input(format!("Invalid recipe id '{id}'")))?;

        Ok(Json(resources.recipes.detail_by_id(recipe_id).await?))
    }
}
