// ABOUTME: Food bank route handlers for postal-code based lookups
// ABOUTME: Exposes the food bank list and the raw geocoding result for a postal code
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::errors::AppError;
use crate::models::FoodBankEntry;
use crate::server::ServerResources;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;

/// Food bank routes
pub struct FoodBankRoutes;

impl FoodBankRoutes {
    /// Create all food bank routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/foodbanks/:zip", get(Self::handle_food_banks))
            .route("/geocode/:zip", get(Self::handle_geocode))
            .with_state(resources)
    }

    /// Handle GET /foodbanks/:zip - food banks near a postal code
    async fn handle_food_banks(
        State(resources): State<Arc<ServerResources>>,
        Path(zip): Path<String>,
    ) -> Result<Json<Vec<FoodBankEntry>>, AppError> {
        Ok(Json(resources.food_banks.find_near(&zip).await?))
    }

    /// Handle GET /geocode/:zip - geocoding response passed through
    async fn handle_geocode(
        State(resources): State<Arc<ServerResources>>,
        Path(zip): Path<String>,
    ) -> Result<Json<Value>, AppError> {
        Ok(Json(resources.food_banks.geocode_raw(&zip).await?))
    }
}
