// ABOUTME: Spoonacular API client for ingredient-based recipe search and analyzed instructions
// ABOUTME: Defines the RecipeApi seam used by the recipe service
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Spoonacular API Client
//!
//! # API Reference
//! Spoonacular food API: <https://spoonacular.com/food-api/docs>
//!
//! # Example
//! ```rust,no_run
//! use foodlink_server::external::{RecipeApi, SpoonacularClient, SpoonacularClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SpoonacularClient::new(SpoonacularClientConfig {
//!     api_key: "your_api_key".to_owned(),
//!     ..SpoonacularClientConfig::default()
//! });
//! let recipes = client
//!     .find_by_ingredients(&["apples".to_owned(), "flour".to_owned()], 2)
//!     .await?;
//! # Ok(())
//! # }
//! ```

use super::fetch_json;
use crate::constants::{api_urls, recipes::INGREDIENT_DELIMITER, service_names};
use crate::errors::AppResult;
use crate::models::{InstructionSet, RecipeSummary};

/// Recipe search and instruction lookup
#[async_trait::async_trait]
pub trait RecipeApi: Send + Sync {
    /// Recipes that use the given ingredients, best match first
    ///
    /// # Errors
    ///
    /// Returns an external service error if the call fails
    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
        count: u32,
    ) -> AppResult<Vec<RecipeSummary>>;

    /// Analyzed step-by-step instructions for one recipe
    ///
    /// # Errors
    ///
    /// Returns an external service error if the call fails
    async fn analyzed_instructions(&self, recipe_id: u64) -> AppResult<InstructionSet>;
}

/// Spoonacular client configuration
#[derive(Debug, Clone)]
pub struct SpoonacularClientConfig {
    /// Spoonacular API key
    pub api_key: String,
    /// Base URL without trailing slash (default: <https://api.spoonacular.com>)
    pub base_url: String,
}

impl Default for SpoonacularClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: api_urls::SPOONACULAR_BASE_URL.to_owned(),
        }
    }
}

/// Spoonacular REST client
pub struct SpoonacularClient {
    config: SpoonacularClientConfig,
    http_client: reqwest::Client,
}

impl SpoonacularClient {
    /// Create a new Spoonacular client
    #[must_use]
    pub fn new(config: SpoonacularClientConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl RecipeApi for SpoonacularClient {
    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
        count: u32,
    ) -> AppResult<Vec<RecipeSummary>> {
        let endpoint = "/recipes/findByIngredients";
        let url = format!("{}{endpoint}", self.config.base_url);
        let request = self.http_client.get(&url).query(&[
            ("ingredients", ingredients.join(INGREDIENT_DELIMITER)),
            ("number", count.to_string()),
            ("apiKey", self.config.api_key.clone()),
        ]);

        fetch_json(request, service_names::SPOONACULAR_API, endpoint).await
    }

    async fn analyzed_instructions(&self, recipe_id: u64) -> AppResult<InstructionSet> {
        let endpoint = format!("/recipes/{recipe_id}/analyzedInstructions");
        let url = format!("{}{endpoint}", self.config.base_url);
        let request = self
            .http_client
            .get(&url)
            .query(&[("apiKey", &self.config.api_key)]);

        fetch_json(request, service_names::SPOONACULAR_API, &endpoint).await
    }
}
