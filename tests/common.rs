// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-process fake upstream APIs, fixtures and a router factory
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `foodlink_server`
//!
//! The fakes implement the upstream client traits with canned JSON so
//! services and routes run without network access.

use async_trait::async_trait;
use foodlink_server::config::{
    CorsConfig, Environment, ExternalServicesConfig, ServerConfig, StoreBackend,
};
use foodlink_server::constants::service_names;
use foodlink_server::errors::{AppError, AppResult};
use foodlink_server::external::{PlacesApi, ProductApi, RecipeApi};
use foodlink_server::models::{
    InstructionSet, LatLng, NearbySearchResponse, PlaceDetailsResponse, RecipeSummary,
    UpcLookupResponse,
};
use foodlink_server::server::{build_router, ServerResources};
use foodlink_server::store::Store;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// A search result as Spoonacular returns it
pub fn summary(id: u64, title: &str, missed: &[&str]) -> RecipeSummary {
    let missed: Vec<Value> = missed
        .iter()
        .map(|original| json!({"original": original, "amount": 1.0}))
        .collect();

    serde_json::from_value(json!({
        "id": id,
        "title": title,
        "image": format!("https://img.spoonacular.com/recipes/{id}-312x231.jpg"),
        "missedIngredients": missed,
        "usedIngredientCount": 1
    }))
    .unwrap()
}

/// One step group whose steps each use the listed equipment
pub fn instructions(steps: &[(&str, &[&str])]) -> InstructionSet {
    let steps: Vec<Value> = steps
        .iter()
        .enumerate()
        .map(|(index, (text, equipment))| {
            let equipment: Vec<Value> = equipment
                .iter()
                .map(|name| json!({"id": 404_784, "name": name, "localizedName": name}))
                .collect();
            json!({"number": index + 1, "step": text, "equipment": equipment, "ingredients": []})
        })
        .collect();

    serde_json::from_value(json!([{"name": "", "steps": steps}])).unwrap()
}

// ============================================================================
// Fake recipe API
// ============================================================================

/// Canned Spoonacular responses
#[derive(Default)]
pub struct FakeRecipeApi {
    summaries: Vec<RecipeSummary>,
    instructions: HashMap<u64, InstructionSet>,
    failing_recipes: HashMap<u64, u16>,
    search_status: Option<u16>,
    searches: Mutex<Vec<Vec<String>>>,
    instruction_calls: Mutex<Vec<u64>>,
}

impl FakeRecipeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summaries returned by every search
    pub fn with_summaries(mut self, summaries: Vec<RecipeSummary>) -> Self {
        self.summaries = summaries;
        self
    }

    /// Instructions returned for one recipe
    pub fn with_instructions(mut self, recipe_id: u64, instructions: InstructionSet) -> Self {
        self.instructions.insert(recipe_id, instructions);
        self
    }

    /// Make the instruction fetch for one recipe answer with an HTTP error
    pub fn failing_instructions(mut self, recipe_id: u64, status: u16) -> Self {
        self.failing_recipes.insert(recipe_id, status);
        self
    }

    /// Make every search answer with an HTTP error
    pub fn failing_search(mut self, status: u16) -> Self {
        self.search_status = Some(status);
        self
    }

    /// Ingredient lists passed to the search, in call order
    pub fn searches(&self) -> Vec<Vec<String>> {
        self.searches.lock().unwrap().clone()
    }

    /// Recipe ids passed to the instruction fetch, in call order
    pub fn instruction_calls(&self) -> Vec<u64> {
        self.instruction_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecipeApi for FakeRecipeApi {
    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
        _count: u32,
    ) -> AppResult<Vec<RecipeSummary>> {
        self.searches.lock().unwrap().push(ingredients.to_vec());
        if let Some(status) = self.search_status {
            return Err(AppError::upstream_status(
                service_names::SPOONACULAR_API,
                status,
                "search failed",
            ));
        }
        Ok(self.summaries.clone())
    }

    async fn analyzed_instructions(&self, recipe_id: u64) -> AppResult<InstructionSet> {
        self.instruction_calls.lock().unwrap().push(recipe_id);
        if let Some(&status) = self.failing_recipes.get(&recipe_id) {
            return Err(AppError::upstream_status(
                service_names::SPOONACULAR_API,
                status,
                "instructions failed",
            ));
        }
        Ok(self
            .instructions
            .get(&recipe_id)
            .cloned()
            .unwrap_or_default())
    }
}

// ============================================================================
// Fake places API
// ============================================================================

/// Canned Google Maps responses
pub struct FakePlacesApi {
    geocode: Value,
    nearby: Value,
    details: HashMap<String, Value>,
    failing_details: HashMap<String, u16>,
    detail_calls: Mutex<Vec<String>>,
    nearby_calls: Mutex<Vec<LatLng>>,
}

impl Default for FakePlacesApi {
    fn default() -> Self {
        Self {
            geocode: geocode_ok(47.6062, -122.3321),
            nearby: json!({"results": [], "status": "ZERO_RESULTS"}),
            details: HashMap::new(),
            failing_details: HashMap::new(),
            detail_calls: Mutex::new(Vec::new()),
            nearby_calls: Mutex::new(Vec::new()),
        }
    }
}

/// Successful geocoding body for one location
pub fn geocode_ok(lat: f64, lng: f64) -> Value {
    json!({
        "results": [{
            "formatted_address": "Seattle, WA 98101, USA",
            "geometry": {"location": {"lat": lat, "lng": lng}, "location_type": "APPROXIMATE"}
        }],
        "status": "OK"
    })
}

/// Successful place details body
pub fn details_ok(name: &str, address: &str) -> Value {
    json!({
        "result": {
            "name": name,
            "formatted_address": address,
            "formatted_phone_number": "(206) 555-0100",
            "website": "https://example.org/"
        },
        "status": "OK"
    })
}

impl FakePlacesApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geocode(mut self, body: Value) -> Self {
        self.geocode = body;
        self
    }

    /// Nearby search answering OK with candidates `place-1..=place-count`
    pub fn with_candidates(mut self, count: usize) -> Self {
        let results: Vec<Value> = (1..=count)
            .map(|i| json!({"place_id": format!("place-{i}"), "name": format!("Pantry {i}")}))
            .collect();
        self.nearby = json!({"results": results, "status": "OK"});
        self
    }

    pub fn with_nearby(mut self, body: Value) -> Self {
        self.nearby = body;
        self
    }

    pub fn with_details(mut self, place_id: &str, body: Value) -> Self {
        self.details.insert(place_id.to_owned(), body);
        self
    }

    /// Give every `place-i` candidate successful details
    pub fn with_default_details(mut self, count: usize) -> Self {
        for i in 1..=count {
            self.details.insert(
                format!("place-{i}"),
                details_ok(&format!("Pantry {i}"), &format!("{i} Main St, Seattle, WA")),
            );
        }
        self
    }

    pub fn failing_details(mut self, place_id: &str, status: u16) -> Self {
        self.failing_details.insert(place_id.to_owned(), status);
        self
    }

    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }

    pub fn nearby_calls(&self) -> Vec<LatLng> {
        self.nearby_calls.lock().unwrap().clone()
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &Value) -> AppResult<T> {
    serde_json::from_value(body.clone())
        .map_err(|e| AppError::external_service(service_names::GOOGLE_MAPS_API, e.to_string()))
}

#[async_trait]
impl PlacesApi for FakePlacesApi {
    async fn geocode_raw(&self, _address: &str) -> AppResult<Value> {
        Ok(self.geocode.clone())
    }

    async fn nearby_food_banks(&self, location: LatLng) -> AppResult<NearbySearchResponse> {
        self.nearby_calls.lock().unwrap().push(location);
        decode(&self.nearby)
    }

    async fn place_details(&self, place_id: &str) -> AppResult<PlaceDetailsResponse> {
        self.detail_calls.lock().unwrap().push(place_id.to_owned());
        if let Some(&status) = self.failing_details.get(place_id) {
            return Err(AppError::upstream_status(
                service_names::GOOGLE_MAPS_API,
                status,
                "details failed",
            ));
        }
        match self.details.get(place_id) {
            Some(body) => decode(body),
            None => decode(&json!({"status": "NOT_FOUND"})),
        }
    }
}

// ============================================================================
// Fake product API
// ============================================================================

/// Canned UPCitemdb responses keyed by UPC
#[derive(Default)]
pub struct FakeProductApi {
    products: HashMap<String, Value>,
    status: Option<u16>,
}

impl FakeProductApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, upc: &str, title: &str) -> Self {
        self.products.insert(
            upc.to_owned(),
            json!({"code": "OK", "total": 1, "items": [{"ean": upc, "title": title}]}),
        );
        self
    }

    pub fn failing(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

#[async_trait]
impl ProductApi for FakeProductApi {
    async fn lookup_upc(&self, upc: &str) -> AppResult<UpcLookupResponse> {
        if let Some(status) = self.status {
            return Err(AppError::upstream_status(
                service_names::UPC_LOOKUP_API,
                status,
                "TOO_FAST",
            ));
        }
        let body = self
            .products
            .get(upc)
            .cloned()
            .unwrap_or_else(|| json!({"code": "OK", "total": 0, "items": []}));
        serde_json::from_value(body)
            .map_err(|e| AppError::external_service(service_names::UPC_LOOKUP_API, e.to_string()))
    }
}

// ============================================================================
// Server helpers
// ============================================================================

/// Configuration for router tests (memory store, fixed CORS origin)
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        environment: Environment::Testing,
        cors: CorsConfig {
            allowed_origins: "http://localhost:5173".to_owned(),
        },
        store: StoreBackend::Memory,
        external_services: ExternalServicesConfig::default(),
    }
}

/// Router over the given fakes and an in-memory store
pub fn test_router(
    recipe_api: Arc<FakeRecipeApi>,
    places_api: Arc<FakePlacesApi>,
    product_api: Arc<FakeProductApi>,
) -> axum::Router {
    test_router_with_config(&test_config(), recipe_api, places_api, product_api)
}

/// Router over the given fakes with a custom configuration
pub fn test_router_with_config(
    config: &ServerConfig,
    recipe_api: Arc<FakeRecipeApi>,
    places_api: Arc<FakePlacesApi>,
    product_api: Arc<FakeProductApi>,
) -> axum::Router {
    init_test_logging();
    let resources = ServerResources::new(recipe_api, places_api, product_api, Store::memory());
    build_router(Arc::new(resources), config)
}
