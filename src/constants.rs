// ABOUTME: Application constants grouped by domain (upstream APIs, lookups, env config)
// ABOUTME: Fixed query parameters shared by the recipe, places and product clients
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Constants module

/// Service names used in logs and error messages
pub mod service_names {
    /// This server
    pub const FOODLINK_SERVER: &str = "foodlink-server";
    /// Spoonacular recipe API
    pub const SPOONACULAR_API: &str = "Spoonacular API";
    /// Google Maps Platform (geocoding + places)
    pub const GOOGLE_MAPS_API: &str = "Google Maps API";
    /// UPCitemdb product lookup
    pub const UPC_LOOKUP_API: &str = "UPCitemdb API";
}

/// Default upstream base URLs
pub mod api_urls {
    /// Spoonacular REST API
    pub const SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";
    /// Google Maps Platform web services
    pub const GOOGLE_MAPS_BASE_URL: &str = "https://maps.googleapis.com";
    /// UPCitemdb trial endpoint host
    pub const UPC_LOOKUP_BASE_URL: &str = "https://api.upcitemdb.com";
}

/// Recipe search parameters
pub mod recipes {
    /// Number of recipes requested per ingredient search
    pub const SEARCH_RESULT_COUNT: u32 = 2;
    /// Separator placed between ingredients in the search query
    pub const INGREDIENT_DELIMITER: &str = ", ";
    /// Separator between ingredients in the `/giveIngredients` request body
    pub const CLIENT_INGREDIENT_SEPARATOR: char = '&';
}

/// Food bank lookup parameters
pub mod places {
    /// Place type searched around the geocoded postal code
    pub const FOOD_BANK_PLACE_TYPE: &str = "charity";
    /// Search radius in meters (50 km)
    pub const SEARCH_RADIUS_METERS: u32 = 50_000;
    /// Maximum number of nearby candidates enriched with details
    pub const MAX_FOOD_BANKS: usize = 5;
    /// Fields requested from the place details endpoint
    pub const DETAIL_FIELDS: &str = "name,formatted_address,formatted_phone_number,website";
    /// Status reported by Google Maps web services on success
    pub const STATUS_OK: &str = "OK";
}

/// Recipe store defaults
pub mod store {
    /// Default data directory for the file-backed store
    pub const DEFAULT_DATA_DIR: &str = "./data";
    /// Document holding the latest recipe search result
    pub const SUMMARIES_FILE: &str = "recipes.json";
    /// Document holding the latest recipe detail batch
    pub const DETAILS_FILE: &str = "recipe_details.json";
}

/// Environment-based configuration
pub mod env_config {
    use std::env;

    /// Get HTTP server port from environment or default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8000)
    }

    /// Get allowed CORS origins from environment or default
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".to_owned())
    }
}
