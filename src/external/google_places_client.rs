// ABOUTME: Google Maps web services client for geocoding, nearby search and place details
// ABOUTME: Defines the PlacesApi seam used by the food bank lookup service
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Google Maps Platform Client
//!
//! Google reports most failures (`ZERO_RESULTS`, `REQUEST_DENIED`, ...) with an
//! HTTP 200 and a `status` field. The client only turns transport failures and
//! non-2xx answers into errors; interpreting `status` is left to the caller.

use super::fetch_json;
use crate::constants::{api_urls, places, service_names};
use crate::errors::{AppError, AppResult};
use crate::models::{GeocodeResponse, LatLng, NearbySearchResponse, PlaceDetailsResponse};
use serde_json::Value;

/// Geocoding and places lookups
#[async_trait::async_trait]
pub trait PlacesApi: Send + Sync {
    /// Geocoding response as returned by upstream
    ///
    /// # Errors
    ///
    /// Returns an external service error if the call fails
    async fn geocode_raw(&self, address: &str) -> AppResult<Value>;

    /// Typed geocoding response
    ///
    /// # Errors
    ///
    /// Returns an external service error if the call fails
    async fn geocode(&self, address: &str) -> AppResult<GeocodeResponse> {
        let raw = self.geocode_raw(address).await?;
        serde_json::from_value(raw).map_err(|e| {
            AppError::external_service(
                service_names::GOOGLE_MAPS_API,
                format!("JSON parse error: {e}"),
            )
        })
    }

    /// Places of the food bank type within the search radius of `location`
    ///
    /// # Errors
    ///
    /// Returns an external service error if the call fails
    async fn nearby_food_banks(&self, location: LatLng) -> AppResult<NearbySearchResponse>;

    /// Contact fields for one place
    ///
    /// # Errors
    ///
    /// Returns an external service error if the call fails
    async fn place_details(&self, place_id: &str) -> AppResult<PlaceDetailsResponse>;
}

/// Google Maps client configuration
#[derive(Clone)]
pub struct GooglePlacesClientConfig {
    /// Google Maps Platform API key
    pub api_key: String,
    /// Base URL without trailing slash (default: <https://maps.googleapis.com>)
    pub base_url: String,
}

impl std::fmt::Debug for GooglePlacesClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GooglePlacesClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for GooglePlacesClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: api_urls::GOOGLE_MAPS_BASE_URL.to_owned(),
        }
    }
}

/// Google Maps web services client
pub struct GooglePlacesClient {
    config: GooglePlacesClientConfig,
    http_client: reqwest::Client,
}

impl GooglePlacesClient {
    /// Create a new Google Maps client
    #[must_use]
    pub fn new(config: GooglePlacesClientConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    fn get(&self, endpoint: &str) -> reqwest::RequestBuilder {
        self.http_client
            .get(format!("{}{endpoint}", self.config.base_url))
            .query(&[("key", &self.config.api_key)])
    }
}

#[async_trait::async_trait]
impl PlacesApi for GooglePlacesClient {
    async fn geocode_raw(&self, address: &str) -> AppResult<Value> {
        let endpoint = "/maps/api/geocode/json";
        let request = self.get(endpoint).query(&[("address", address)]);
        fetch_json(request, service_names::GOOGLE_MAPS_API, endpoint).await
    }

    async fn nearby_food_banks(&self, location: LatLng) -> AppResult<NearbySearchResponse> {
        let endpoint = "/maps/api/place/nearbysearch/json";
        let request = self.get(endpoint).query(&[
            ("location", format!("{},{}", location.lat, location.lng)),
            ("radius", places::SEARCH_RADIUS_METERS.to_string()),
            ("type", places::FOOD_BANK_PLACE_TYPE.to_owned()),
        ]);
        fetch_json(request, service_names::GOOGLE_MAPS_API, endpoint).await
    }

    async fn place_details(&self, place_id: &str) -> AppResult<PlaceDetailsResponse> {
        let endpoint = "/maps/api/place/details/json";
        let request = self
            .get(endpoint)
            .query(&[("place_id", place_id), ("fields", places::DETAIL_FIELDS)]);
        fetch_json(request, service_names::GOOGLE_MAPS_API, endpoint).await
    }
}
