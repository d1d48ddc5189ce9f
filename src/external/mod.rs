// ABOUTME: External API client modules (Spoonacular, Google Maps, UPCitemdb)
// ABOUTME: Shared request helper that times, logs and classifies upstream responses
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! External API Clients
//!
//! Each upstream sits behind an async trait so services can be exercised
//! against in-process fakes. The reqwest-backed implementations share
//! [`fetch_json`] for status handling and call logging.

pub mod google_places_client;
pub mod spoonacular_client;
pub mod upc_client;

// Re-export commonly used types
pub use google_places_client::{GooglePlacesClient, GooglePlacesClientConfig, PlacesApi};
pub use spoonacular_client::{RecipeApi, SpoonacularClient, SpoonacularClientConfig};
pub use upc_client::{ProductApi, UpcItemDbClient, UpcItemDbClientConfig};

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use serde::de::DeserializeOwned;
use std::time::Instant;

/// Upstream error bodies are cut to this many characters in error messages
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Send a request and decode a JSON body
///
/// `endpoint` is the path used in logs; it never carries query parameters, so
/// API keys stay out of the output.
///
/// # Errors
///
/// Returns an external service error on network failure, a non-2xx status
/// (carrying that status) or an undecodable body
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    service: &str,
    endpoint: &str,
) -> AppResult<T> {
    let started = Instant::now();
    let response = request.send().await.map_err(|e| {
        // reqwest includes the URL (and with it the key) in its message
        let e = e.without_url();
        AppLogger::log_upstream_failure(service, endpoint, &e.to_string());
        AppError::external_service(service, format!("request to {endpoint} failed: {e}"))
    })?;

    let status = response.status();
    AppLogger::log_upstream_call(service, endpoint, status.as_u16(), started.elapsed());

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let body: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        return Err(AppError::upstream_status(service, status.as_u16(), &body));
    }

    response.json::<T>().await.map_err(|e| {
        AppError::external_service(service, format!("JSON parse error: {}", e.without_url()))
    })
}
