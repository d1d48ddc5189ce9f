// ABOUTME: UPCitemdb trial API client for barcode to product lookups
// ABOUTME: Defines the ProductApi seam used by the product lookup service
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::fetch_json;
use crate::constants::{api_urls, service_names};
use crate::errors::AppResult;
use crate::models::UpcLookupResponse;

/// Barcode lookup
#[async_trait::async_trait]
pub trait ProductApi: Send + Sync {
    /// Products matching a UPC
    ///
    /// # Errors
    ///
    /// Returns an external service error if the call fails
    async fn lookup_upc(&self, upc: &str) -> AppResult<UpcLookupResponse>;
}

/// UPCitemdb client configuration
#[derive(Debug, Clone)]
pub struct UpcItemDbClientConfig {
    /// Base URL without trailing slash (default: <https://api.upcitemdb.com>)
    pub base_url: String,
}

impl Default for UpcItemDbClientConfig {
    fn default() -> Self {
        Self {
            base_url: api_urls::UPC_LOOKUP_BASE_URL.to_owned(),
        }
    }
}

/// UPCitemdb trial endpoint client (no key required)
pub struct UpcItemDbClient {
    config: UpcItemDbClientConfig,
    http_client: reqwest::Client,
}

impl UpcItemDbClient {
    /// Create a new UPCitemdb client
    #[must_use]
    pub fn new(config: UpcItemDbClientConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl ProductApi for UpcItemDbClient {
    async fn lookup_upc(&self, upc: &str) -> AppResult<UpcLookupResponse> {
        let endpoint = "/prod/trial/lookup";
        let request = self
            .http_client
            .get(format!("{}{endpoint}", self.config.base_url))
            .query(&[("upc", upc)]);

        fetch_json(request, service_names::UPC_LOOKUP_API, endpoint).await
    }
}
