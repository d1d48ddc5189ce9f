// ABOUTME: Product lookup turning a scanned UPC barcode into a product title
// ABOUTME: Lets the client add a scanned item to its ingredient list by name
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::errors::{AppError, AppResult};
use crate::external::ProductApi;
use crate::models::ProductInfo;
use std::sync::Arc;
use tracing::debug;

/// Barcode to product resolution
#[derive(Clone)]
pub struct ProductLookupService {
    api: Arc<dyn ProductApi>,
}

impl ProductLookupService {
    /// Create a service over a product API
    #[must_use]
    pub fn new(api: Arc<dyn ProductApi>) -> Self {
        Self { api }
    }

    /// Resolve a UPC to its first matching product
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless the UPC is all digits, `NotFound` when no
    /// product matches, or the upstream error
    pub async fn lookup(&self, upc: &str) -> AppResult<ProductInfo> {
        let upc = upc.trim();
        if upc.is_empty() || !upc.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::invalid_input(format!(
                "UPC must be a non-empty string of digits, got '{upc}'"
            )));
        }

        let response = self.api.lookup_upc(upc).await?;
        let title = response
            .first_title()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .ok_or_else(|| AppError::not_found(format!("Product with UPC {upc}")))?;

        debug!(upc, title, "Resolved product barcode");
        Ok(ProductInfo {
            upc: upc.to_owned(),
            title: title.to_owned(),
        })
    }
}
