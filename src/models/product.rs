// ABOUTME: UPCitemdb barcode lookup response models
// ABOUTME: Reduces a lookup to the product title shown by the barcode scanner
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{lenient, lenient_seq};
use serde::{Deserialize, Serialize};

/// Envelope returned by the trial lookup endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpcLookupResponse {
    /// Matching products
    #[serde(default, deserialize_with = "lenient_seq")]
    pub items: Option<Vec<UpcItem>>,
}

/// One matching product
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpcItem {
    /// Product title
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
}

/// Product resolved from a barcode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Barcode that was looked up
    pub upc: String,
    /// Product title
    pub title: String,
}

impl UpcLookupResponse {
    /// Title of the first item, if there is one with a title
    #[must_use]
    pub fn first_title(&self) -> Option<&str> {
        self.items.as_deref()?.first()?.title.as_deref()
    }
}
