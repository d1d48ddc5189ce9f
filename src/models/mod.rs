// ABOUTME: Data models for upstream recipe, places and product payloads
// ABOUTME: Optional-field records with lenient decoding so projections stay total
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Data Models
//!
//! Third-party payloads are modelled as records whose fields are all optional.
//! A field holding the wrong JSON type decodes as absent instead of failing
//! the whole document, and fields the server does not interpret are kept in an
//! `extra` map so they round-trip to the client unchanged.

/// Google Maps geocoding and places payloads
pub mod places;
/// UPC product lookup payloads
pub mod product;
/// Spoonacular recipe search and instruction payloads
pub mod recipe;

pub use places::{
    FoodBankEntry, GeocodeResponse, LatLng, NearbySearchResponse, PlaceCandidate, PlaceDetails,
    PlaceDetailsResponse,
};
pub use product::{ProductInfo, UpcItem, UpcLookupResponse};
pub use recipe::{
    Equipment, InstructionSet, MissedIngredient, RecipeDetailBatch, RecipeSummary, Step,
    StepGroup,
};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a field, reading a value of the wrong shape as `None`
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decode a sequence field; a non-array reads as `None` and malformed
/// elements become `T::default()` so positions are preserved
pub(crate) fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        )),
        _ => Ok(None),
    }
}
