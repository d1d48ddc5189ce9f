// ABOUTME: Food bank lookup: geocode a postal code, search nearby charities, collect contact details
// ABOUTME: Detail enrichment is best-effort; candidates without usable details are dropped
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Food Bank Lookup
//!
//! Three sequential stages against the Google Maps web services:
//!
//! 1. geocode the postal code to coordinates
//! 2. search nearby places of the food bank type and keep the first
//!    [`MAX_FOOD_BANKS`] in upstream order
//! 3. fetch contact details per candidate
//!
//! Stage 3 drops a candidate whose details come back with a non-OK status or
//! without a name and address. Transport and HTTP failures fail the lookup at
//! every stage.

use crate::constants::places::MAX_FOOD_BANKS;
use crate::errors::{AppError, AppResult};
use crate::external::PlacesApi;
use crate::models::{FoodBankEntry, LatLng, PlaceCandidate};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Food bank search around a postal code
#[derive(Clone)]
pub struct FoodBankService {
    api: Arc<dyn PlacesApi>,
}

impl FoodBankService {
    /// Create a service over a places API
    #[must_use]
    pub fn new(api: Arc<dyn PlacesApi>) -> Self {
        Self { api }
    }

    /// Food banks near a postal code, in upstream ranking order
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the postal code cannot be geocoded, `NotFound`
    /// if the nearby search finds nothing, or the upstream error of a failed call
    pub async fn find_near(&self, postal_code: &str) -> AppResult<Vec<FoodBankEntry>> {
        let postal_code = validated_postal_code(postal_code)?;
        let location = self.locate(postal_code).await?;
        let candidates = self.nearby_candidates(postal_code, location).await?;

        let mut entries = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            if let Some(entry) = self.details_for(candidate).await? {
                entries.push(entry);
            }
        }

        info!(
            postal_code,
            candidates = candidates.len(),
            food_banks = entries.len(),
            "Food bank lookup completed"
        );
        Ok(entries)
    }

    /// Geocoding response for a postal code, unmodified
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank postal code or the upstream error
    pub async fn geocode_raw(&self, postal_code: &str) -> AppResult<Value> {
        let postal_code = validated_postal_code(postal_code)?;
        self.api.geocode_raw(postal_code).await
    }

    async fn locate(&self, postal_code: &str) -> AppResult<LatLng> {
        let geocode = self.api.geocode(postal_code).await?;

        if !geocode.is_ok() || geocode.has_no_results() {
            return Err(AppError::invalid_input(format!(
                "Could not geocode postal code {postal_code} (status: {})",
                geocode.status.as_deref().unwrap_or("missing")
            )));
        }

        geocode.first_location().ok_or_else(|| {
            AppError::invalid_input(format!(
                "Geocoding result for {postal_code} has no coordinates"
            ))
        })
    }

    async fn nearby_candidates(
        &self,
        postal_code: &str,
        location: LatLng,
    ) -> AppResult<Vec<PlaceCandidate>> {
        let nearby = self.api.nearby_food_banks(location).await?;

        if !nearby.is_ok() || nearby.candidates().is_empty() {
            return Err(AppError::not_found(format!(
                "Food banks near {postal_code}"
            )));
        }

        Ok(nearby
            .candidates()
            .iter()
            .take(MAX_FOOD_BANKS)
            .cloned()
            .collect())
    }

    async fn details_for(&self, candidate: &PlaceCandidate) -> AppResult<Option<FoodBankEntry>> {
        let Some(place_id) = candidate.place_id.as_deref() else {
            debug!(name = ?candidate.name, "Dropping candidate without place_id");
            return Ok(None);
        };

        let response = self.api.place_details(place_id).await?;
        if !response.is_ok() {
            debug!(
                place_id,
                status = ?response.status,
                "Dropping candidate with non-OK details status"
            );
            return Ok(None);
        }

        let entry = response.result.and_then(FoodBankEntry::from_details);
        if entry.is_none() {
            debug!(place_id, "Dropping candidate without name or address");
        }
        Ok(entry)
    }
}

fn validated_postal_code(postal_code: &str) -> AppResult<&str> {
    let postal_code = postal_code.trim();
    if postal_code.is_empty() {
        return Err(AppError::invalid_input("Postal code is required"));
    }
    Ok(postal_code)
}
