// ABOUTME: Google Maps geocoding, nearby search and place details response models
// ABOUTME: Defines the food bank entry returned to the client
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{lenient, lenient_seq};
use crate::constants::places::STATUS_OK;
use serde::{Deserialize, Serialize};

/// Geographic coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

/// Envelope returned by the geocoding endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeResponse {
    /// Matches, best first
    #[serde(default, deserialize_with = "lenient_seq")]
    pub results: Option<Vec<GeocodeResult>>,
    /// `OK`, `ZERO_RESULTS`, `REQUEST_DENIED`, ...
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
}

/// One geocoding match
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeResult {
    /// Geometry of the match
    #[serde(default, deserialize_with = "lenient")]
    pub geometry: Option<Geometry>,
}

/// Geometry block of a geocoding match
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Geometry {
    /// Representative point
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<LatLng>,
}

impl GeocodeResponse {
    /// Whether upstream reported success
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some(STATUS_OK)
    }

    /// Coordinates of the first match, if it has any
    #[must_use]
    pub fn first_location(&self) -> Option<LatLng> {
        self.results
            .as_deref()?
            .first()?
            .geometry
            .as_ref()?
            .location
    }

    /// Whether the result list is missing or empty
    #[must_use]
    pub fn has_no_results(&self) -> bool {
        self.results.as_ref().map_or(true, Vec::is_empty)
    }
}

/// Envelope returned by the nearby search endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearbySearchResponse {
    /// Candidates in upstream ranking order
    #[serde(default, deserialize_with = "lenient_seq")]
    pub results: Option<Vec<PlaceCandidate>>,
    /// Upstream status
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
}

impl NearbySearchResponse {
    /// Whether upstream reported success
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some(STATUS_OK)
    }

    /// Candidates in upstream order (empty when missing)
    #[must_use]
    pub fn candidates(&self) -> &[PlaceCandidate] {
        self.results.as_deref().unwrap_or_default()
    }
}

/// A nearby place returned by the search
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlaceCandidate {
    /// Identifier used for the details lookup
    #[serde(default, deserialize_with = "lenient")]
    pub place_id: Option<String>,
    /// Display name
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// Envelope returned by the place details endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetailsResponse {
    /// Requested fields
    #[serde(default, deserialize_with = "lenient")]
    pub result: Option<PlaceDetails>,
    /// Upstream status
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
}

impl PlaceDetailsResponse {
    /// Whether upstream reported success
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some(STATUS_OK)
    }
}

/// Contact fields of a place
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlaceDetails {
    /// Place name
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Full street address
    #[serde(default, deserialize_with = "lenient")]
    pub formatted_address: Option<String>,
    /// Local phone number
    #[serde(default, deserialize_with = "lenient")]
    pub formatted_phone_number: Option<String>,
    /// Website URL
    #[serde(default, deserialize_with = "lenient")]
    pub website: Option<String>,
}

/// A food bank with its contact details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodBankEntry {
    /// Organization name
    pub name: String,
    /// Full street address
    pub formatted_address: String,
    /// Local phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_phone_number: Option<String>,
    /// Website URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl FoodBankEntry {
    /// Build an entry from place details; `None` when name or address is missing
    #[must_use]
    pub fn from_details(details: PlaceDetails) -> Option<Self> {
        let name = details.name.filter(|name| !name.trim().is_empty())?;
        let formatted_address = details
            .formatted_address
            .filter(|address| !address.trim().is_empty())?;

        Some(Self {
            name,
            formatted_address,
            formatted_phone_number: details.formatted_phone_number,
            website: details.website,
        })
    }
}
