// ABOUTME: Integration tests for the food bank lookup pipeline
// ABOUTME: Covers geocoding failures, candidate limits and best-effort detail enrichment
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use anyhow::Result;
use common::{details_ok, geocode_ok, FakePlacesApi};
use foodlink_server::errors::ErrorCode;
use foodlink_server::food_banks::FoodBankService;
use serde_json::json;
use std::sync::Arc;

fn service_with(api: &Arc<FakePlacesApi>) -> FoodBankService {
    common::init_test_logging();
    FoodBankService::new(api.clone())
}

#[tokio::test]
async fn test_returns_at_most_five_in_upstream_order() -> Result<()> {
    let api = Arc::new(
        FakePlacesApi::new()
            .with_candidates(7)
            .with_default_details(7),
    );
    let service = service_with(&api);

    let banks = service.find_near("98101").await?;

    assert_eq!(banks.len(), 5);
    let names: Vec<&str> = banks.iter().map(|bank| bank.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Pantry 1", "Pantry 2", "Pantry 3", "Pantry 4", "Pantry 5"]
    );
    assert_eq!(
        api.detail_calls(),
        vec!["place-1", "place-2", "place-3", "place-4", "place-5"]
    );
    Ok(())
}

#[tokio::test]
async fn test_searches_around_geocoded_location() -> Result<()> {
    let api = Arc::new(
        FakePlacesApi::new()
            .with_geocode(geocode_ok(40.7128, -74.006))
            .with_candidates(1)
            .with_default_details(1),
    );
    let service = service_with(&api);

    service.find_near(" 10001 ").await?;

    let calls = api.nearby_calls();
    assert_eq!(calls.len(), 1);
    assert!((calls[0].lat - 40.7128).abs() < f64::EPSILON);
    assert!((calls[0].lng + 74.006).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn test_non_ok_details_drop_the_candidate() -> Result<()> {
    let api = Arc::new(
        FakePlacesApi::new()
            .with_candidates(5)
            .with_default_details(5)
            .with_details("place-3", json!({"status": "INVALID_REQUEST"})),
    );
    let service = service_with(&api);

    let banks = service.find_near("98101").await?;

    assert_eq!(banks.len(), 4);
    assert!(banks.iter().all(|bank| bank.name != "Pantry 3"));
    Ok(())
}

#[tokio::test]
async fn test_details_without_name_or_address_drop_the_candidate() -> Result<()> {
    let api = Arc::new(
        FakePlacesApi::new()
            .with_candidates(3)
            .with_details("place-1", json!({"result": {}, "status": "OK"}))
            .with_details(
                "place-2",
                json!({"result": {"name": "No Address Pantry"}, "status": "OK"}),
            )
            .with_details("place-3", details_ok("Corner Food Bank", "3 Pine St")),
    );
    let service = service_with(&api);

    let banks = service.find_near("98101").await?;

    assert_eq!(banks.len(), 1);
    assert_eq!(banks[0].name, "Corner Food Bank");
    assert_eq!(banks[0].formatted_address, "3 Pine St");
    assert_eq!(
        banks[0].formatted_phone_number.as_deref(),
        Some("(206) 555-0100")
    );
    Ok(())
}

#[tokio::test]
async fn test_all_candidates_dropped_gives_empty_list() -> Result<()> {
    let api = Arc::new(FakePlacesApi::new().with_candidates(2));
    let service = service_with(&api);

    assert!(service.find_near("98101").await?.is_empty());
    assert_eq!(api.detail_calls().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_failed_geocoding_is_invalid_input() -> Result<()> {
    for body in [
        json!({"results": [], "status": "ZERO_RESULTS"}),
        json!({"results": [{"geometry": {}}], "status": "OK"}),
        json!({"results": [], "status": "OK"}),
        json!({"error_message": "The provided API key is invalid.", "status": "REQUEST_DENIED"}),
    ] {
        let api = Arc::new(FakePlacesApi::new().with_geocode(body).with_candidates(1));
        let service = service_with(&api);

        let err = service.find_near("00000").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(api.nearby_calls().is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn test_empty_nearby_search_is_not_found() -> Result<()> {
    let api = Arc::new(FakePlacesApi::new());
    let service = service_with(&api);

    let err = service.find_near("98101").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.http_status(), 404);
    Ok(())
}

#[tokio::test]
async fn test_failing_details_call_fails_the_lookup() -> Result<()> {
    let api = Arc::new(
        FakePlacesApi::new()
            .with_candidates(3)
            .with_default_details(3)
            .failing_details("place-2", 500),
    );
    let service = service_with(&api);

    let err = service.find_near("98101").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert_eq!(err.http_status(), 500);
    assert_eq!(api.detail_calls(), vec!["place-1", "place-2"]);
    Ok(())
}

#[tokio::test]
async fn test_geocode_raw_passes_body_through() -> Result<()> {
    let body = geocode_ok(1.5, 2.5);
    let api = Arc::new(FakePlacesApi::new().with_geocode(body.clone()));
    let service = service_with(&api);

    assert_eq!(service.geocode_raw("98101").await?, body);
    assert_eq!(
        service.geocode_raw("  ").await.unwrap_err().code,
        ErrorCode::InvalidInput
    );
    Ok(())
}
