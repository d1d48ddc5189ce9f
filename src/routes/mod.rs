// ABOUTME: Route module organization for the Foodlink HTTP endpoints
// ABOUTME: Groups route definitions by domain with thin handlers over the service layer
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Route module for the Foodlink server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the services in [`crate::server::ServerResources`].

/// Food bank lookup and geocoding routes
pub mod food_banks;
/// Health check routes
pub mod health;
/// Product barcode lookup routes
pub mod products;
/// Recipe search and derived view routes
pub mod recipes;

pub use food_banks::FoodBankRoutes;
pub use health::HealthRoutes;
pub use products::ProductRoutes;
pub use recipes::RecipeRoutes;
