// ABOUTME: Main library entry point for the Foodlink server
// ABOUTME: REST facade over recipe, places and product lookup APIs for the Foodlink web client
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Foodlink Server
//!
//! HTTP backend that helps people use up the food they already have and find
//! food banks to donate the rest to.
//!
//! ## Features
//!
//! - **Recipe search**: recipes that use a list of ingredients, with their
//!   step-by-step instructions fetched up front
//! - **Derived views**: equipment, missing ingredients and rendered steps for
//!   the latest search
//! - **Food banks**: nearby charities for a postal code, with contact details
//! - **Barcode lookup**: product title for a scanned UPC
//!
//! ## Architecture
//!
//! - **External**: traits and reqwest clients for Spoonacular, Google Maps and UPCitemdb
//! - **Store**: single-slot storage of the latest search (memory or JSON files)
//! - **Recipes / Food banks / Products**: services orchestrating upstream calls
//! - **Routes**: thin axum handlers over the services
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use foodlink_server::config::ServerConfig;
//! use foodlink_server::server::{run, ServerResources};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = ServerResources::from_config(&config).await?;
//!     run(resources, &config).await?;
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Upstream API clients
pub mod external;

/// Food bank lookup service
pub mod food_banks;

/// Production logging with structured output
pub mod logging;

/// HTTP middleware (CORS, request tracing)
pub mod middleware;

/// Upstream payload and response models
pub mod models;

/// Product barcode lookup service
pub mod products;

/// Recipe search, enrichment and views
pub mod recipes;

/// HTTP route handlers
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

/// Latest-search storage backends
pub mod store;
