// ABOUTME: Recipe domain: payload shaping and the search/enrich orchestration
// ABOUTME: Re-exports the shaper projections and the recipe service
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Recipe search, enrichment and derived views over the store
pub mod service;
/// Pure projections over recipe payloads
pub mod shaper;

pub use service::{parse_ingredients, RecipeService};
pub use shaper::{equipment_for, missing_ingredients_for, steps_text};
