// ABOUTME: Configuration module for environment-driven server settings
// ABOUTME: Re-exports the server configuration types
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Environment-based configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, ExternalServicesConfig, ServerConfig, StoreBackend};
