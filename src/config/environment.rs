// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles API secrets, CORS origins, store backend and upstream base URLs
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-based configuration management

use crate::constants::{api_urls, env_config, store};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Environment type for deployment-dependent behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Which recipe store backend to use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StoreBackend {
    /// Process-local, lost on restart
    #[default]
    Memory,
    /// Two JSON documents under a data directory
    File {
        /// Directory holding the documents
        data_dir: PathBuf,
    },
}

impl StoreBackend {
    /// Parse the backend name, resolving the data directory for the file backend
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown backend name
    pub fn parse(name: &str, data_dir: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "" | "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File {
                data_dir: PathBuf::from(data_dir),
            }),
            other => anyhow::bail!("Unknown STORE_BACKEND '{other}' (expected memory or file)"),
        }
    }
}

/// Upstream API credentials and endpoints
#[derive(Clone, Serialize, Deserialize)]
pub struct ExternalServicesConfig {
    /// Spoonacular API key
    pub recipe_api_key: String,
    /// Google Maps Platform API key
    pub places_api_key: String,
    /// Spoonacular base URL
    pub spoonacular_base_url: String,
    /// Google Maps base URL
    pub google_maps_base_url: String,
    /// UPCitemdb base URL
    pub upc_lookup_base_url: String,
}

impl std::fmt::Debug for ExternalServicesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalServicesConfig")
            .field("recipe_api_key", &"[REDACTED]")
            .field("places_api_key", &"[REDACTED]")
            .field("spoonacular_base_url", &self.spoonacular_base_url)
            .field("google_maps_base_url", &self.google_maps_base_url)
            .field("upc_lookup_base_url", &self.upc_lookup_base_url)
            .finish()
    }
}

impl Default for ExternalServicesConfig {
    fn default() -> Self {
        Self {
            recipe_api_key: String::new(),
            places_api_key: String::new(),
            spoonacular_base_url: api_urls::SPOONACULAR_BASE_URL.to_owned(),
            google_maps_base_url: api_urls::GOOGLE_MAPS_BASE_URL.to_owned(),
            upc_lookup_base_url: api_urls::UPC_LOOKUP_BASE_URL.to_owned(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*`
    pub allowed_origins: String,
}

impl CorsConfig {
    /// Whether every origin is allowed (`*`)
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.trim() == "*"
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
    /// Recipe store backend
    pub store: StoreBackend,
    /// Upstream APIs
    pub external_services: ExternalServicesConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an API key is missing or a value cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        let recipe_api_key = required_var("FOOD_API", &[])?;
        let places_api_key = required_var("GOOGLE_API_KEY", &["VITE_GOOGLE_API_KEY"])?;

        let store = StoreBackend::parse(
            &env_var_or("STORE_BACKEND", "memory"),
            &env_var_or("STORE_DATA_DIR", store::DEFAULT_DATA_DIR),
        )
        .context("Invalid STORE_BACKEND value")?;

        let allowed_origins = env_config::cors_allowed_origins();
        validate_origins(&allowed_origins)?;

        Ok(Self {
            http_port: env_config::http_port(),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            cors: CorsConfig { allowed_origins },
            store,
            external_services: ExternalServicesConfig {
                recipe_api_key,
                places_api_key,
                spoonacular_base_url: base_url_var(
                    "SPOONACULAR_BASE_URL",
                    api_urls::SPOONACULAR_BASE_URL,
                ),
                google_maps_base_url: base_url_var(
                    "GOOGLE_MAPS_BASE_URL",
                    api_urls::GOOGLE_MAPS_BASE_URL,
                ),
                upc_lookup_base_url: base_url_var(
                    "UPC_LOOKUP_BASE_URL",
                    api_urls::UPC_LOOKUP_BASE_URL,
                ),
            },
        })
    }

    /// Parsed CORS origin list, empty for `*`
    #[must_use]
    pub fn cors_origins(&self) -> Vec<String> {
        parse_origins(&self.cors.allowed_origins)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Foodlink Server Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - CORS Origins: {}\n\
             - Recipe Store: {}\n\
             - Spoonacular: {}\n\
             - Google Maps: {}\n\
             - UPC Lookup: {}",
            self.http_port,
            self.environment,
            self.cors.allowed_origins,
            match &self.store {
                StoreBackend::Memory => "memory".to_owned(),
                StoreBackend::File { data_dir } => format!("file ({})", data_dir.display()),
            },
            self.external_services.spoonacular_base_url,
            self.external_services.google_maps_base_url,
            self.external_services.upc_lookup_base_url,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Read a base URL, dropping any trailing slash so paths can be appended
fn base_url_var(key: &str, default: &str) -> String {
    env_var_or(key, default).trim_end_matches('/').to_owned()
}

/// Read a required secret, trying legacy fallback names in order
fn required_var(key: &str, fallbacks: &[&str]) -> Result<String> {
    if let Some(value) = non_empty_var(key) {
        return Ok(value);
    }

    for fallback in fallbacks {
        if let Some(value) = non_empty_var(fallback) {
            warn!("{key} not set, using legacy variable {fallback}");
            return Ok(value);
        }
    }

    anyhow::bail!("{key} environment variable is required")
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        return Vec::new();
    }

    origins_str
        .split(',')
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Every origin must be an `http(s)://host[:port]` usable as a header value
fn validate_origins(origins_str: &str) -> Result<()> {
    if origins_str.trim() == "*" {
        return Ok(());
    }

    let origins = parse_origins(origins_str);
    if origins.is_empty() {
        anyhow::bail!("CORS_ALLOWED_ORIGINS lists no origins (use * to allow any)");
    }

    for origin in &origins {
        let has_host = origin
            .split_once("://")
            .is_some_and(|(scheme, host)| matches!(scheme, "http" | "https") && !host.is_empty());
        if !has_host || http::HeaderValue::from_str(origin).is_err() {
            anyhow::bail!("Invalid CORS origin '{origin}' in CORS_ALLOWED_ORIGINS");
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://localhost:5173, https://app.example.com,"),
            vec!["http://localhost:5173", "https://app.example.com"]
        );
        assert!(parse_origins("*").is_empty());
    }

    #[test]
    fn test_validate_origins() {
        assert!(validate_origins("*").is_ok());
        assert!(validate_origins("http://localhost:5173, https://app.example.com").is_ok());
        assert!(validate_origins("").is_err());
        assert!(validate_origins(" , ").is_err());
        assert!(validate_origins("localhost:5173").is_err());
        assert!(validate_origins("ftp://files.example.com").is_err());
        assert!(validate_origins("https://").is_err());
        assert!(validate_origins("http://ok.example.com,http://bad\u{7f}.example.com").is_err());
    }

    #[test]
    fn test_store_backend_parsing() {
        assert_eq!(
            StoreBackend::parse("memory", "./data").unwrap(),
            StoreBackend::Memory
        );
        assert_eq!(
            StoreBackend::parse("FILE", "/var/lib/foodlink").unwrap(),
            StoreBackend::File {
                data_dir: PathBuf::from("/var/lib/foodlink")
            }
        );
        assert!(StoreBackend::parse("redis", "./data").is_err());
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = ExternalServicesConfig {
            recipe_api_key: "secret-recipe".to_owned(),
            places_api_key: "secret-places".to_owned(),
            ..ExternalServicesConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-recipe"));
        assert!(!debug.contains("secret-places"));
    }
}
