// ABOUTME: HTTP server assembly: shared resources, router construction and graceful shutdown
// ABOUTME: Wires upstream clients, the recipe store and services into the axum application
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult};
use crate::external::{
    GooglePlacesClient, GooglePlacesClientConfig, PlacesApi, ProductApi, RecipeApi,
    SpoonacularClient, SpoonacularClientConfig, UpcItemDbClient, UpcItemDbClientConfig,
};
use crate::food_banks::FoodBankService;
use crate::middleware::{setup_cors, with_request_tracing};
use crate::products::ProductLookupService;
use crate::recipes::RecipeService;
use crate::routes::{FoodBankRoutes, HealthRoutes, ProductRoutes, RecipeRoutes};
use crate::store::Store;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Services shared by every route handler
#[derive(Clone)]
pub struct ServerResources {
    /// Recipe search and views
    pub recipes: RecipeService,
    /// Food bank lookup
    pub food_banks: FoodBankService,
    /// Barcode lookup
    pub products: ProductLookupService,
}

impl ServerResources {
    /// Assemble resources from upstream clients and a store
    #[must_use]
    pub fn new(
        recipe_api: Arc<dyn RecipeApi>,
        places_api: Arc<dyn PlacesApi>,
        product_api: Arc<dyn ProductApi>,
        store: Store,
    ) -> Self {
        Self {
            recipes: RecipeService::new(recipe_api, store),
            food_banks: FoodBankService::new(places_api),
            products: ProductLookupService::new(product_api),
        }
    }

    /// Build the production clients and store described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened
    pub async fn from_config(config: &ServerConfig) -> AppResult<Self> {
        let services = &config.external_services;

        let recipe_api = Arc::new(SpoonacularClient::new(SpoonacularClientConfig {
            api_key: services.recipe_api_key.clone(),
            base_url: services.spoonacular_base_url.clone(),
        }));
        let places_api = Arc::new(GooglePlacesClient::new(GooglePlacesClientConfig {
            api_key: services.places_api_key.clone(),
            base_url: services.google_maps_base_url.clone(),
        }));
        let product_api = Arc::new(UpcItemDbClient::new(UpcItemDbClientConfig {
            base_url: services.upc_lookup_base_url.clone(),
        }));
        let store = Store::new(&config.store).await?;

        Ok(Self::new(recipe_api, places_api, product_api, store))
    }
}

/// Build the application router with CORS and request tracing applied
#[must_use]
pub fn build_router(resources: Arc<ServerResources>, config: &ServerConfig) -> Router {
    let router = Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(RecipeRoutes::routes(Arc::clone(&resources)))
        .merge(FoodBankRoutes::routes(Arc::clone(&resources)))
        .merge(ProductRoutes::routes(resources))
        .layer(setup_cors(config));

    with_request_tracing(router)
}

/// Serve the HTTP API until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails
pub async fn run(resources: ServerResources, config: &ServerConfig) -> AppResult<()> {
    let app = build_router(Arc::new(resources), config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        AppError::internal(format!("Failed to bind HTTP port {}", config.http_port)).with_source(e)
    })?;
    info!("HTTP server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal("HTTP server error").with_source(e))?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
