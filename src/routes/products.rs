// ABOUTME: Product route handlers for barcode lookups
// ABOUTME: Resolves a scanned UPC to a product title

use crate::errors::AppError;
use crate::models::ProductInfo;
use crate::server::ServerResources;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

/// Product routes
pub struct ProductRoutes;

impl ProductRoutes {
    /// Create all product routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/products/:upc", get(Self::handle_lookup))
            .with_state(resources)
    }

    /// Handle GET /products/:upc
    async fn handle_lookup(
        State(resources): State<Arc<ServerResources>>,
        Path(upc): Path<String>,
    ) -> Result<Json<ProductInfo>, AppError> {
        Ok(Json(resources.products.lookup(&upc).await?))
    }
}
