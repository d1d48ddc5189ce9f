// ABOUTME: Server binary for the Foodlink HTTP API
// ABOUTME: Loads configuration, initializes logging and the recipe store, then serves until shutdown
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Foodlink Server Binary

use anyhow::Result;
use clap::Parser;
use foodlink_server::{
    config::ServerConfig,
    logging,
    server::{self, ServerResources},
};
use tracing::{error, info};

/// Command line arguments
#[derive(Parser)]
#[command(name = "foodlink-server")]
#[command(about = "Foodlink API - recipe search and food bank lookup for the Foodlink web client")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting Foodlink API");
    info!("{}", config.summary());

    let resources = ServerResources::from_config(&config).await?;
    info!(
        "Recipe store ready: {}",
        resources.recipes.store().backend_name()
    );

    display_available_endpoints(config.http_port);

    if let Err(e) = server::run(resources, &config).await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}

fn display_available_endpoints(port: u16) {
    info!("=== Available API Endpoints ===");
    info!("  POST http://localhost:{port}/giveIngredients");
    info!("  GET  http://localhost:{port}/getNecessaryEquipment");
    info!("  GET  http://localhost:{port}/getMissingIngredients");
    info!("  GET  http://localhost:{port}/getIngredientSteps");
    info!("  GET  http://localhost:{port}/getRecipeDetails/{{id}}");
    info!("  GET  http://localhost:{port}/foodbanks/{{zip}}");
    info!("  GET  http://localhost:{port}/geocode/{{zip}}");
    info!("  GET  http://localhost:{port}/products/{{upc}}");
    info!("  GET  http://localhost:{port}/health");
}
