//! Carprice Server - Used car price prediction API
//!
//! Loads the artifacts written by `train_model`, builds the dropdown catalog
//! and held-out metrics, then serves the JSON API.
//!
//! # Usage
//! ```sh
//! SERVER_PORT=5000 cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `SERVER_BIND_ADDRESS` / `SERVER_PORT` - Listen address (default: 127.0.0.1:5000)
//! - `CORS_ENABLED` - Attach the CORS layer (default: true)
//! - `ARTIFACTS_DIR`, `TRAIN_DATA_PATH`, `TEST_DATA_PATH` - Data locations

use anyhow::Result;
use carprice::application::context::AppContext;
use carprice::config::Config;
use carprice::interfaces::http;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Carprice Server {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: Address={}, CORS={}, Artifacts={:?}",
        config.server.address(),
        config.server.cors_enabled,
        config.data.artifacts_dir
    );

    // Blocking file reads, done before the listener exists
    let ctx = Arc::new(AppContext::load(&config.data)?);
    info!("Serving predictions with {}", ctx.predictor.model_name());

    http::serve(&config.server, ctx).await
}
