//! JSON API over the pricing pipeline.

pub mod error;
pub mod handlers;

use crate::application::context::AppContext;
use crate::config::ServerEnvConfig;
use anyhow::{Context, Result};
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use handlers::{car_data_handler, evaluate_handler, index_handler, predict_handler};

pub fn router(ctx: Arc<AppContext>, cors_enabled: bool) -> Router {
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/get_car_data", get(car_data_handler))
        .route("/predict", post(predict_handler))
        .route("/evaluate", get(evaluate_handler))
        .with_state(ctx);

    if cors_enabled {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE])
            .max_age(Duration::from_secs(60 * 60));
        app.layer(cors)
    } else {
        app
    }
}

/// Binds the configured address and serves until Ctrl+C or SIGTERM.
pub async fn serve(config: &ServerEnvConfig, ctx: Arc<AppContext>) -> Result<()> {
    let app = router(ctx, config.cors_enabled);

    let address = config.address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server shut down.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
