//! # MediaHub API server
//!
//! ```text
//! load ApiConfig ──► build store ──► AppState ──► Router ──► axum::serve
//!                                                               │
//!                                        Ctrl+C / SIGTERM ──────┘
//! ```

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mediahub_api::{create_router, ApiConfig, AppState};
use mediahub_store::{MemStorage, Storage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting MediaHub API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        addr = %config.bind_address(),
        convert_delay_ms = config.convert_delay_ms,
        seed = config.seed_sample_data,
        "Configuration loaded"
    );

    // Build the store
    let store: Arc<dyn Storage> = if config.seed_sample_data {
        Arc::new(MemStorage::with_sample_data()?)
    } else {
        warn!("Sample data disabled, starting with an empty catalog");
        Arc::new(MemStorage::empty())
    };

    let bind_addr = config.bind_address();
    let app = create_router(AppState::new(store, config));

    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(?e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(?e, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received, starting graceful shutdown...");
}
