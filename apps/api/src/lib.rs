//! # MediaHub API
//!
//! HTTP/JSON server for the media catalog.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         API Layer                                       │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  media         │  │  downloads     │  │  convert                   ││
//! │  │                │  │                │  │                            ││
//! │  │ • list         │  │ • start        │  │ • timed stub               ││
//! │  │ • featured     │  │ • top          │  │                            ││
//! │  │ • by type      │  │                │  │                            ││
//! │  │ • search       │  │                │  │                            ││
//! │  └───────┬────────┘  └───────┬────────┘  └────────────────────────────┘│
//! │          │                   │                                          │
//! │          ▼                   ▼                                          │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │              AppState { Arc<dyn Storage>, ApiConfig }             │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `MEDIAHUB_BIND_ADDR` - Listen address (default: 0.0.0.0)
//! - `MEDIAHUB_PORT` - HTTP port (default: 5000)
//! - `MEDIAHUB_CONVERT_DELAY_MS` - Conversion stub delay (default: 2000)
//! - `MEDIAHUB_SEED_SAMPLE_DATA` - Load the sample catalog (default: true)
//! - `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
