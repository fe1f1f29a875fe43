//! # Application State
//!
//! Shared by every handler through axum's `State` extractor.
//!
//! ```text
//! main()
//!   │  MemStorage::with_sample_data()
//!   ▼
//! AppState { store: Arc<dyn Storage>, config: Arc<ApiConfig> }
//!   │  create_router(state)
//!   ▼
//! handlers ──► state.store.*()
//! ```
//!
//! The store is created once at startup and dropped when the server exits.
//! Cloning the state only clones the `Arc`s.

use std::sync::Arc;

use mediahub_store::Storage;

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Storage>,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn Storage>, config: ApiConfig) -> Self {
        AppState {
            store,
            config: Arc::new(config),
        }
    }
}
