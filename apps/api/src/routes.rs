//! # Router
//!
//! ```text
//! /health                          GET   health
//! /api
//! ├── /media                       GET   list_media
//! ├── /media/featured              GET   list_featured
//! ├── /media/type/{type}           GET   list_by_type
//! ├── /media/search?q=             GET   search
//! ├── /media/{id}/download         POST  start_download
//! ├── /downloads/top               GET   top_downloads
//! └── /convert                     POST  convert
//! ```

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{convert, downloads, health, media};
use crate::state::AppState;

/// Builds the full application router.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/media", get(media::list_media))
        .route("/media/featured", get(media::list_featured))
        .route("/media/type/{type}", get(media::list_by_type))
        .route("/media/search", get(media::search))
        .route("/media/{id}/download", post(downloads::start_download))
        .route("/downloads/top", get(downloads::top_downloads))
        .route("/convert", post(convert::convert));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
