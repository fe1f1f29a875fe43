//! # Download Handlers
//!
//! ```text
//! POST /api/media/{id}/download
//!   │
//!   ├── id not an integer ──────────► 400 "Invalid media ID"
//!   │   (or not valid UTF-8)
//!   ├── get_media_by_id → None ─────► 404 "Media not found"
//!   └── increment_downloads ────────► 200 {message, fileUrl}
//! ```
//!
//! `GET /api/downloads/top` returns the ranking snapshot joined with media.
//! A ranking that points at missing media fails the whole request.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::error::{ApiError, ApiResult, OrInternal};
use crate::state::AppState;
use mediahub_core::validation::parse_media_id;
use mediahub_core::{CoreError, TopDownloadWithMedia};

/// Response of a started download.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    pub message: String,
    pub file_url: String,
}

/// Records a download and hands back the file location.
pub async fn start_download(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<DownloadResponse>> {
    let Path(raw_id) =
        raw_id.map_err(|rejection| ApiError::unreadable(rejection, "Invalid media ID"))?;
    let id = parse_media_id(&raw_id).map_err(|e| ApiError::rejected(&e, "Invalid media ID"))?;

    let media = state
        .store
        .get_media_by_id(id)
        .await
        .or_internal("Failed to start download")?
        .ok_or(CoreError::MediaNotFound(id))?;

    state
        .store
        .increment_downloads(id)
        .await
        .or_internal("Failed to start download")?;

    info!(id, title = %media.title, "Download started");
    Ok(Json(DownloadResponse {
        message: "Download started".to_string(),
        file_url: media.file_url,
    }))
}

/// Lists the top downloads by ascending rank.
pub async fn top_downloads(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TopDownloadWithMedia>>> {
    let top = state
        .store
        .get_top_downloads()
        .await
        .or_internal("Failed to fetch top downloads")?;

    Ok(Json(top))
}
