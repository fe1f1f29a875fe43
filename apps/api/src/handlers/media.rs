//! # Media Handlers
//!
//! Catalog listing, filtering and search.
//!
//! | Route                        | Store call             |
//! |------------------------------|------------------------|
//! | `GET /api/media`             | `get_all_media`        |
//! | `GET /api/media/featured`    | `get_featured_media`   |
//! | `GET /api/media/type/{type}` | `get_media_by_type`    |
//! | `GET /api/media/search?q=`   | `search_media`         |

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ApiError, ApiResult, OrInternal};
use crate::state::AppState;
use mediahub_core::validation::validate_search_query;
use mediahub_core::Media;

/// Query string of the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Lists every media record.
pub async fn list_media(State(state): State<AppState>) -> ApiResult<Json<Vec<Media>>> {
    let media = state
        .store
        .get_all_media()
        .await
        .or_internal("Failed to fetch media")?;

    Ok(Json(media))
}

/// Lists media flagged as featured.
pub async fn list_featured(State(state): State<AppState>) -> ApiResult<Json<Vec<Media>>> {
    let media = state
        .store
        .get_featured_media()
        .await
        .or_internal("Failed to fetch featured media")?;

    Ok(Json(media))
}

/// Lists media of one type.
///
/// Any string is accepted; an unknown type just returns `[]`. A segment that
/// does not decode to UTF-8 is rejected.
pub async fn list_by_type(
    State(state): State<AppState>,
    media_type: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Vec<Media>>> {
    let Path(media_type) =
        media_type.map_err(|rejection| ApiError::unreadable(rejection, "Invalid media type"))?;

    let media = state
        .store
        .get_media_by_type(&media_type)
        .await
        .or_internal("Failed to fetch media by type")?;

    debug!(media_type = %media_type, count = media.len(), "Listed media by type");
    Ok(Json(media))
}

/// Searches title, artist and category.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Media>>> {
    let Query(params) = params
        .map_err(|rejection| ApiError::unreadable(rejection, "Search query is required"))?;

    let query = validate_search_query(params.q.as_deref())
        .map_err(|e| ApiError::rejected(&e, "Search query is required"))?;

    let media = state
        .store
        .search_media(&query)
        .await
        .or_internal("Failed to search media")?;

    Ok(Json(media))
}
