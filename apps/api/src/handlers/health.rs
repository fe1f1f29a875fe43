//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::{ApiResult, OrInternal};
use crate::state::AppState;
use mediahub_store::StoreStats;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub counts: StoreStats,
}

/// Reports liveness plus row counts.
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let counts = state.store.stats().await.or_internal("Health check failed")?;

    Ok(Json(HealthResponse {
        status: "ok",
        counts,
    }))
}
