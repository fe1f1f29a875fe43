//! # Conversion Stub
//!
//! Answers like a converter would, without converting anything. The wait is
//! a `tokio::time::sleep`, so other requests keep flowing while it runs.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use mediahub_core::validation::parse_convert_request;

const INVALID_REQUEST: &str = "Invalid conversion request";

/// Response of a finished conversion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub message: String,
    pub from_format: String,
    pub to_format: String,
    pub converted_url: String,
}

pub async fn convert(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ConvertResponse>> {
    let Json(body) = body.map_err(|rejection| ApiError::unreadable(rejection, INVALID_REQUEST))?;

    let request =
        parse_convert_request(body).map_err(|e| ApiError::rejected(&e, INVALID_REQUEST))?;

    info!(
        from = %request.from_format,
        to = %request.to_format,
        "Conversion requested"
    );
    tokio::time::sleep(state.config.convert_delay()).await;

    Ok(Json(ConvertResponse {
        message: "Conversion completed".to_string(),
        converted_url: request.converted_url(),
        from_format: request.from_format,
        to_format: request.to_format,
    }))
}
