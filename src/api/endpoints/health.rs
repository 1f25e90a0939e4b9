//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub seeded: bool,
}

/// `GET /api/health`: connection check for the reception screen.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    let seeded = ctx.core.read_store()?.is_seeded();

    Ok(Json(HealthResponse {
        status: "ok",
        version: crate::config::APP_VERSION,
        seeded,
    }))
}
