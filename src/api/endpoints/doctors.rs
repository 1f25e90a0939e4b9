//! Doctor list endpoint, feeds the agenda's doctor filter.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::Doctor;

#[derive(Serialize)]
pub struct DoctorsResponse {
    pub doctors: Vec<Doctor>,
}

/// `GET /api/doctors`
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<DoctorsResponse>, ApiError> {
    let doctors = ctx.core.read_store()?.doctors().to_vec();
    Ok(Json(DoctorsResponse { doctors }))
}
