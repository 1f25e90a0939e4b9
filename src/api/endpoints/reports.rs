//! Reports endpoint: per-day rollup and busiest time slots.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::reports::{self, ReportData};

/// `GET /api/reports`
pub async fn summary(State(ctx): State<ApiContext>) -> Result<Json<ReportData>, ApiError> {
    let store = ctx.core.read_store()?;
    Ok(Json(reports::build_report(&store)))
}
