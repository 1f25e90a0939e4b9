//! Demo data endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::seed::SeedSummary;

/// `POST /api/seed`: replace the store with the demo dataset for today.
pub async fn load(State(ctx): State<ApiContext>) -> Result<Json<SeedSummary>, ApiError> {
    let today = ctx.today();
    let summary = ctx.core.write_store()?.load_demo_data(today);
    Ok(Json(summary))
}
