//! Dashboard agenda endpoint: day listing plus KPIs in one response.

use axum::extract::{Query, State};
use axum::Json;

use crate::agenda::{self, AgendaView};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::AppointmentQuery;

/// `GET /api/agenda?date=&doctorId=&status=`
pub async fn day(
    State(ctx): State<ApiContext>,
    Query(query): Query<AppointmentQuery>,
) -> Result<Json<AgendaView>, ApiError> {
    let filter = query.into_filter(ctx.today())?;
    let store = ctx.core.read_store()?;
    Ok(Json(agenda::build_agenda(&store, &filter)))
}
