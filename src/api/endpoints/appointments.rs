//! Appointment endpoints.
//!
//! - `GET /api/appointments?date=&doctorId=&status=`: raw records for a day
//! - `POST /api/appointments/quick`: quick add, 30 minutes from now

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use crate::agenda;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{Appointment, AppointmentQuery};

#[derive(Serialize)]
pub struct AppointmentsResponse {
    pub appointments: Vec<Appointment>,
}

#[derive(Serialize)]
pub struct QuickAddResponse {
    pub appointment: Appointment,
}

/// `GET /api/appointments`
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<AppointmentQuery>,
) -> Result<Json<AppointmentsResponse>, ApiError> {
    let filter = query.into_filter(ctx.today())?;
    let store = ctx.core.read_store()?;

    let appointments = agenda::filter_appointments(store.appointments(), &filter)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(AppointmentsResponse { appointments }))
}

/// `POST /api/appointments/quick`
pub async fn quick_add(
    State(ctx): State<ApiContext>,
) -> Result<Json<QuickAddResponse>, ApiError> {
    let now = ctx.now();
    let appointment = ctx.core.write_store()?.quick_add_appointment(now).clone();

    Ok(Json(QuickAddResponse { appointment }))
}
