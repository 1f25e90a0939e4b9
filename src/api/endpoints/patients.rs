//! Patient endpoints.
//!
//! - `GET /api/patients?q=`: profiles list, optionally filtered
//! - `GET /api/patients/lookup?q=`: global search, first hit only

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::PatientQuery;
use crate::search::{self, PatientView};

#[derive(Serialize)]
pub struct PatientsResponse {
    pub patients: Vec<PatientView>,
}

#[derive(Serialize)]
pub struct PatientLookupResponse {
    pub patient: PatientView,
}

/// `GET /api/patients`
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<PatientQuery>,
) -> Result<Json<PatientsResponse>, ApiError> {
    let store = ctx.core.read_store()?;

    let patients = match query.q.as_deref() {
        Some(q) => search::search_patients(store.patients(), q)
            .into_iter()
            .map(PatientView::from)
            .collect(),
        None => store.patients().iter().map(PatientView::from).collect(),
    };

    Ok(Json(PatientsResponse { patients }))
}

/// `GET /api/patients/lookup`
pub async fn lookup(
    State(ctx): State<ApiContext>,
    Query(query): Query<PatientQuery>,
) -> Result<Json<PatientLookupResponse>, ApiError> {
    let store = ctx.core.read_store()?;
    let term = query.q.unwrap_or_default();

    let patient = search::find_patient(store.patients(), &term)
        .map(PatientView::from)
        .ok_or_else(|| ApiError::NotFound("No patient matches the search".into()))?;

    Ok(Json(PatientLookupResponse { patient }))
}
