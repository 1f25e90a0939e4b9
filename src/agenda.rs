//! Day agenda and dashboard KPIs.
//!
//! Provides the data behind the reception dashboard: the day-filtered
//! appointment listing (optionally narrowed by doctor and status) and the
//! three daily counters. Functions are pure over a `ReceptionStore`;
//! rendering the rows is the caller's business.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AgendaFilter, Appointment, AppointmentId, StatusTag};
use crate::store::ReceptionStore;

/// Shown in place of a doctor or patient that cannot be resolved.
pub const MISSING_REFERENCE: &str = "-";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One row of the day listing, ready to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaRow {
    pub appointment_id: AppointmentId,
    pub time: String,
    pub patient_name: String,
    pub doctor_name: String,
    pub doctor_specialty: String,
    pub status_label: String,
    pub tag: StatusTag,
}

/// Dashboard counters for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyKpis {
    pub total: u32,
    pub confirmed: u32,
    pub cancelled: u32,
}

/// Agenda screen data, single fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaView {
    pub date: NaiveDate,
    pub rows: Vec<AgendaRow>,
    pub kpis: DailyKpis,
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Appointments of `date`, in stored order.
pub fn appointments_on(appointments: &[Appointment], date: NaiveDate) -> Vec<&Appointment> {
    appointments.iter().filter(|a| a.date() == date).collect()
}

/// Applies the full agenda filter and sorts by time of day.
///
/// The sort is stable, so appointments sharing a time keep their insertion
/// order. A status filter only matches a recorded status.
pub fn filter_appointments<'a>(
    appointments: &'a [Appointment],
    filter: &AgendaFilter,
) -> Vec<&'a Appointment> {
    let mut matches: Vec<&Appointment> = appointments_on(appointments, filter.date);

    if let Some(doctor_id) = filter.doctor_id {
        matches.retain(|a| a.doctor_id == doctor_id);
    }

    if let Some(status) = filter.status {
        matches.retain(|a| a.status == Some(status));
    }

    matches.sort_by_key(|a| a.scheduled_at.time());
    matches
}

// ---------------------------------------------------------------------------
// Rows and KPIs
// ---------------------------------------------------------------------------

/// Resolves the doctor and patient of `appointment` into a display row.
pub fn build_row(store: &ReceptionStore, appointment: &Appointment) -> AgendaRow {
    let doctor = store.doctor(appointment.doctor_id);
    let patient = store.patient(appointment.patient_id);

    AgendaRow {
        appointment_id: appointment.id,
        time: appointment.time_of_day(),
        patient_name: patient.map_or(MISSING_REFERENCE, |p| p.name.as_str()).to_string(),
        doctor_name: doctor.map_or(MISSING_REFERENCE, |d| d.name.as_str()).to_string(),
        doctor_specialty: doctor
            .map_or(MISSING_REFERENCE, |d| d.specialty.as_str())
            .to_string(),
        status_label: appointment.effective_status().as_str().to_string(),
        tag: StatusTag::for_status(appointment.status),
    }
}

/// Day listing rows matching `filter`.
pub fn list_day_appointments(store: &ReceptionStore, filter: &AgendaFilter) -> Vec<AgendaRow> {
    let rows: Vec<AgendaRow> = filter_appointments(store.appointments(), filter)
        .into_iter()
        .map(|a| build_row(store, a))
        .collect();

    tracing::debug!(
        date = %filter.date,
        doctor_id = ?filter.doctor_id,
        status = ?filter.status,
        rows = rows.len(),
        "Agenda listing built"
    );
    rows
}

/// Counts the day's appointments; doctor and status filters do not apply.
pub fn compute_daily_kpis(appointments: &[Appointment], date: NaiveDate) -> DailyKpis {
    appointments
        .iter()
        .filter(|a| a.date() == date)
        .fold(DailyKpis::default(), |mut kpis, a| {
            kpis.total += 1;
            if a.is_confirmed() {
                kpis.confirmed += 1;
            }
            if a.is_cancelled() {
                kpis.cancelled += 1;
            }
            kpis
        })
}

/// Top-level assembly: listing plus KPIs for the filter's day.
pub fn build_agenda(store: &ReceptionStore, filter: &AgendaFilter) -> AgendaView {
    AgendaView {
        date: filter.date,
        rows: list_day_appointments(store, filter),
        kpis: compute_daily_kpis(store.appointments(), filter.date),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
