//! In-memory reception store.
//!
//! Holds every collection the reception desk works with. It is passed
//! explicitly to the view-model functions (`agenda`, `reports`, `search`);
//! shared access goes through `CoreState`.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::config;
use crate::models::{
    Account, Appointment, AppointmentId, AppointmentStatus, Clinic, Doctor, DoctorId, Patient,
    PatientId, Receptionist,
};
use crate::seed::{demo_dataset, DemoDataset, SeedSummary};

/// Fallback reference used by quick add when a collection is empty.
const DEFAULT_REFERENCE_ID: u32 = 1;

#[derive(Debug, Clone, Default)]
pub struct ReceptionStore {
    clinics: Vec<Clinic>,
    doctors: Vec<Doctor>,
    patients: Vec<Patient>,
    receptionists: Vec<Receptionist>,
    accounts: Vec<Account>,
    appointments: Vec<Appointment>,
}

impl ReceptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a prepared dataset.
    pub fn from_dataset(data: DemoDataset) -> Self {
        Self {
            clinics: data.clinics,
            doctors: data.doctors,
            patients: data.patients,
            receptionists: data.receptionists,
            accounts: data.accounts,
            appointments: data.appointments,
        }
    }

    /// Replaces every collection with the demo dataset for `today`.
    pub fn load_demo_data(&mut self, today: NaiveDate) -> SeedSummary {
        let data = demo_dataset(today);
        let summary = data.summary();
        *self = Self::from_dataset(data);

        tracing::info!(
            %today,
            doctors = summary.doctors,
            patients = summary.patients,
            appointments = summary.appointments,
            "Demo data loaded"
        );
        summary
    }

    /// Appends a pending appointment `QUICK_ADD_OFFSET_MINUTES` after `now`,
    /// booked with the first doctor and first patient on file.
    pub fn quick_add_appointment(&mut self, now: NaiveDateTime) -> &Appointment {
        let appointment = Appointment {
            id: self.next_appointment_id(),
            scheduled_at: now + Duration::minutes(config::QUICK_ADD_OFFSET_MINUTES),
            doctor_id: self.doctors.first().map_or(DEFAULT_REFERENCE_ID, |d| d.id),
            patient_id: self.patients.first().map_or(DEFAULT_REFERENCE_ID, |p| p.id),
            status: Some(AppointmentStatus::Pending),
        };

        tracing::info!(
            id = appointment.id,
            at = %appointment.scheduled_at,
            doctor_id = appointment.doctor_id,
            patient_id = appointment.patient_id,
            "Quick appointment added"
        );

        let index = self.appointments.len();
        self.appointments.push(appointment);
        &self.appointments[index]
    }

    /// One past the highest id in use, so ids stay unique.
    pub fn next_appointment_id(&self) -> AppointmentId {
        self.appointments
            .iter()
            .map(|a| a.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    pub fn doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn appointment(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn clinics(&self) -> &[Clinic] {
        &self.clinics
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn receptionists(&self) -> &[Receptionist] {
        &self.receptionists
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// True once any data has been loaded.
    pub fn is_seeded(&self) -> bool {
        !(self.doctors.is_empty() && self.patients.is_empty() && self.appointments.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn noon() -> NaiveDateTime {
        today().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn new_store_is_empty() {
        let store = ReceptionStore::new();
        assert!(store.appointments().is_empty());
        assert!(store.doctors().is_empty());
        assert!(!store.is_seeded());
    }

    #[test]
    fn load_demo_data_fills_every_collection() {
        let mut store = ReceptionStore::new();
        let summary = store.load_demo_data(today());

        assert_eq!(summary.appointments, 4);
        assert_eq!(store.clinics().len(), 1);
        assert_eq!(store.doctors().len(), 2);
        assert_eq!(store.patients().len(), 2);
        assert_eq!(store.receptionists().len(), 1);
        assert_eq!(store.accounts().len(), 1);
        assert!(store.is_seeded());
    }

    #[test]
    fn load_demo_data_replaces_previous_contents() {
        let mut store = ReceptionStore::new();
        store.load_demo_data(today());
        store.quick_add_appointment(noon());
        assert_eq!(store.appointments().len(), 5);

        store.load_demo_data(today());
        assert_eq!(store.appointments().len(), 4);
    }

    #[test]
    fn lookups_by_id() {
        let mut store = ReceptionStore::new();
        store.load_demo_data(today());

        assert_eq!(store.doctor(2).unwrap().specialty, "Pediatría");
        assert_eq!(store.patient(1).unwrap().name, "Carlos López");
        assert_eq!(store.appointment(3).unwrap().doctor_id, 1);
        assert!(store.doctor(99).is_none());
        assert!(store.patient(0).is_none());
    }

    #[test]
    fn quick_add_uses_next_id_and_first_references() {
        let mut store = ReceptionStore::new();
        store.load_demo_data(today());

        let added = store.quick_add_appointment(noon()).clone();
        assert_eq!(added.id, 5);
        assert_eq!(added.scheduled_at, today().and_hms_opt(12, 30, 0).unwrap());
        assert_eq!(added.doctor_id, 1);
        assert_eq!(added.patient_id, 1);
        assert_eq!(added.status, Some(AppointmentStatus::Pending));
        assert_eq!(store.appointments().last(), Some(&added));
    }

    #[test]
    fn quick_add_on_empty_store_defaults_references() {
        let mut store = ReceptionStore::new();
        let added = store.quick_add_appointment(noon()).clone();
        assert_eq!(added.id, 1);
        assert_eq!(added.doctor_id, 1);
        assert_eq!(added.patient_id, 1);
    }

    #[test]
    fn quick_add_ids_stay_unique() {
        let mut store = ReceptionStore::new();
        for _ in 0..3 {
            store.quick_add_appointment(noon());
        }
        let ids: Vec<_> = store.appointments().iter().map(|a| a.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn quick_add_can_cross_midnight() {
        let mut store = ReceptionStore::new();
        let late = today().and_hms_opt(23, 45, 0).unwrap();
        let added = store.quick_add_appointment(late).clone();
        assert_eq!(added.date(), today().succ_opt().unwrap());
        assert_eq!(added.time_of_day(), "00:15");
    }
}
