//! Demo dataset loaded by the "seed" action on the reception screen.
//!
//! Mirrors the clinic's initial inserts: one clinic, two doctors, two
//! patients, one receptionist, the admin account and four appointments
//! spread over the given day.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{
    Account, Appointment, AppointmentStatus, Clinic, Doctor, Patient, Receptionist, Role,
};

/// Every collection of the store, built in one go.
#[derive(Debug, Clone, Default)]
pub struct DemoDataset {
    pub clinics: Vec<Clinic>,
    pub doctors: Vec<Doctor>,
    pub patients: Vec<Patient>,
    pub receptionists: Vec<Receptionist>,
    pub accounts: Vec<Account>,
    pub appointments: Vec<Appointment>,
}

/// Record counts after a seed, returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSummary {
    pub clinics: usize,
    pub doctors: usize,
    pub patients: usize,
    pub receptionists: usize,
    pub accounts: usize,
    pub appointments: usize,
}

impl DemoDataset {
    pub fn summary(&self) -> SeedSummary {
        SeedSummary {
            clinics: self.clinics.len(),
            doctors: self.doctors.len(),
            patients: self.patients.len(),
            receptionists: self.receptionists.len(),
            accounts: self.accounts.len(),
            appointments: self.appointments.len(),
        }
    }
}

/// Builds the demo dataset with its appointments on `today`.
pub fn demo_dataset(today: NaiveDate) -> DemoDataset {
    let clinics = vec![Clinic {
        id: 1,
        name: "Clinitek Central".into(),
        address: "Av. Principal #123".into(),
        phone: "2222-3333".into(),
    }];

    let doctors = vec![
        Doctor {
            id: 1,
            name: "Dr. Juan Pérez".into(),
            specialty: "Cardiología".into(),
            phone: "7890-1234".into(),
        },
        Doctor {
            id: 2,
            name: "Dra. María Gómez".into(),
            specialty: "Pediatría".into(),
            phone: "7890-5678".into(),
        },
    ];

    let patients = vec![
        Patient::new(1, "Carlos López", "123456789")
            .with_phone("7777-8888")
            .with_email("carlos@mail.com"),
        Patient::new(2, "Ana Torres", "987654321")
            .with_phone("9999-0000")
            .with_email("ana@mail.com"),
    ];

    let receptionists = vec![Receptionist {
        id: 1,
        name: "Laura Sánchez".into(),
        phone: "2233-4455".into(),
    }];

    let accounts = vec![Account {
        id: 1,
        username: "admin".into(),
        password_hash: "admin".into(),
        role: Role::Admin,
        person_id: None,
    }];

    let slot = |h: u32, m: u32| -> NaiveDateTime {
        // Literal hours are in range, midnight is never used.
        today
            .and_hms_opt(h, m, 0)
            .unwrap_or_else(|| today.and_time(chrono::NaiveTime::MIN))
    };

    let appointments = vec![
        Appointment {
            id: 1,
            scheduled_at: slot(9, 0),
            doctor_id: 1,
            patient_id: 1,
            status: Some(AppointmentStatus::Pending),
        },
        Appointment {
            id: 2,
            scheduled_at: slot(10, 0),
            doctor_id: 2,
            patient_id: 2,
            status: Some(AppointmentStatus::Confirmed),
        },
        Appointment {
            id: 3,
            scheduled_at: slot(11, 30),
            doctor_id: 1,
            patient_id: 2,
            status: Some(AppointmentStatus::Pending),
        },
        Appointment {
            id: 4,
            scheduled_at: slot(14, 0),
            doctor_id: 2,
            patient_id: 1,
            status: Some(AppointmentStatus::Confirmed),
        },
    ];

    DemoDataset {
        clinics,
        doctors,
        patients,
        receptionists,
        accounts,
        appointments,
    }
}
