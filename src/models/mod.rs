//! Plain records held by the reception store.
//!
//! References between records are by id only; lookups go through
//! `ReceptionStore` and a missing target is not an error.

pub mod account;
pub mod appointment;
pub mod clinic;
pub mod enums;
pub mod filters;
pub mod patient;
pub mod professional;

pub use account::Account;
pub use appointment::Appointment;
pub use clinic::Clinic;
pub use enums::{AppointmentStatus, Role, StatusTag};
pub use filters::{AgendaFilter, AppointmentQuery, PatientQuery};
pub use patient::Patient;
pub use professional::{Doctor, Receptionist};

use thiserror::Error;

pub type ClinicId = u32;
pub type DoctorId = u32;
pub type PatientId = u32;
pub type ReceptionistId = u32;
pub type AccountId = u32;
pub type AppointmentId = u32;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Invalid id for {field}: {value}")]
    InvalidId { field: String, value: String },

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
}
