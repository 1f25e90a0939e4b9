//! API endpoint handlers.
//!
//! Each module corresponds to a reception screen or action.
//! Handlers reuse the view-model functions and never render markup.

pub mod agenda;
pub mod appointments;
pub mod doctors;
pub mod health;
pub mod patients;
pub mod reports;
pub mod seed;
