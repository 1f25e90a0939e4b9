use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::enums::AppointmentStatus;
use super::{AppointmentId, DoctorId, PatientId};

/// Clock format used for agenda rows and time-slot reports.
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    /// Clinic-local wall-clock time.
    pub scheduled_at: NaiveDateTime,
    pub doctor_id: DoctorId,
    pub patient_id: PatientId,
    pub status: Option<AppointmentStatus>,
}

impl Appointment {
    pub fn date(&self) -> NaiveDate {
        self.scheduled_at.date()
    }

    /// `HH:MM`, zero-padded.
    pub fn time_of_day(&self) -> String {
        self.scheduled_at.format(TIME_OF_DAY_FORMAT).to_string()
    }

    /// Stored status, or Pending when none was recorded.
    pub fn effective_status(&self) -> AppointmentStatus {
        self.status.unwrap_or(AppointmentStatus::Pending)
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == Some(AppointmentStatus::Confirmed)
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == Some(AppointmentStatus::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn time_of_day_is_zero_padded() {
        let appt = Appointment {
            id: 1,
            scheduled_at: at(9, 5),
            doctor_id: 1,
            patient_id: 1,
            status: None,
        };
        assert_eq!(appt.time_of_day(), "09:05");
        assert_eq!(appt.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn absent_status_is_pending() {
        let appt = Appointment {
            id: 1,
            scheduled_at: at(14, 0),
            doctor_id: 1,
            patient_id: 1,
            status: None,
        };
        assert_eq!(appt.effective_status(), AppointmentStatus::Pending);
        assert!(!appt.is_confirmed());
        assert!(!appt.is_cancelled());
    }

    #[test]
    fn serializes_with_wire_status() {
        let appt = Appointment {
            id: 7,
            scheduled_at: at(11, 30),
            doctor_id: 2,
            patient_id: 1,
            status: Some(AppointmentStatus::Confirmed),
        };
        let json = serde_json::to_value(&appt).unwrap();
        assert_eq!(json["status"], "Confirmada");
        assert_eq!(json["scheduled_at"], "2024-01-01T11:30:00");
    }
}
