use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::AppointmentStatus;
use super::{DoctorId, ModelError};

/// Normalized agenda filter. `None` means "all".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaFilter {
    pub date: NaiveDate,
    pub doctor_id: Option<DoctorId>,
    pub status: Option<AppointmentStatus>,
}

impl AgendaFilter {
    /// Every appointment of one day.
    pub fn for_day(date: NaiveDate) -> Self {
        Self {
            date,
            doctor_id: None,
            status: None,
        }
    }

    pub fn with_doctor(mut self, doctor_id: DoctorId) -> Self {
        self.doctor_id = Some(doctor_id);
        self
    }

    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Raw agenda query as it arrives from the reception screen
/// (`?date=YYYY-MM-DD&doctorId=&status=`). Empty values mean "all".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentQuery {
    pub date: Option<String>,
    pub doctor_id: Option<String>,
    pub status: Option<String>,
}

impl AppointmentQuery {
    /// Normalizes the raw strings, defaulting the day to `today`.
    pub fn into_filter(self, today: NaiveDate) -> Result<AgendaFilter, ModelError> {
        let date = match non_empty(self.date.as_deref()) {
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| ModelError::InvalidDate(raw.to_string()))?,
            None => today,
        };

        let doctor_id = non_empty(self.doctor_id.as_deref())
            .map(parse_doctor_id)
            .transpose()?;

        let status = non_empty(self.status.as_deref())
            .map(str::parse::<AppointmentStatus>)
            .transpose()?;

        Ok(AgendaFilter {
            date,
            doctor_id,
            status,
        })
    }
}

/// Search text for patient listings (`?q=`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientQuery {
    pub q: Option<String>,
}

/// Doctor ids come from a `<select>` as text; `"2"`, `" 2 "` and `"02"` are the same doctor.
pub fn parse_doctor_id(raw: &str) -> Result<DoctorId, ModelError> {
    raw.trim().parse().map_err(|_| ModelError::InvalidId {
        field: "doctorId".into(),
        value: raw.into(),
    })
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}
