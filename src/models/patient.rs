use serde::{Deserialize, Serialize};

use super::PatientId;
use crate::dui;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    /// Raw DUI digits, e.g. `123456789`.
    pub dui: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

impl Patient {
    /// Builds a patient, normalizing `dui` to storage form whatever shape it arrives in.
    pub fn new(id: PatientId, name: impl Into<String>, dui: &str) -> Self {
        Self {
            id,
            name: name.into(),
            dui: dui::to_storage(dui),
            phone: None,
            email: None,
            notes: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// DUI as shown on screen, `XXXXXXXX-X`.
    pub fn display_dui(&self) -> String {
        dui::to_display(&self.dui)
    }
}
