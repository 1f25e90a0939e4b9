use serde::{Deserialize, Serialize};

use super::{DoctorId, ReceptionistId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialty: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receptionist {
    pub id: ReceptionistId,
    pub name: String,
    pub phone: String,
}
