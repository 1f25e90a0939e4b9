use serde::{Deserialize, Serialize};

use super::ClinicId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clinic {
    pub id: ClinicId,
    pub name: String,
    pub address: String,
    pub phone: String,
}
