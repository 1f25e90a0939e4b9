use serde::{Deserialize, Serialize};

use super::enums::Role;
use super::AccountId;

/// Login account. `person_id` points at a doctor or receptionist when set;
/// nothing in the reception core follows that link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub person_id: Option<u32>,
}
