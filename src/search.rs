//! Patient search for the profiles list and the global search box.

use serde::{Deserialize, Serialize};

use crate::models::Patient;

/// A patient as listed on screen, with the DUI already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientView {
    #[serde(flatten)]
    pub patient: Patient,
    pub dui_display: String,
}

impl From<&Patient> for PatientView {
    fn from(patient: &Patient) -> Self {
        Self {
            dui_display: patient.display_dui(),
            patient: patient.clone(),
        }
    }
}

fn matches(patient: &Patient, needle: &str) -> bool {
    patient.name.to_lowercase().contains(needle) || patient.display_dui().contains(needle)
}

/// Patients whose name (case-insensitive) or formatted DUI contains `query`.
/// An empty query lists everyone.
pub fn search_patients<'a>(patients: &'a [Patient], query: &str) -> Vec<&'a Patient> {
    let needle = query.to_lowercase();
    patients.iter().filter(|p| matches(p, &needle)).collect()
}

/// "Jump to patient": first match for a trimmed search term.
/// A blank term finds nobody.
pub fn find_patient<'a>(patients: &'a [Patient], term: &str) -> Option<&'a Patient> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let hit = patients.iter().find(|p| matches(p, &needle));
    tracing::debug!(term = needle.as_str(), found = hit.is_some(), "Patient lookup");
    hit
}
