use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Severity;
use super::{require_text, ModelError};

/// One encounter in a patient's medical history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalHistoryEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub diagnosis: String,
    pub symptoms: Vec<String>,
    pub notes: String,
    #[serde(rename = "doctor")]
    pub attending_provider: String,
    pub severity: Severity,
}

/// Submission payload for a new history entry. The store assigns the id;
/// a missing date means "today".
#[derive(Debug, Clone, Deserialize)]
pub struct NewHistoryEntry {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub diagnosis: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(rename = "doctor", default)]
    pub attending_provider: String,
    pub severity: Severity,
}

impl NewHistoryEntry {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_text("diagnosis", &self.diagnosis)
    }

    /// Build the stored entry. Blank symptom tags are dropped and the rest trimmed.
    pub fn into_entry(self, id: Uuid, today: NaiveDate) -> Result<MedicalHistoryEntry, ModelError> {
        self.validate()?;
        Ok(MedicalHistoryEntry {
            id,
            date: self.date.unwrap_or(today),
            diagnosis: self.diagnosis.trim().to_string(),
            symptoms: self
                .symptoms
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            notes: self.notes,
            attending_provider: self.attending_provider,
            severity: self.severity,
        })
    }
}
