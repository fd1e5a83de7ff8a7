use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{require_text, ModelError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    pub name: String,
    pub dosage: String,
    pub duration: String,
}

/// A prescription issued on `date`. Always carries at least one medicine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: Uuid,
    pub date: NaiveDate,
    pub medicines: Vec<Medicine>,
    pub is_active: bool,
}

impl Prescription {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_medicines(&self.medicines)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPrescription {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub medicines: Vec<Medicine>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl NewPrescription {
    pub fn into_prescription(self, id: Uuid, today: NaiveDate) -> Result<Prescription, ModelError> {
        let prescription = Prescription {
            id,
            date: self.date.unwrap_or(today),
            medicines: self.medicines,
            is_active: self.is_active,
        };
        prescription.validate()?;
        Ok(prescription)
    }
}

fn validate_medicines(medicines: &[Medicine]) -> Result<(), ModelError> {
    if medicines.is_empty() {
        return Err(ModelError::EmptyMedicines);
    }
    for medicine in medicines {
        require_text("medicines.name", &medicine.name)?;
    }
    Ok(())
}
