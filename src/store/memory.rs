use std::sync::RwLock;

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use super::{sample, RecordStore, StoreError};
use crate::models::{MedicalHistoryEntry, NewHistoryEntry, NewPrescription, Prescription};

/// Process-local store. Collections keep insertion order, which is the
/// input order the query engine's stable sort preserves on ties.
pub struct InMemoryStore {
    history: RwLock<Vec<MedicalHistoryEntry>>,
    prescriptions: RwLock<Vec<Prescription>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::from_records(Vec::new(), Vec::new())
    }

    pub fn with_sample_data() -> Self {
        Self::from_records(sample::sample_history(), sample::sample_prescriptions())
    }

    pub fn from_records(
        history: Vec<MedicalHistoryEntry>,
        prescriptions: Vec<Prescription>,
    ) -> Self {
        Self {
            history: RwLock::new(history),
            prescriptions: RwLock::new(prescriptions),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl RecordStore for InMemoryStore {
    fn list_history(&self) -> Result<Vec<MedicalHistoryEntry>, StoreError> {
        let guard = self.history.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(guard.clone())
    }

    fn list_prescriptions(&self) -> Result<Vec<Prescription>, StoreError> {
        let guard = self
            .prescriptions
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(guard.clone())
    }

    fn create_history(&self, entry: NewHistoryEntry) -> Result<MedicalHistoryEntry, StoreError> {
        let entry = entry.into_entry(Uuid::new_v4(), today())?;
        let mut guard = self.history.write().map_err(|_| StoreError::LockPoisoned)?;
        guard.push(entry.clone());
        tracing::info!(id = %entry.id, severity = %entry.severity, "History entry created");
        Ok(entry)
    }

    fn create_prescription(
        &self,
        prescription: NewPrescription,
    ) -> Result<Prescription, StoreError> {
        let prescription = prescription.into_prescription(Uuid::new_v4(), today())?;
        let mut guard = self
            .prescriptions
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        guard.push(prescription.clone());
        tracing::info!(
            id = %prescription.id,
            medicines = prescription.medicines.len(),
            "Prescription created"
        );
        Ok(prescription)
    }

    fn set_prescription_status(
        &self,
        id: &Uuid,
        is_active: bool,
    ) -> Result<Prescription, StoreError> {
        let mut guard = self
            .prescriptions
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let prescription = guard
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or(StoreError::NotFound {
                entity_type: "prescription",
                id: *id,
            })?;
        prescription.is_active = is_active;
        tracing::info!(%id, is_active, "Prescription status updated");
        Ok(prescription.clone())
    }
}
