//! Record store: the source of record collections handed to the query engine.
//!
//! The store owns id generation and every mutation. Readers always receive
//! owned snapshots, so a query result never aliases store state.

mod memory;
pub mod sample;

pub use memory::InMemoryStore;

use uuid::Uuid;

use crate::models::{
    MedicalHistoryEntry, ModelError, NewHistoryEntry, NewPrescription, Prescription,
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Invalid record: {0}")]
    Invalid(#[from] ModelError),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

pub trait RecordStore: Send + Sync {
    fn list_history(&self) -> Result<Vec<MedicalHistoryEntry>, StoreError>;
    fn list_prescriptions(&self) -> Result<Vec<Prescription>, StoreError>;
    fn create_history(&self, entry: NewHistoryEntry) -> Result<MedicalHistoryEntry, StoreError>;
    fn create_prescription(&self, prescription: NewPrescription)
        -> Result<Prescription, StoreError>;
    fn set_prescription_status(&self, id: &Uuid, is_active: bool)
        -> Result<Prescription, StoreError>;
}
