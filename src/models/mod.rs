pub mod enums;
pub mod history;
pub mod prescription;

pub use enums::*;
pub use history::*;
pub use prescription::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Prescription must contain at least one medicine")]
    EmptyMedicines,
}

/// Presence check shared by record constructors: trimmed text must be non-empty.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::MissingField(field));
    }
    Ok(())
}
