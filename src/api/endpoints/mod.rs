//! API endpoint handlers.
//!
//! Each module corresponds to a dashboard screen or form.

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod history;
pub mod prescriptions;
