//! Prescription endpoints.
//!
//! - `GET /api/prescriptions`: search/sort/filter over all prescriptions
//! - `POST /api/prescriptions`: issue a prescription
//! - `POST /api/prescriptions/:id/status`: set active/inactive
//! - `POST /api/prescriptions/:id/dispense`: pharmacy hand-out, deactivates

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{NewPrescription, Prescription, PrescriptionFilter, PrescriptionSortKey};
use crate::query::{self, RawQuery};

#[derive(Serialize)]
pub struct PrescriptionListResponse {
    pub count: usize,
    pub records: Vec<Prescription>,
}

/// `GET /api/prescriptions?search=&sort=date|status&filter=all|active|inactive`
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(raw): Query<RawQuery>,
) -> Result<Json<PrescriptionListResponse>, ApiError> {
    let query = raw.resolve::<PrescriptionSortKey, PrescriptionFilter>()?;
    let collection = ctx.store.list_prescriptions()?;
    let records = query::run_query(&collection, &query);

    Ok(Json(PrescriptionListResponse {
        count: records.len(),
        records,
    }))
}

/// `POST /api/prescriptions`: returns 201 with the stored prescription.
pub async fn create(
    State(ctx): State<ApiContext>,
    payload: Result<Json<NewPrescription>, JsonRejection>,
) -> Result<(StatusCode, Json<Prescription>), ApiError> {
    let Json(prescription) = payload?;
    let stored = ctx.store.create_prescription(prescription)?;
    Ok((StatusCode::CREATED, Json(stored)))
}

#[derive(Deserialize)]
pub struct StatusUpdate {
    pub is_active: bool,
}

/// `POST /api/prescriptions/:id/status`
pub async fn set_status(
    State(ctx): State<ApiContext>,
    Path(prescription_id): Path<String>,
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<Json<Prescription>, ApiError> {
    let id = parse_id(&prescription_id)?;
    let Json(update) = payload?;
    let updated = ctx.store.set_prescription_status(&id, update.is_active)?;
    Ok(Json(updated))
}

/// `POST /api/prescriptions/:id/dispense`: marks the prescription inactive.
pub async fn dispense(
    State(ctx): State<ApiContext>,
    Path(prescription_id): Path<String>,
) -> Result<Json<Prescription>, ApiError> {
    let id = parse_id(&prescription_id)?;
    let updated = ctx.store.set_prescription_status(&id, false)?;
    Ok(Json(updated))
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|e| ApiError::BadRequest(format!("Invalid prescription ID: {e}")))
}
