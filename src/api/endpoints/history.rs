//! Medical history endpoints.
//!
//! - `GET /api/history`: search/sort/filter over all entries
//! - `POST /api/history`: record a new entry

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{HistoryFilter, HistorySortKey, MedicalHistoryEntry, NewHistoryEntry};
use crate::query::{self, RawQuery};

#[derive(Serialize)]
pub struct HistoryListResponse {
    pub count: usize,
    pub records: Vec<MedicalHistoryEntry>,
}

/// `GET /api/history?search=&sort=date|severity&filter=all|low|medium|high`
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(raw): Query<RawQuery>,
) -> Result<Json<HistoryListResponse>, ApiError> {
    let query = raw.resolve::<HistorySortKey, HistoryFilter>()?;
    let collection = ctx.store.list_history()?;
    let records = query::run_query(&collection, &query);

    Ok(Json(HistoryListResponse {
        count: records.len(),
        records,
    }))
}

/// `POST /api/history`: returns 201 with the stored entry.
pub async fn create(
    State(ctx): State<ApiContext>,
    payload: Result<Json<NewHistoryEntry>, JsonRejection>,
) -> Result<(StatusCode, Json<MedicalHistoryEntry>), ApiError> {
    let Json(entry) = payload?;
    let stored = ctx.store.create_history(entry)?;
    Ok((StatusCode::CREATED, Json(stored)))
}
