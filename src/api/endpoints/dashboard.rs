//! Role dashboard endpoint.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::dashboard::{DashboardParams, DashboardRecords, DashboardView};
use crate::models::Role;

#[derive(Serialize)]
pub struct DashboardResponse {
    pub view: DashboardView,
    pub count: usize,
    #[serde(flatten)]
    pub records: DashboardRecords,
}

/// `GET /api/dashboard/:role?tab=&search=&sort=&filter=`: the role's
/// default view with any supplied parameters applied on top.
pub async fn view(
    State(ctx): State<ApiContext>,
    Path(role): Path<String>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let role: Role = role
        .parse()
        .map_err(|_| ApiError::NotFound(format!("Unknown dashboard role: {role}")))?;

    let mut view = DashboardView::for_role(role);
    view.apply(params)?;
    let records = view.records(ctx.store.as_ref())?;

    Ok(Json(DashboardResponse {
        count: records.len(),
        view,
        records,
    }))
}
