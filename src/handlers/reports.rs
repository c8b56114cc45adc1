//! Report form and report results.

use crate::backend::Row;
use crate::error::AppError;
use crate::response::{page, static_page};
use crate::service::ReportDispatcher;
use crate::state::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRange {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportResultContext {
    report_result: Vec<Row>,
}

/// GET /reportForm
pub async fn report_form(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    static_page(&state, "reportForm")
}

/// GET /generateReport/:reportType?startDate=&endDate=
pub async fn generate_report(
    State(state): State<AppState>,
    Path(report_type): Path<String>,
    range: Result<Query<ReportRange>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(range) = range?;
    let report_result = ReportDispatcher::run(
        state.backend.as_ref(),
        &report_type,
        range.start_date,
        range.end_date,
    )
    .await?;
    page(&state, "reportResult", ReportResultContext { report_result })
}
