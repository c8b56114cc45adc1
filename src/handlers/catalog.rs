//! Table listing and table browsing pages.

use crate::error::AppError;
use crate::response::page;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TableListContext {
    table_names: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TableDataContext<'a> {
    table_name: &'a str,
    data: Vec<crate::backend::Row>,
}

/// GET /getTables
pub async fn list_tables(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let table_names = CatalogService::tables(state.backend.as_ref()).await?;
    page(&state, "tableList", TableListContext { table_names })
}

/// GET /getTableData/:tableName. Also mounted without the segment so an empty
/// name reaches the service and is rejected there.
pub async fn table_data(
    State(state): State<AppState>,
    table_name: Option<Path<String>>,
) -> Result<impl IntoResponse, AppError> {
    let table_name = table_name.map(|Path(name)| name).unwrap_or_default();
    let data = CatalogService::table_data(state.backend.as_ref(), &table_name).await?;
    page(
        &state,
        "tableData",
        TableDataContext {
            table_name: &table_name,
            data,
        },
    )
}
