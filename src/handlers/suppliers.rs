//! Supplier page and its form actions.

use crate::backend::Row;
use crate::error::AppError;
use crate::response::{page, see_other};
use crate::service::{NewSupplier, SupplierService};
use crate::state::AppState;
use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Form;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SupplierForm {
    pub naziv: String,
    pub adresa: String,
}

#[derive(Serialize)]
struct SupplierFormContext {
    suppliers: Vec<Row>,
}

/// GET /supplierForm
pub async fn supplier_form(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let suppliers = SupplierService::list(state.backend.as_ref()).await?;
    page(&state, "supplierForm", SupplierFormContext { suppliers })
}

/// POST /addSupplier
pub async fn add_supplier(
    State(state): State<AppState>,
    form: Result<Form<SupplierForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(form) = form?;
    let supplier = NewSupplier {
        name: form.naziv,
        address: form.adresa,
    };
    SupplierService::add(state.backend.as_ref(), &supplier).await?;
    Ok(see_other("/supplierForm"))
}

/// GET /updateSupplier/:supplierId. Editing suppliers is not built; answers 501
/// whatever the id looks like.
pub async fn update_supplier() -> Result<(), AppError> {
    Err(AppError::NotImplemented("updateSupplier"))
}

/// POST /deleteSupplier/:supplierId
pub async fn delete_supplier(
    State(state): State<AppState>,
    supplier_id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(supplier_id) = supplier_id?;
    SupplierService::delete(state.backend.as_ref(), supplier_id).await?;
    Ok(see_other("/supplierForm"))
}
