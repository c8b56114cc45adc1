//! Supplier listing, creation and deletion.

use crate::backend::{Backend, BindValue, ExecOutcome, Row};
use crate::error::AppError;

pub const LIST_SUPPLIERS_SQL: &str = "SELECT * FROM dobavljaci";
pub const INSERT_SUPPLIER_SQL: &str = "INSERT INTO dobavljaci (naziv, adresa) VALUES (?, ?)";
pub const DELETE_SUPPLIER_SQL: &str = "DELETE FROM dobavljaci WHERE id_dobavljaca = ?";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSupplier {
    pub name: String,
    pub address: String,
}

pub struct SupplierService;

impl SupplierService {
    pub async fn list(backend: &dyn Backend) -> Result<Vec<Row>, AppError> {
        backend.fetch_all(LIST_SUPPLIERS_SQL, &[]).await
    }

    pub async fn add(backend: &dyn Backend, supplier: &NewSupplier) -> Result<ExecOutcome, AppError> {
        backend
            .execute(
                INSERT_SUPPLIER_SQL,
                &[
                    BindValue::from(supplier.name.as_str()),
                    BindValue::from(supplier.address.as_str()),
                ],
            )
            .await
    }

    /// Delete by id. Deleting an id that does not exist is not an error.
    pub async fn delete(backend: &dyn Backend, supplier_id: i64) -> Result<ExecOutcome, AppError> {
        let outcome = backend
            .execute(DELETE_SUPPLIER_SQL, &[BindValue::I64(supplier_id)])
            .await?;
        if outcome.rows_affected == 0 {
            tracing::debug!(supplier_id, "delete matched no supplier");
        }
        Ok(outcome)
    }
}
