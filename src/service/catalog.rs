//! Table listing and raw table browsing.

use crate::backend::{Backend, Row};
use crate::error::AppError;

pub struct CatalogService;

impl CatalogService {
    pub async fn tables(backend: &dyn Backend) -> Result<Vec<String>, AppError> {
        backend.list_tables().await
    }

    /// All rows of one table. The name must be one of the database's own tables;
    /// anything else is rejected before it reaches the query text.
    pub async fn table_data(backend: &dyn Backend, table_name: &str) -> Result<Vec<Row>, AppError> {
        if table_name.is_empty() {
            return Err(AppError::InvalidInput("Table name is required".into()));
        }
        let known = backend.list_tables().await?;
        if !known.iter().any(|t| t == table_name) {
            return Err(AppError::InvalidInput(format!("unknown table: {}", table_name)));
        }
        let sql = format!("SELECT * FROM {}", quote_identifier(table_name));
        backend.fetch_all(&sql, &[]).await
    }
}

/// Quote a MySQL identifier with backticks, doubling any embedded backtick.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}
