//! Data backend gateway: the one seam between request handling and the database.
//! Handlers receive it as `Arc<dyn Backend>` so tests can swap in a fake.

mod mysql;
pub mod params;

pub use mysql::MySqlGateway;
pub use params::BindValue;

use crate::error::AppError;
use async_trait::async_trait;

/// One result row: column name to value, in the order the backend returned the columns.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Outcome of a statement that returns no rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecOutcome {
    pub rows_affected: u64,
    /// Id generated by an AUTO_INCREMENT column on INSERT; 0 when none.
    pub last_insert_id: u64,
}

#[async_trait]
pub trait Backend: Send + Sync {
    /// Table names of the configured database.
    async fn list_tables(&self) -> Result<Vec<String>, AppError>;

    async fn fetch_all(&self, sql: &str, params: &[BindValue]) -> Result<Vec<Row>, AppError>;

    async fn fetch_optional(&self, sql: &str, params: &[BindValue]) -> Result<Option<Row>, AppError>;

    async fn execute(&self, sql: &str, params: &[BindValue]) -> Result<ExecOutcome, AppError>;

    /// Invoke a stored procedure with positional arguments and return its first result set.
    async fn call_procedure(&self, name: &str, params: &[BindValue]) -> Result<Vec<Row>, AppError>;

    /// Cheap round trip used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}

/// `CALL name(?, ?, ...)` with one placeholder per argument.
pub fn procedure_call_sql(name: &str, arity: usize) -> String {
    let placeholders = vec!["?"; arity].join(", ");
    format!("CALL {}({})", name, placeholders)
}
