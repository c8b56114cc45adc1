//! MySQL implementation of [`Backend`] over a shared sqlx pool.

use super::{procedure_call_sql, Backend, BindValue, ExecOutcome, Row};
use crate::config::DatabaseSettings;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::mysql::{MySql, MySqlArguments, MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::query::Query;

const LIST_TABLES_SQL: &str = "SELECT CAST(TABLE_NAME AS CHAR) AS table_name \
     FROM information_schema.TABLES WHERE TABLE_SCHEMA = ? ORDER BY TABLE_NAME";

#[derive(Clone)]
pub struct MySqlGateway {
    pool: MySqlPool,
    database: String,
}

impl MySqlGateway {
    /// Open the pool. Pool behaviour beyond the connection cap is sqlx's default.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, AppError> {
        let options = MySqlConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .username(&settings.user)
            .password(&settings.password)
            .database(&settings.name);
        let pool = MySqlPoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_with(options)
            .await?;
        Ok(Self::from_pool(pool, settings.name.clone()))
    }

    pub fn from_pool(pool: MySqlPool, database: impl Into<String>) -> Self {
        MySqlGateway {
            pool,
            database: database.into(),
        }
    }
}

#[async_trait]
impl Backend for MySqlGateway {
    async fn list_tables(&self) -> Result<Vec<String>, AppError> {
        tracing::debug!(sql = %LIST_TABLES_SQL, database = %self.database, "query");
        let names: Vec<String> = sqlx::query_scalar(LIST_TABLES_SQL)
            .bind(&self.database)
            .fetch_all(&self.pool)
            .await?;
        Ok(names)
    }

    async fn fetch_all(&self, sql: &str, params: &[BindValue]) -> Result<Vec<Row>, AppError> {
        tracing::debug!(sql = %sql, params = ?params, "query");
        let rows = bind_all(sqlx::query(sql), params).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(row_to_map).collect())
    }

    async fn fetch_optional(&self, sql: &str, params: &[BindValue]) -> Result<Option<Row>, AppError> {
        tracing::debug!(sql = %sql, params = ?params, "query");
        let row = bind_all(sqlx::query(sql), params)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(row_to_map))
    }

    async fn execute(&self, sql: &str, params: &[BindValue]) -> Result<ExecOutcome, AppError> {
        tracing::debug!(sql = %sql, params = ?params, "execute");
        let done = bind_all(sqlx::query(sql), params).execute(&self.pool).await?;
        Ok(ExecOutcome {
            rows_affected: done.rows_affected(),
            last_insert_id: done.last_insert_id(),
        })
    }

    async fn call_procedure(&self, name: &str, params: &[BindValue]) -> Result<Vec<Row>, AppError> {
        let sql = procedure_call_sql(name, params.len());
        self.fetch_all(&sql, params).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn bind_all<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    params: &[BindValue],
) -> Query<'q, MySql, MySqlArguments> {
    for p in params {
        query = match p {
            BindValue::Null => query.bind(None::<String>),
            BindValue::I64(n) => query.bind(*n),
            BindValue::Decimal(d) => query.bind(*d),
            BindValue::String(s) => query.bind(s.clone()),
        };
    }
    query
}

fn row_to_map(row: &MySqlRow) -> Row {
    use sqlx::{Column, Row as _, TypeInfo};
    let mut map = Row::new();
    for col in row.columns() {
        let json_column = is_json_column(col.type_info().name());
        map.insert(col.name().to_string(), cell_to_value(row, col.ordinal(), json_column));
    }
    map
}

/// sqlx accepts text columns as JSON too; only a declared JSON column is parsed,
/// so a VARCHAR holding `null` or `1.50` stays text.
fn is_json_column(type_name: &str) -> bool {
    type_name.eq_ignore_ascii_case("JSON")
}

fn cell_to_value(row: &MySqlRow, idx: usize, json_column: bool) -> Value {
    use sqlx::Row as _;
    if json_column {
        if let Ok(v) = row.try_get::<Option<serde_json::Value>, _>(idx) {
            return v.unwrap_or(Value::Null);
        }
    }
    if let Ok(v) = row.try_get::<Option<i64>, _>(idx) {
        return v.map(|n| Value::Number(n.into())).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<u64>, _>(idx) {
        return v.map(|n| Value::Number(n.into())).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(idx) {
        return v
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<f32>, _>(idx) {
        return v
            .and_then(|n| serde_json::Number::from_f64(n as f64))
            .map(Value::Number)
            .unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<rust_decimal::Decimal>, _>(idx) {
        // Decimal keeps its scale as text: prices render as 19.90, not 19.9.
        return v.map(|d| Value::String(d.to_string())).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<chrono::NaiveDate>, _>(idx) {
        return v
            .map(|d| Value::String(d.format("%Y-%m-%d").to_string()))
            .unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<chrono::NaiveDateTime>, _>(idx) {
        return v
            .map(|d| Value::String(d.format("%Y-%m-%d %H:%M:%S").to_string()))
            .unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(idx) {
        return v.map(|d| Value::String(d.to_rfc3339())).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<chrono::NaiveTime>, _>(idx) {
        return v
            .map(|t| Value::String(t.format("%H:%M:%S").to_string()))
            .unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<String>, _>(idx) {
        return v.map(Value::String).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<Vec<u8>>, _>(idx) {
        return v
            .map(|b| Value::String(String::from_utf8_lossy(&b).into_owned()))
            .unwrap_or(Value::Null);
    }
    Value::Null
}
