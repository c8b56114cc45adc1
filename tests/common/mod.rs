//! Shared test harness: a recording in-memory backend and request helpers.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use petshop_admin::{app, AppError, AppState, Backend, BindValue, ExecOutcome, Row, Templates};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// One backend call as the handler issued it.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    ListTables,
    FetchAll { sql: String, params: Vec<BindValue> },
    FetchOptional { sql: String, params: Vec<BindValue> },
    Execute { sql: String, params: Vec<BindValue> },
    Procedure { name: String, params: Vec<BindValue> },
    Ping,
}

#[derive(Default)]
pub struct FakeBackend {
    pub tables: Vec<String>,
    pub rows: Vec<Row>,
    pub detail: Option<Row>,
    /// Every call fails with a database error once this many calls have succeeded.
    pub fail_after: Option<usize>,
    calls: Mutex<Vec<Call>>,
    next_insert_id: AtomicU64,
}

impl FakeBackend {
    pub fn new() -> Self {
        FakeBackend {
            next_insert_id: AtomicU64::new(100),
            ..Default::default()
        }
    }

    pub fn with_tables(mut self, tables: &[&str]) -> Self {
        self.tables = tables.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_detail(mut self, detail: Row) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_after = Some(0);
        self
    }

    pub fn failing_after(mut self, successes: usize) -> Self {
        self.fail_after = Some(successes);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), AppError> {
        let mut calls = self.calls.lock().unwrap();
        let seen = calls.len();
        calls.push(call);
        match self.fail_after {
            Some(n) if seen >= n => Err(AppError::Backend(sqlx::Error::Protocol(
                "connection reset".into(),
            ))),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn list_tables(&self) -> Result<Vec<String>, AppError> {
        self.record(Call::ListTables)?;
        Ok(self.tables.clone())
    }

    async fn fetch_all(&self, sql: &str, params: &[BindValue]) -> Result<Vec<Row>, AppError> {
        self.record(Call::FetchAll {
            sql: sql.to_string(),
            params: params.to_vec(),
        })?;
        Ok(self.rows.clone())
    }

    async fn fetch_optional(&self, sql: &str, params: &[BindValue]) -> Result<Option<Row>, AppError> {
        self.record(Call::FetchOptional {
            sql: sql.to_string(),
            params: params.to_vec(),
        })?;
        Ok(self.detail.clone())
    }

    async fn execute(&self, sql: &str, params: &[BindValue]) -> Result<ExecOutcome, AppError> {
        self.record(Call::Execute {
            sql: sql.to_string(),
            params: params.to_vec(),
        })?;
        Ok(ExecOutcome {
            rows_affected: 1,
            last_insert_id: self.next_insert_id.fetch_add(1, Ordering::SeqCst),
        })
    }

    async fn call_procedure(&self, name: &str, params: &[BindValue]) -> Result<Vec<Row>, AppError> {
        self.record(Call::Procedure {
            name: name.to_string(),
            params: params.to_vec(),
        })?;
        Ok(self.rows.clone())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.record(Call::Ping)
    }
}

pub fn row(value: serde_json::Value) -> Row {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("row must be a JSON object, got {}", other),
    }
}

pub fn router(backend: Arc<FakeBackend>) -> Router {
    let state = AppState::new(backend, Templates::new().unwrap());
    app(state, "styles")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers.get(header::LOCATION).and_then(|v| v.to_str().ok())
    }
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Counts events of one level emitted from this crate.
#[derive(Clone)]
pub struct EventCounter {
    level: Level,
    seen: Arc<AtomicUsize>,
}

impl EventCounter {
    pub fn errors() -> Self {
        Self::at(Level::ERROR)
    }

    pub fn warnings() -> Self {
        Self::at(Level::WARN)
    }

    fn at(level: Level) -> Self {
        EventCounter {
            level,
            seen: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn count(&self) -> usize {
        self.seen.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for EventCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if *meta.level() == self.level && meta.target().starts_with("petshop_admin") {
            self.seen.fetch_add(1, Ordering::SeqCst);
        }
    }
}
