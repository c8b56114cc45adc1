mod common;

use axum::http::StatusCode;
use common::{get, post_form, router, EventCounter, FakeBackend};
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;

#[tokio::test]
async fn backend_failure_answers_generic_500_and_logs_once() {
    let counter = EventCounter::errors();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let backend = Arc::new(FakeBackend::new().failing());
    let resp = get(router(backend), "/allPets").await;

    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.body, "Internal Server Error");
    assert!(!resp.body.contains("connection reset"));
    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn every_backed_route_survives_backend_failure() {
    let counter = EventCounter::errors();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let backend = Arc::new(FakeBackend::new().failing());
    let gets = [
        "/getTables",
        "/getTableData/dobavljaci",
        "/allPets",
        "/petDetails/1",
        "/generateReport/ZbirniPregledProdajeLjubimaca?startDate=a&endDate=b",
        "/supplierForm",
    ];
    for uri in gets {
        let resp = get(router(backend.clone()), uri).await;
        assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
    }
    let posts = [
        ("/insertPricing", "datumPromjene=2024-01-01&napomena=x&idLjubimci=1&cijena=1"),
        ("/addSupplier", "naziv=a&adresa=b"),
        ("/deleteSupplier/1", ""),
    ];
    for (uri, body) in posts {
        let resp = post_form(router(backend.clone()), uri, body).await;
        assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
    }

    assert_eq!(counter.count(), gets.len() + posts.len());
}

#[tokio::test]
async fn invalid_input_is_logged_like_a_backend_failure() {
    let counter = EventCounter::errors();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let backend = Arc::new(FakeBackend::new());
    let resp = get(router(backend), "/generateReport/Nepostojeci").await;

    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn malformed_request_gets_generic_body_and_one_warning() {
    let warnings = EventCounter::warnings();
    let errors = EventCounter::errors();
    let subscriber = tracing_subscriber::registry()
        .with(warnings.clone())
        .with(errors.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let backend = Arc::new(FakeBackend::new());
    let resp = post_form(router(backend.clone()), "/deleteSupplier/x", "").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body, "Bad Request");
    assert_eq!(warnings.count(), 1);
    assert_eq!(errors.count(), 0);
    assert!(backend.calls().is_empty());
}
