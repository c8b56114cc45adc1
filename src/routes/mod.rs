//! Router assembly: pages, ambient probes, static assets, and the shared layers.

pub mod common;
pub mod pages;

pub use common::{common_routes, common_routes_with_ready};
pub use pages::page_routes;

use crate::state::AppState;
use axum::Router;
use std::path::Path;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Form bodies are a handful of short fields.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application: pages, probes, and static files from `static_dir` for anything else.
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(page_routes(state))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                // Failures are already logged once by AppError.
                .on_failure(()),
        )
}
