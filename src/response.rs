//! Response helpers: rendered pages and post-redirect-get.

use crate::error::AppError;
use crate::state::AppState;
use axum::response::{Html, Redirect};
use serde::Serialize;

/// Render a named template into an HTML response.
pub fn page<S: Serialize>(state: &AppState, template: &str, context: S) -> Result<Html<String>, AppError> {
    state.templates.render(template, context).map(Html)
}

/// Page with no dynamic content.
pub fn static_page(state: &AppState, template: &str) -> Result<Html<String>, AppError> {
    page(state, template, serde_json::json!({}))
}

/// 303 See Other, so a refresh after a form post does not repeat it.
pub fn see_other(path: &str) -> Redirect {
    Redirect::to(path)
}
