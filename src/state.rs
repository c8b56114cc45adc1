//! Shared application state for all routes.

use crate::backend::Backend;
use crate::render::Templates;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn Backend>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(backend: Arc<dyn Backend>, templates: Templates) -> Self {
        AppState {
            backend,
            templates: Arc::new(templates),
        }
    }
}
