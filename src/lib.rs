//! Pet shop admin: server-rendered pages over a MySQL pet-store database.

pub mod backend;
pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

pub use backend::{Backend, BindValue, ExecOutcome, MySqlGateway, Row};
pub use config::{DatabaseSettings, Settings};
pub use error::{AppError, ConfigError};
pub use render::Templates;
pub use routes::{app, common_routes, common_routes_with_ready, page_routes};
pub use state::AppState;
