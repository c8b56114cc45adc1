//! Server entry point: loads settings, opens the database pool, serves the pages.

use petshop_admin::{app, AppState, MySqlGateway, Settings, Templates};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("petshop_admin=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let gateway = MySqlGateway::connect(&settings.database).await?;
    tracing::info!(
        host = %settings.database.host,
        database = %settings.database.name,
        "database pool ready"
    );

    let state = AppState::new(Arc::new(gateway), Templates::new()?);
    let router = app(state, &settings.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server is running on port {}", listener.local_addr()?.port());
    axum::serve(listener, router).await?;
    Ok(())
}
