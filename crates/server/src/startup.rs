use axum::Router;
use configs::{AppConfig, ServerConfig, StorageBackend};
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::coffee::{build_repository, CoffeeService};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Build the backend, seed it when configured, and assemble the router.
/// Seeding finishes before this returns, so no request sees a partial seed.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    if cfg.storage.backend == StorageBackend::File {
        common::env::ensure_parent_dir(&cfg.storage.file).await?;
    }
    let repo = build_repository(cfg).await?;
    let coffees = CoffeeService::new(repo);
    if cfg.storage.seed {
        coffees.seed().await.map_err(StartupError::Seed)?;
    }
    let state = ServerState::new(coffees, cfg);
    Ok(routes::build_router(state, build_cors()))
}

/// Bind the configured host/port; host names are resolved.
async fn bind(server: &ServerConfig) -> anyhow::Result<TcpListener> {
    let listener = TcpListener::bind((server.host.as_str(), server.port)).await?;
    Ok(listener)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Load `.env`, then the validated application config.
pub fn load_config() -> Result<AppConfig, StartupError> {
    dotenv().ok();
    AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let listener = bind(&cfg.server).await?;
    let addr = listener.local_addr()?;
    info!(%addr, backend = ?cfg.storage.backend, "starting coffee api");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
