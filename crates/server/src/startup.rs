use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::runtime;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or `CONFIG_PATH`); without a file, fall back to env vars.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        return AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(format!("{path}: {e}")));
    }
    warn!(%path, "config file not found; using environment");
    AppConfig::from_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::BindAddr(format!("{}:{}: {e}", cfg.server.host, cfg.server.port)))
}

/// Connect, migrate and optionally seed the store, then build the router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    runtime::ensure_sqlite_dir(&cfg.database.url).await?;
    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await?;
    models::db::test_connection(&db).await?;
    if cfg.database.run_migrations {
        models::db::migrate(&db).await?;
    }
    if cfg.database.seed && models::seed::seed_catalog(&db).await? {
        info!(event = "seeded", "inserted bootstrap catalog rows");
    }
    let state = ServerState::new(db, &cfg.catalog);
    Ok(routes::build_router(state, build_cors(), cfg.server.max_upload_bytes))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = load_config()?;
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, name_match = ?cfg.catalog.name_match, "starting catalog server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
