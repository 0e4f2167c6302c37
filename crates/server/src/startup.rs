use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::runtime;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn config_file_present() -> bool {
    let path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    std::path::Path::new(&path).exists()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr(cfg: Option<&configs::ServerConfig>) -> anyhow::Result<SocketAddr> {
    let (host, port) = match cfg {
        Some(s) => (s.host.clone(), s.port),
        None => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    runtime::ensure_env("frontend").await?;

    // Full config is optional; DATABASE_URL + defaults are enough for dev.
    // A config file that exists but fails validation is a hard error.
    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(c) => Some(c),
        Err(e) if config_file_present() => {
            return Err(StartupError::InvalidConfig(e.to_string()).into());
        }
        Err(_) => None,
    };

    let db = match &cfg {
        Some(c) => models::db::connect_with_config(&c.database).await?,
        None => models::db::connect().await?,
    };

    let site = cfg.as_ref().map(|c| c.site.clone()).unwrap_or_default();
    let state = ServerState { db, site };

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    // Bind and serve
    let addr = load_bind_addr(cfg.as_ref().map(|c| &c.server))?;
    info!(%addr, "starting site server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
