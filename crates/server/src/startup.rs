use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Wire a fresh store and the router for `cfg`.
pub fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let state = ServerState::from_config(cfg)?;
    info!(
        id_strategy = ?cfg.store.id_strategy,
        not_found_status = cfg.server.not_found_status,
        "item store initialized"
    );
    Ok(routes::build_router(state, build_cors()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C; serving until the process is killed");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg)?;

    // host may be a name such as `localhost`; tokio resolves it
    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "item store listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_app_with_defaults() {
        assert!(build_app(&AppConfig::default()).is_ok());
    }

    #[test]
    fn build_app_rejects_bogus_status() {
        let mut cfg = AppConfig::default();
        cfg.server.not_found_status = 1000;
        assert!(build_app(&cfg).is_err());
    }

    #[test]
    fn build_app_rejects_valid_http_status_outside_200_and_404() {
        for status in [204, 500] {
            let mut cfg = AppConfig::default();
            cfg.server.not_found_status = status;
            assert!(build_app(&cfg).is_err(), "{status}");
        }
    }
}
