//! Static asset server for the BimLinker viewer.
//!
//! Serves the compiled client bundle, the PDF, the PDF.js worker and the GLB
//! model from one directory so the browser sees them at fixed paths.

mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    let config = ServerConfig::from_env()?;
    if !config.asset_dir.is_dir() {
        tracing::warn!(asset_dir = %config.asset_dir.display(), "asset directory missing; every path will 404");
    }

    let app = routes::app(&config.asset_dir);
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;

    tracing::info!(port = config.port, asset_dir = %config.asset_dir.display(), "bimlinker listening");
    axum::serve(listener, app).await?;
    Ok(())
}
