//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One health endpoint; everything else is a file under the asset directory.
//! Unknown paths fall back to `index.html` so the client can own its URLs.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub fn app(asset_dir: &Path) -> Router {
    let assets = ServeDir::new(asset_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(asset_dir.join("index.html")));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}
