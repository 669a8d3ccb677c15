//! Router assembly for the static host.
//!
//! SYSTEM CONTEXT
//! ==============
//! The front-end routes on the client, so the host only has to hand out the
//! built bundle. Files under the site root are served as-is; any other path
//! gets `index.html` so the client router can take over. Paths that are not
//! client routes still get the document, but with a 404 status.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use photoblog::routes::AppRoute;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the full router for `config`.
pub fn app(config: &ServerConfig) -> Router {
    let spa = get(spa_index).with_state::<()>(Arc::new(config.index_path()));
    let static_files = ServeDir::new(&config.site_root)
        .append_index_html_on_directories(true)
        .fallback(spa);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_files)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Status for serving the SPA document at `path`.
pub fn fallback_status(path: &str) -> StatusCode {
    match AppRoute::parse(path) {
        Ok(_) => StatusCode::OK,
        Err(err) => {
            tracing::debug!(%path, error = %err, "not a client route");
            StatusCode::NOT_FOUND
        }
    }
}

async fn spa_index(State(index): State<Arc<PathBuf>>, uri: Uri) -> Response {
    let status = fallback_status(uri.path());
    match tokio::fs::read_to_string(index.as_path()).await {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, path = %index.display(), "failed to read index.html");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
