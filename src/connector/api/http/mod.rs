//! HTTP surface: `/api` routes, the static front-end, and response headers
//! shared by every response.

mod error;
mod handlers;
mod request_context;
mod server;

use std::path::Path;
use std::sync::Arc;

use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::http::HeaderValue;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use handlers::AskParams;
pub use request_context::RequestContext;
pub use server::serve;

use crate::connector::api::Container;

/// Build the application router.
///
/// Paths outside `/api` are served from `public_dir`; anything without a
/// matching file gets `index.html`.
pub fn build_router(container: Arc<Container>, public_dir: &Path) -> axum::Router {
    let static_files =
        ServeDir::new(public_dir).fallback(ServeFile::new(public_dir.join("index.html")));

    axum::Router::new()
        .route("/api", get(handlers::hello))
        .route("/api/", get(handlers::hello))
        .route("/api/ask", get(handlers::ask))
        .fallback_service(static_files)
        .with_state(container)
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http())
}
