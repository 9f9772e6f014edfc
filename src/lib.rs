//! # ip-echo-server
//!
//! Minimal HTTP server with three endpoints:
//!
//! - `GET /` renders a page reporting the caller's IP and opening a
//!   WebSocket that sends a heartbeat every two seconds.
//! - `GET /health` answers `ok`.
//! - `GET /ws` upgrades to a WebSocket that echoes every frame.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── HTTP Handlers (api/)
//!     │     ├── client IP resolution
//!     │     └── landing page template
//!     │
//!     └── WS Echo (ws/)
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod ws;

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router with every endpoint and middleware layer.
///
/// Constructed once at startup and read-only afterwards.
pub fn build_app() -> Router {
    Router::new()
        .merge(api::build_router())
        .merge(ws::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serves the application on an already bound listener.
///
/// The peer address of every connection is recorded so the landing page
/// can fall back to it when no forwarded header is present.
///
/// # Errors
///
/// Returns an error if accepting or serving connections fails.
pub async fn serve(listener: TcpListener) -> std::io::Result<()> {
    axum::serve(
        listener,
        build_app().into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
}
