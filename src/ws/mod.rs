//! WebSocket layer: upgrade handling and the echo loop.
//!
//! The WebSocket endpoint at `/ws` echoes every text or binary frame back
//! to its sender.

pub mod connection;
pub mod handler;

use axum::Router;
use axum::routing::get;

/// WebSocket route.
pub fn routes() -> Router {
    Router::new().route("/ws", get(handler::ws_handler))
}
