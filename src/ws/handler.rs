//! Axum WebSocket upgrade handler.

use axum::extract::ws::WebSocketUpgrade;
use axum::extract::ws::rejection::WebSocketUpgradeRejection;
use axum::response::{IntoResponse, Response};

use super::connection::run_echo;

/// Size of the per-connection read buffer, in bytes.
pub const READ_BUFFER_SIZE: usize = 1024;

/// Size of the per-connection write buffer, in bytes.
pub const WRITE_BUFFER_SIZE: usize = 1024;

/// `GET /ws` — Upgrade HTTP connection to an echoing WebSocket.
///
/// Connections from any origin are accepted.
pub async fn ws_handler(ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>) -> Response {
    let ws = match ws {
        Ok(ws) => ws,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "ws upgrade rejected");
            return rejection.into_response();
        }
    };

    ws.read_buffer_size(READ_BUFFER_SIZE)
        .write_buffer_size(WRITE_BUFFER_SIZE)
        .on_failed_upgrade(|e| tracing::warn!(error = %e, "ws upgrade failed"))
        .on_upgrade(|socket| async move {
            tracing::debug!("ws connection opened");
            run_echo(socket).await;
        })
}
