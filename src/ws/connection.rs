//! WebSocket echo loop.
//!
//! Reads one frame at a time and writes the same frame back with the same
//! type until the peer closes or an I/O error occurs.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};

/// Summary of a finished echo session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EchoStats {
    /// Text and binary frames written back to the peer.
    pub frames_echoed: u64,
}

/// Runs the echo loop for a single WebSocket connection.
///
/// Ping and pong frames are answered by the protocol layer and are not
/// echoed. A close frame completes the closing handshake before the loop
/// ends. Any read or write error also ends the loop; the socket is dropped,
/// and so closed, on return.
pub async fn run_echo(socket: WebSocket) -> EchoStats {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let mut stats = EchoStats::default();

    while let Some(msg) = ws_rx.next().await {
        let reply = match msg {
            Ok(msg @ (Message::Text(_) | Message::Binary(_))) => msg,
            Ok(Message::Ping(_) | Message::Pong(_)) => continue,
            // The close reply is queued by the protocol layer and written on
            // the next read, which then ends the stream.
            Ok(Message::Close(frame)) => {
                tracing::debug!(?frame, "ws client closed");
                continue;
            }
            Err(e) => {
                tracing::debug!(error = %e, "ws read failed");
                break;
            }
        };

        if let Err(e) = ws_tx.send(reply).await {
            tracing::debug!(error = %e, "ws write failed");
            break;
        }
        stats.frames_echoed += 1;
    }

    tracing::debug!(frames_echoed = stats.frames_echoed, "ws connection closed");
    stats
}
