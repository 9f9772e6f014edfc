//! Landing page endpoint.

use std::net::SocketAddr;

use axum::Router;
use axum::extract::{ConnectInfo, Request};
use axum::response::Html;
use axum::routing::any;

use crate::api::client_ip::resolve_client_ip;
use crate::api::page::HomePage;
use crate::error::ServerError;

/// `GET /` — Landing page showing the caller's IP.
///
/// Also serves every method on `/` and any path no other route claims.
///
/// The peer address comes from [`ConnectInfo`], which is only present when
/// the router is served with `into_make_service_with_connect_info`.
///
/// # Errors
///
/// Returns [`ServerError::NoClientIp`] when no IP can be determined.
#[utoipa::path(
    get,
    path = "/",
    tag = "Pages",
    summary = "Landing page",
    description = "Reports the caller's IP and opens a WebSocket to /ws.",
    params(
        ("X-Forwarded-For" = Option<String>, Header, description = "Client IP set by a proxy"),
    ),
    responses(
        (status = 200, description = "HTML page", body = String, content_type = "text/html"),
        (status = 500, description = "No request IP found", body = String, content_type = "text/plain"),
    )
)]
pub async fn home_handler(request: Request) -> Result<Html<String>, ServerError> {
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string());

    let client_ip = resolve_client_ip(request.headers(), remote_addr.as_deref())
        .ok_or(ServerError::NoClientIp)?;
    tracing::debug!(client_ip = %client_ip, "serving landing page");

    Ok(Html(HomePage::new(client_ip).render()))
}

/// Landing page route, doubling as the router fallback.
pub fn routes() -> Router {
    Router::new()
        .route("/", any(home_handler))
        .fallback(home_handler)
}
