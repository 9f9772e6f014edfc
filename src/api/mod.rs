//! HTTP API layer: landing page, health check and OpenAPI document.

pub mod client_ip;
pub mod handlers;
pub mod openapi;
pub mod page;

use axum::Router;

/// Builds the router with every plain HTTP endpoint.
pub fn build_router() -> Router {
    Router::new()
        .merge(handlers::routes())
        .merge(openapi::routes())
}
