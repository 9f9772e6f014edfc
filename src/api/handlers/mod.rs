//! HTTP endpoint handlers.

pub mod home;
pub mod system;

use axum::Router;

/// Composes the landing page and system routes.
pub fn routes() -> Router {
    Router::new().merge(home::routes()).merge(system::routes())
}
