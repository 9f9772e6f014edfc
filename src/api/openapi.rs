//! OpenAPI document for the HTTP endpoints.

use axum::Router;
#[cfg(not(feature = "swagger-ui"))]
use axum::{Json, routing::get};
use utoipa::OpenApi;

/// Path the OpenAPI document is served at.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI description of the landing page and health check.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "ip-echo-server"),
    paths(
        super::handlers::home::home_handler,
        super::handlers::system::health_handler,
    ),
    tags(
        (name = "Pages", description = "HTML pages"),
        (name = "System", description = "Liveness probing"),
    )
)]
pub struct ApiDoc;

#[cfg(not(feature = "swagger-ui"))]
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Documentation routes: the raw document, plus Swagger UI when the
/// `swagger-ui` feature is enabled.
#[cfg(not(feature = "swagger-ui"))]
pub fn routes() -> Router {
    Router::new().route(OPENAPI_PATH, get(openapi_json))
}

/// Documentation routes: the raw document, plus Swagger UI when the
/// `swagger-ui` feature is enabled.
#[cfg(feature = "swagger-ui")]
pub fn routes() -> Router {
    Router::new().merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url(OPENAPI_PATH, ApiDoc::openapi()),
    )
}
