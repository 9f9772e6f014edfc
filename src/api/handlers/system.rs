//! System endpoints: health check.

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::any;

/// `/health` — Liveness probe, answered for every method.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Always answers `ok` while the process is serving requests.",
    responses(
        (status = 200, description = "Service is alive", body = String, content_type = "text/plain"),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// System routes mounted at the root level.
pub fn routes() -> Router {
    Router::new().route("/health", any(health_handler))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn health_returns_ok() {
        let Ok(req) = Request::builder().uri("/health").body(Body::empty()) else {
            panic!("failed to build request");
        };
        let Ok(response) = routes().oneshot(req).await;
        assert_eq!(response.status(), StatusCode::OK);

        let Ok(body) = to_bytes(response.into_body(), usize::MAX).await else {
            panic!("failed to read body");
        };
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn health_ignores_headers_and_query() {
        let Ok(req) = Request::builder()
            .method(Method::GET)
            .uri("/health?verbose=1")
            .header("X-Forwarded-For", "9.9.9.9")
            .body(Body::empty())
        else {
            panic!("failed to build request");
        };
        let Ok(response) = routes().oneshot(req).await;
        assert_eq!(response.status(), StatusCode::OK);

        let Ok(body) = to_bytes(response.into_body(), usize::MAX).await else {
            panic!("failed to read body");
        };
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn health_answers_any_method() {
        for method in [Method::POST, Method::PUT, Method::HEAD, Method::DELETE] {
            let Ok(req) = Request::builder()
                .method(method.clone())
                .uri("/health")
                .body(Body::from("payload"))
            else {
                panic!("failed to build request");
            };
            let Ok(response) = routes().oneshot(req).await;
            assert_eq!(response.status(), StatusCode::OK, "method {method}");
        }
    }
}
