use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// One `access_log` event per request.
///
/// The route template (`/users/{id}`) is recorded next to the concrete path so
/// events for the same endpoint group together. Server errors are raised to
/// `warn`; the cause itself is logged where the error is rendered.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let route = route_label(request.extensions().get::<MatchedPath>(), &path);

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        warn!(target: "access_log", %method, %route, %path, status, latency_ms, "request failed");
    } else {
        info!(target: "access_log", %method, %route, %path, status, latency_ms, "request handled");
    }

    response
}

/// Route template when the router matched one, the raw path otherwise
fn route_label(matched: Option<&MatchedPath>, path: &str) -> String {
    matched
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::StatusCode, routing::get, Router};
    use axum_test::TestServer;

    fn app() -> Router {
        Router::new()
            .route("/users/list", get(|| async { "[]" }))
            .route(
                "/users/{id}",
                get(|route: MatchedPath, Path(id): Path<i64>| async move {
                    format!("{} {}", route.as_str(), id)
                }),
            )
            .route(
                "/broken",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "down") }),
            )
            .layer(axum::middleware::from_fn(logging_middleware))
    }

    #[tokio::test]
    async fn test_logging_middleware_passes_response_through() {
        let server = TestServer::new(app()).unwrap();
        let response = server.get("/users/list").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), "[]");
    }

    #[tokio::test]
    async fn test_matched_path_survives_middleware() {
        let server = TestServer::new(app()).unwrap();
        let response = server.get("/users/7").await;

        assert_eq!(response.text(), "/users/{id} 7");
    }

    #[tokio::test]
    async fn test_server_error_is_passed_through() {
        let server = TestServer::new(app()).unwrap();
        let response = server.get("/broken").await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "down");
    }

    #[test]
    fn test_route_label_falls_back_to_path() {
        assert_eq!(route_label(None, "/nowhere"), "/nowhere");
    }
}
