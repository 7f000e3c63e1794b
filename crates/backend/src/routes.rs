use axum::{middleware, routing::get, Router};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::shared::logger::request_logger;

/// Health check plus the built frontend.
///
/// Paths without a matching file get `index.html` so client-side routes
/// such as `/models?active=...` load the app directly.
pub fn configure_routes(static_dir: &Path) -> Router {
    let index = static_dir.join("index.html");

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
        .layer(middleware::from_fn(request_logger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn setup_static_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>viewer</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('app');").unwrap();
        dir
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dir = setup_static_dir();
        let (status, body) = get_body(configure_routes(dir.path()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_serves_static_file() {
        let dir = setup_static_dir();
        let (status, body) = get_body(configure_routes(dir.path()), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('app');");
    }

    #[tokio::test]
    async fn test_client_route_gets_index() {
        let dir = setup_static_dir();
        let (status, body) =
            get_body(configure_routes(dir.path()), "/models?active=synthesis").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>viewer</html>");
    }
}
