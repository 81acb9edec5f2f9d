//! Forza REST API
//!
//! HTTP API layer for Forza, built with Axum. The UI calls these
//! endpoints; the server talks to the completion API on its behalf.
//!
//! # Endpoints
//!
//! ## Chat
//! - `POST /api/v1/chat` - Reply to a chat message
//! - `GET /api/v1/suggestions` - Topic suggestions for the sidebar
//!
//! ## Code Explainer
//! - `POST /api/v1/explain` - Explain a code snippet
//! - `GET /api/v1/languages` - Supported languages
//!
//! ## Market
//! - `GET /api/v1/market?q=` - Sample market rows
//! - `GET /api/v1/market/:symbol` - One row with its monthly series
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! Any other path is served from the static UI directory when one is
//! configured, with `index.html` as the fallback for client-side routes.

pub mod dto;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/chat", post(routes::chat::send_message))
        .route("/suggestions", get(routes::chat::suggestions))
        .route("/explain", post(routes::explain::explain_code))
        .route("/languages", get(routes::explain::list_languages))
        .route("/market", get(routes::market::list_assets))
        .route("/market/:symbol", get(routes::market::get_asset));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.server.cors_origins);
    let static_dir = state.server.static_dir.clone();
    let shared_state = Arc::new(state);

    let router = Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes);

    let router = match static_dir {
        Some(dir) => router.fallback_service(spa_service(Path::new(&dir))),
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Static UI files, unknown paths answered with `index.html`
fn spa_service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState, addr: &str) -> Result<(), ApiError> {
    if let Some(dir) = &state.server.static_dir {
        tracing::info!("Serving UI from {}", dir);
    }

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Forza listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Forza shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::nexra::{CompletionBackend, CompletionOutcome, NexraError, NexraMessage, PollPolicy};
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    struct EchoBackend;

    #[async_trait]
    impl CompletionBackend for EchoBackend {
        async fn complete(
            &self,
            _messages: Vec<NexraMessage>,
            prompt: String,
            _policy: &PollPolicy,
        ) -> Result<CompletionOutcome, NexraError> {
            Ok(CompletionOutcome::Completed(Some(format!("echo: {}", prompt))))
        }
    }

    fn create_test_app(static_dir: Option<String>) -> Router {
        let mut config = Config::default();
        config.chat.chart_delay_ms = 1;
        config.server.static_dir = static_dir;
        build_router(AppState::new(Arc::new(EchoBackend), &config))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_test_app(None);
        let (status, _) = send(app.clone(), get_request("/health/live")).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(app, get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["nexra"], "https://nexra.aryahcr.cc");
    }

    #[tokio::test]
    async fn test_chat_conversation() {
        let app = create_test_app(None);
        let (status, body) = send(
            app,
            post_json("/api/v1/chat", r#"{"message": "What is DeFi?", "history": []}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"]["sender"], "ai");
        assert_eq!(body["message"]["content"], "echo: What is DeFi?");
        assert!(body["message"].get("coin").is_none());
    }

    #[tokio::test]
    async fn test_chat_chart_request() {
        let app = create_test_app(None);
        let (status, body) = send(app, post_json("/api/v1/chat", r#"{"message": "get $eth price"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"]["coin"]["symbol"], "ETH");
        assert_eq!(body["message"]["coin"]["kind"], "price");
        assert_eq!(body["message"]["coin"]["bars"].as_array().unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_chat_empty_message() {
        let app = create_test_app(None);
        let (status, body) = send(app, post_json("/api/v1/chat", r#"{"message": "   "}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_chat_invalid_json() {
        let app = create_test_app(None);
        let (status, body) = send(app, post_json("/api/v1/chat", "not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_chat_missing_field() {
        let app = create_test_app(None);
        let (status, body) = send(app, post_json("/api/v1/chat", r#"{"history": []}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("message"));
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let app = create_test_app(None);
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/explain")
            .body(Body::from(r#"{"code": "fn main() {}"}"#))
            .unwrap();
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("Content-Type"));
    }

    #[tokio::test]
    async fn test_explain() {
        let app = create_test_app(None);
        let (status, body) = send(
            app.clone(),
            post_json("/api/v1/explain", r#"{"code": "fn main() {}", "language": "Rust"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["language"], "rust");
        assert!(body["explanation"].as_str().unwrap().starts_with("echo: Please explain this rust code:"));

        let (status, _) = send(
            app.clone(),
            post_json("/api/v1/explain", r#"{"code": "x", "language": "cobol"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(app, post_json("/api/v1/explain", r#"{"code": ""}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_languages_and_suggestions() {
        let app = create_test_app(None);
        let (_, body) = send(app.clone(), get_request("/api/v1/languages")).await;
        assert_eq!(body["languages"].as_array().unwrap().len(), 13);
        assert_eq!(body["default"], "javascript");

        let (_, body) = send(app, get_request("/api/v1/suggestions")).await;
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_market() {
        let app = create_test_app(None);
        let (_, body) = send(app.clone(), get_request("/api/v1/market")).await;
        assert_eq!(body["total"], 8);

        let (_, body) = send(app.clone(), get_request("/api/v1/market?q=eth")).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["assets"][0]["symbol"], "ETH");

        let (status, body) = send(app.clone(), get_request("/api/v1/market/btc")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["asset"]["name"], "Bitcoin");
        assert_eq!(body["series"].as_array().unwrap().len(), 8);

        let (status, body) = send(app, get_request("/api/v1/market/ltc")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_static_fallback_serves_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>forza</html>").unwrap();
        let app = create_test_app(Some(dir.path().to_string_lossy().to_string()));

        let response = app.oneshot(get_request("/chat")).await.unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<html>forza</html>");
    }

    #[tokio::test]
    async fn test_unknown_path_without_ui() {
        let app = create_test_app(None);
        let response = app.oneshot(get_request("/chat")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
