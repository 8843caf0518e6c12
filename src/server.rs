//! HTTP boundary for the analyzer.
//!
//! ## Endpoints
//!
//! - `POST /api/analyzeEmotion` with `{"text": "..."}`: full
//!   [`AnalysisResponse`](crate::response::AnalysisResponse)
//! - `GET /health`: liveness probe

use crate::analyzer::Analyzer;
use crate::config::ServerConfig;
use crate::error::SoulscapeError;
use axum::Router;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
struct AppState {
    analyzer: Arc<Analyzer>,
}

/// Running HTTP server. The background task is aborted on drop.
pub struct AnalysisServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl AnalysisServer {
    /// Bind to `{config.host}:{config.port}` (port `0` auto-assigns) and
    /// serve in a background tokio task.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot bind.
    pub async fn start(
        analyzer: Arc<Analyzer>,
        config: &ServerConfig,
    ) -> crate::error::Result<Self> {
        let app = router(analyzer);

        let bind_addr = config.bind_addr();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| SoulscapeError::Server(format!("bind {bind_addr} failed: {e}")))?;

        let addr = listener
            .local_addr()
            .map_err(|e| SoulscapeError::Server(format!("failed to get local addr: {e}")))?;

        info!("soulscape listening on http://{addr}");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("soulscape server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for AnalysisServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Router with CORS and request tracing, for embedding or in-process tests.
pub fn router(analyzer: Arc<Analyzer>) -> Router {
    Router::new()
        .route("/api/analyzeEmotion", post(analyze_emotion))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { analyzer })
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok"
    }))
}

async fn analyze_emotion(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Response {
    let request_id = Uuid::new_v4();

    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(%request_id, "rejected body: {rejection}");
            return error_response(StatusCode::BAD_REQUEST, "invalid JSON body");
        }
    };

    match state.analyzer.analyze_request(&body) {
        Ok(response) => {
            info!(
                %request_id,
                emotion = %response.emotion,
                risk = response.explanation.self_harm_severity.map(|s| s.as_str()),
                "analyzed entry"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(SoulscapeError::InvalidInput(message)) => {
            error_response(StatusCode::BAD_REQUEST, &message)
        }
        Err(e) => {
            tracing::error!(%request_id, "analysis failed: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "analysis failed")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({"error": message}))).into_response()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn local() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 0,
        }
    }

    #[tokio::test]
    async fn binds_ephemeral_port() {
        let server = AnalysisServer::start(Arc::new(Analyzer::default()), &local())
            .await
            .unwrap();
        assert_ne!(server.port(), 0);
        assert!(server.addr().ip().is_loopback());
    }

    #[tokio::test]
    async fn bind_failure_is_server_error() {
        let first = AnalysisServer::start(Arc::new(Analyzer::default()), &local())
            .await
            .unwrap();
        let taken = ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: first.port(),
        };
        let err = AnalysisServer::start(Arc::new(Analyzer::default()), &taken)
            .await
            .err()
            .unwrap();
        assert!(matches!(err, SoulscapeError::Server(_)));
    }

    #[tokio::test]
    async fn invalid_input_maps_to_bad_request() {
        let state = AppState {
            analyzer: Arc::new(Analyzer::default()),
        };
        let response =
            analyze_emotion(State(state), Ok(Json(serde_json::json!({"text": "  "})))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
