//! HTTP round trips against a live server bound on an ephemeral port.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use soulscape::config::ServerConfig;
use soulscape::server::AnalysisServer;
use soulscape::{AnalysisResponse, Analyzer, EmotionCategory};
use std::sync::Arc;

async fn start() -> (AnalysisServer, String) {
    let config = ServerConfig {
        host: "127.0.0.1".to_owned(),
        port: 0,
    };
    let server = AnalysisServer::start(Arc::new(Analyzer::default()), &config)
        .await
        .unwrap();
    let base = format!("http://{}", server.addr());
    (server, base)
}

#[tokio::test]
async fn health_reports_ok() {
    let (_server, base) = start().await;
    let body: serde_json::Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn analyze_returns_full_response() {
    let (_server, base) = start().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/analyzeEmotion"))
        .json(&serde_json::json!({"text": "I feel happy and grateful today"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let analysis: AnalysisResponse = response.json().await.unwrap();
    assert_eq!(analysis.emotion, EmotionCategory::Joy);
    assert!(analysis.support.is_none());
    assert!(analysis.explanation.self_harm_matches.is_none());
    assert!(!analysis.coping.is_empty());
}

#[tokio::test]
async fn risk_language_returns_crisis_resources() {
    let (_server, base) = start().await;
    let body: serde_json::Value = reqwest::Client::new()
        .post(format!("{base}/api/analyzeEmotion"))
        .json(&serde_json::json!({"text": "I want to end my life"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["explanation"]["selfHarmSeverity"], "high");
    assert_eq!(body["support"]["resources"][0]["url"], "tel:988");
}

#[tokio::test]
async fn missing_text_is_bad_request() {
    let (_server, base) = start().await;
    let client = reqwest::Client::new();
    for payload in [
        serde_json::json!({}),
        serde_json::json!({"text": 12}),
        serde_json::json!({"text": "   "}),
    ] {
        let response = client
            .post(format!("{base}/api/analyzeEmotion"))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Text is required");
    }
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (_server, base) = start().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/analyzeEmotion"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "invalid JSON body");
}

#[tokio::test]
async fn cors_preflight_is_allowed() {
    let (_server, base) = start().await;
    let response = reqwest::Client::new()
        .request(
            reqwest::Method::OPTIONS,
            format!("{base}/api/analyzeEmotion"),
        )
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}
