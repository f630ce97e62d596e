pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Headroom over the raw text limit for JSON framing and escapes.
const BODY_LIMIT_FACTOR: usize = 2;
const MIN_BODY_LIMIT: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_resume_bytes
        .saturating_mul(BODY_LIMIT_FACTOR)
        .max(MIN_BODY_LIMIT);

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/analyses",
            post(handlers::handle_analyze).get(handlers::handle_list),
        )
        .route("/api/v1/analyses/preview", post(handlers::handle_preview))
        .route("/api/v1/analyses/summary", get(handlers::handle_summary))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::pipeline::Analyzer;
    use crate::config::{Config, StoreBackend};
    use crate::store::{MemoryReportStore, ReportStore};

    fn test_state(max_resume_bytes: usize) -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                store_backend: StoreBackend::Memory,
                report_file: PathBuf::from("unused.json"),
                database_url: None,
                reference_lists_path: None,
                max_resume_bytes,
            },
            analyzer: Analyzer::default(),
            store: Arc::new(MemoryReportStore::new()),
        }
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state(1024));
        let (status, body) = send(app, get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-checker");
    }

    #[tokio::test]
    async fn test_analyze_persists_report() {
        let state = test_state(1024);
        let store = Arc::clone(&state.store);
        let app = build_router(state);

        let (status, body) = send(
            app,
            post_json(
                "/api/v1/analyses",
                json!({"text": "jane@example.com 1234567890 python sql"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["email"], "jane@example.com");
        assert_eq!(body["contact_score"], 100);
        assert_eq!(body["skills_found"], json!(["python", "sql"]));
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_preview_does_not_persist() {
        let state = test_state(1024);
        let store = Arc::clone(&state.store);

        let (status, body) = send(
            build_router(state),
            post_json("/api/v1/analyses/preview", json!({"text": ""})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["email"].is_null());
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 4);
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_oversized_text_rejected() {
        let state = test_state(16);
        let store = Arc::clone(&state.store);

        let (status, body) = send(
            build_router(state),
            post_json("/api/v1/analyses", json!({"text": "x".repeat(17)})),
        )
        .await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_sorted_by_score_with_limit() {
        let state = test_state(1024);
        let app = build_router(state);

        for text in ["", "a@b.co 1234567890 python java sql", "a@b.co"] {
            let (status, _) = send(
                app.clone(),
                post_json("/api/v1/analyses", json!({ "text": text })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = send(
            app.clone(),
            get_request("/api/v1/analyses?sort=score&limit=2"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let reports = body.as_array().unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports[0]["total_score"].as_f64() >= reports[1]["total_score"].as_f64());
        assert_eq!(reports[0]["phone"], "1234567890");

        let (_, body) = send(app, get_request("/api/v1/analyses")).await;
        let inserted = body.as_array().unwrap();
        assert_eq!(inserted.len(), 3);
        assert!(inserted[0]["email"].is_null());
    }

    #[tokio::test]
    async fn test_summary_lists_timestamp_and_score() {
        let app = build_router(test_state(1024));
        send(
            app.clone(),
            post_json("/api/v1/analyses", json!({"text": "a@b.co"})),
        )
        .await;

        let request = get_request("/api/v1/analyses/summary?sort=date");
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        let row = &body.as_array().unwrap()[0];
        assert!(row["timestamp"].is_string());
        assert_eq!(row["total_score"], 10.0);
        assert!(row.get("email").is_none());
    }

    #[tokio::test]
    async fn test_zero_limit_is_validation_error() {
        let (status, body) = send(
            build_router(test_state(1024)),
            get_request("/api/v1/analyses?limit=0"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
