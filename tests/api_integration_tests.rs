// API Integration Tests
//
// Purpose: exercise every HTTP endpoint against a content file in a temp dir
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use std::fs;
    use std::path::PathBuf;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use promo_dashboard::{create_router, AppState, DashboardConfig};
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt; // for oneshot

    const CONTENT: &str = r#"{
        "name": "Jordan Lee",
        "summary": "Delivery lead",
        "timeline_ranges": [
            {"lane": "Client — Acme", "start": "2024-01-01", "end": "2024-06-30", "label": "Platform"},
            {"lane": "Internal — Guild", "start": "2024-03-01", "label": "Guild lead"}
        ],
        "matrix": {"Overview": ["Scope:", "Led delivery"]},
        "feedback_section": {
            "testimonials": [{"quote": "Reliable", "name": "Client", "image": "img/note.png"}]
        }
    }"#;

    // Helper: content dir with one image, plus the router over it
    async fn create_test_app(content: &str) -> (TempDir, PathBuf, axum::Router) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("img")).unwrap();
        fs::write(dir.path().join("img/note.png"), b"not really a png").unwrap();

        let content_path = dir.path().join("content.json");
        fs::write(&content_path, content).unwrap();

        let config = DashboardConfig {
            content_path: content_path.clone(),
            asset_dir: dir.path().to_path_buf(),
            ..DashboardConfig::default()
        };
        let state = AppState::new(&config).await.expect("state builds");
        (dir, content_path, create_router(state))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body")
            .to_vec()
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = body_bytes(response).await;
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    // =========================================================================
    // Section 1: Start-up
    // =========================================================================

    #[tokio::test]
    async fn test_missing_content_file_fails_startup() {
        let dir = TempDir::new().unwrap();
        let config = DashboardConfig {
            content_path: dir.path().join("absent.json"),
            ..DashboardConfig::default()
        };

        let err = AppState::new(&config).await.err().expect("start-up should fail");
        assert!(err.to_string().contains("not found. Create it and restart."));
    }

    #[tokio::test]
    async fn test_health_check() {
        let (_dir, _path, app) = create_test_app(CONTENT).await;

        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Page and View Model
    // =========================================================================

    #[tokio::test]
    async fn test_dashboard_page() {
        let (_dir, _path, app) = create_test_app(CONTENT).await;

        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Promotion Dashboard — Jordan Lee</title>"));
        assert!(html.contains("Journey at Mantel"));
        // Images are served from the asset route
        assert!(html.contains("<img src=\"/assets/img/note.png\""));
    }

    #[tokio::test]
    async fn test_dashboard_data() {
        let (_dir, _path, app) = create_test_app(CONTENT).await;

        let response = app.oneshot(get("/api/dashboard")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_response(response).await;
        assert_eq!(body["hero"]["name"], "Jordan Lee");

        let lanes = body["timeline"]["timeline"]["lanes"].as_array().unwrap();
        assert_eq!(lanes.len(), 2);
        assert_eq!(lanes[0]["name"], "Client — Acme");
        assert_eq!(lanes[1]["category"], "Internal");

        assert_eq!(body["kpis"]["categories"][0]["name"], "Overview");
        assert_eq!(body["appendix"]["images"][0]["status"], "found");
        assert!(body["achievements"].is_null());
    }

    #[tokio::test]
    async fn test_asset_route_serves_images() {
        let (_dir, _path, app) = create_test_app(CONTENT).await;

        let response = app.clone().oneshot(get("/assets/img/note.png")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"not really a png");

        let response = app.oneshot(get("/assets/img/absent.png")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_asset_route_refuses_non_images_and_dotfiles() {
        let (dir, _path, app) = create_test_app(CONTENT).await;
        fs::write(dir.path().join(".env"), "API_KEY=hunter2").unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git/logo.png"), b"hidden").unwrap();

        for uri in [
            "/assets/content.json",
            "/assets/.env",
            "/assets/%2Eenv",
            "/assets/.git/logo.png",
            "/assets/img/",
        ] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{} should be hidden", uri);
            let body = body_bytes(response).await;
            assert!(!String::from_utf8_lossy(&body).contains("hunter2"));
            assert!(!String::from_utf8_lossy(&body).contains("Jordan Lee"));
        }
    }

    // =========================================================================
    // Section 3: Reload
    // =========================================================================

    #[tokio::test]
    async fn test_edits_apply_only_after_reload() {
        let (_dir, content_path, app) = create_test_app(CONTENT).await;

        fs::write(&content_path, r#"{"name": "Renamed Person"}"#).unwrap();

        // Still cached
        let response = app.clone().oneshot(get("/api/dashboard")).await.unwrap();
        let body: Value = json_response(response).await;
        assert_eq!(body["hero"]["name"], "Jordan Lee");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/admin/reload")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = json_response(response).await;
        assert_eq!(body["status"], "reloaded");
        assert_eq!(body["timeline_ranges"], 0);

        let response = app.oneshot(get("/api/dashboard")).await.unwrap();
        let body: Value = json_response(response).await;
        assert_eq!(body["hero"]["name"], "Renamed Person");
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_current_document() {
        let (_dir, content_path, app) = create_test_app(CONTENT).await;

        fs::remove_file(&content_path).unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/admin/reload")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Value = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("not found"));

        // Last good document still serves
        let response = app.clone().oneshot(get("/api/dashboard")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = json_response(response).await;
        assert_eq!(body["hero"]["name"], "Jordan Lee");

        // A broken edit is rejected the same way
        fs::write(&content_path, "{ not json").unwrap();
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/admin/reload")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
