// API Integration Tests
//
// Purpose: Exercise every page host route against the sample catalog
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use review_page_renderer::{create_router, AppState, ProductCatalog, ServerConfig, SiteConfig};
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    // Helper: Create app over the bundled sample catalog
    fn create_test_app() -> axum::Router {
        let config = ServerConfig {
            catalog_path: concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_catalog.json").into(),
            port: 0,
        };
        let state = AppState::new(&config, SiteConfig::default()).expect("sample catalog loads");
        create_router(state)
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
        serde_json::from_slice(&body_bytes(response).await).expect("Failed to parse JSON")
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = create_test_app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: HTML Pages
    // =========================================================================

    #[tokio::test]
    async fn test_review_page_html() {
        let response = create_test_app().oneshot(get("/reviews/contentstudio")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("<title>ContentStudio Review [2025] | SiteOptz</title>"));
        assert!(html.contains("id=\"get-started\""));
    }

    #[tokio::test]
    async fn test_tools_path_serves_same_page() {
        let app = create_test_app();
        let reviews = app.clone().oneshot(get("/reviews/adbeat")).await.unwrap();
        let tools = app.oneshot(get("/tools/adbeat")).await.unwrap();

        assert_eq!(tools.status(), StatusCode::OK);
        assert_eq!(body_bytes(reviews).await, body_bytes(tools).await);
    }

    #[tokio::test]
    async fn test_cached_page_is_identical() {
        let app = create_test_app();
        let first = app.clone().oneshot(get("/reviews/notion-ai")).await.unwrap();
        let second = app.oneshot(get("/reviews/notion-ai")).await.unwrap();
        assert_eq!(body_bytes(first).await, body_bytes(second).await);
    }

    #[tokio::test]
    async fn test_cache_holds_served_document() {
        let config = ServerConfig {
            catalog_path: concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_catalog.json").into(),
            port: 0,
        };
        let state = AppState::new(&config, SiteConfig::default()).unwrap();
        let app = create_router(state.clone());

        assert!(state.cache.get("adbeat").await.is_none());
        let response = app.oneshot(get("/reviews/adbeat")).await.unwrap();
        let served = body_bytes(response).await;

        let cached = state.cache.get("adbeat").await.expect("page cached after first request");
        assert_eq!(cached.as_ref(), served.as_slice());
    }

    #[tokio::test]
    async fn test_unknown_slug_is_404() {
        let response = create_test_app().oneshot(get("/reviews/does-not-exist")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("does-not-exist"));
    }

    #[tokio::test]
    async fn test_unrenderable_record_is_422() {
        // Loads fine, but the pricing section cannot render without plans
        let catalog = ProductCatalog::from_json_str(
            r#"[{
                "name": "Plan-less",
                "slug": "plan-less",
                "category": "Testing",
                "description": "No pricing yet.",
                "website": "https://example.com",
                "rating": 3.0
            }]"#,
        )
        .unwrap();
        let app = create_router(AppState::from_catalog(catalog, SiteConfig::default()));

        let response = app.oneshot(get("/reviews/plan-less")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("pricingPlans"));
    }

    // =========================================================================
    // Section 3: JSON API
    // =========================================================================

    #[tokio::test]
    async fn test_review_json() {
        let response = create_test_app().oneshot(get("/api/reviews/contentstudio")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["slug"], "contentstudio");
        assert_eq!(body["metadata"]["structured_data"]["reviewRating"]["ratingValue"].as_f64(), Some(4.3));
        assert_eq!(body["sections"].as_array().unwrap().len(), 9);
    }

    #[tokio::test]
    async fn test_list_reviews() {
        let response = create_test_app().oneshot(get("/api/reviews")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["count"], 3);
        assert_eq!(body["slugs"][0], "contentstudio");
        assert_eq!(body["slugs"][2], "notion-ai");
    }
}
