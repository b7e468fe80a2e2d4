// Page host: serves rendered review pages over HTTP.
//
// HTML pages are cached per slug in moka; records are immutable for the
// lifetime of the process, so entries only expire by TTL.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use moka::future::Cache;

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::{ContentSource, ProductCatalog};
use crate::config::{ServerConfig, SiteConfig};
use crate::error::{InvalidRecordError, NotFoundError};
use crate::review::formatters::HtmlFormatter;
use crate::review::generator::ReviewPageRenderer;
use crate::review::types::PageSections;
use crate::review::view_models::RenderedPage;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ProductCatalog>,
    pub renderer: Arc<ReviewPageRenderer>,
    pub sections: PageSections,
    /// Rendered HTML documents keyed by slug; `Bytes` clones share the buffer
    pub cache: Cache<String, Bytes>,
}

impl AppState {
    pub fn new(config: &ServerConfig, site: SiteConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading catalog from {}", config.catalog_path.display());
        let catalog = ProductCatalog::from_json_file(&config.catalog_path)?;
        Ok(Self::from_catalog(catalog, site))
    }

    pub fn from_catalog(catalog: ProductCatalog, site: SiteConfig) -> Self {
        tracing::info!("Initializing Moka page cache...");
        let cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(300))
            .build();

        Self {
            catalog: Arc::new(catalog),
            renderer: Arc::new(ReviewPageRenderer::new(site)),
            sections: PageSections::all(),
            cache,
        }
    }

    fn render_page(&self, slug: &str) -> Result<RenderedPage, AppError> {
        let record = self.catalog.fetch_product_record(slug)?;
        Ok(self.renderer.render(&record, &self.sections)?)
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // HTML pages (/tools is the legacy path for the same page)
        .route("/reviews/:slug", get(review_page))
        .route("/tools/:slug", get(review_page))

        // JSON API
        .route("/api/reviews", get(list_reviews))
        .route("/api/reviews/:slug", get(review_json))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn review_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<Bytes>, AppError> {
    if let Some(html) = state.cache.get(&slug).await {
        tracing::debug!("Page cache hit: {}", slug);
        return Ok(Html(html));
    }

    let page = state.render_page(&slug)?;
    let html = HtmlFormatter::format(&page)
        .map_err(|e| AppError::Internal(format!("Template error: {}", e)))?;

    let html = Bytes::from(html);
    state.cache.insert(slug, html.clone()).await;
    Ok(Html(html))
}

async fn review_json(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<RenderedPage>, AppError> {
    Ok(Json(state.render_page(&slug)?))
}

async fn list_reviews(State(state): State<AppState>) -> Json<serde_json::Value> {
    let slugs = state.catalog.slugs();
    Json(serde_json::json!({
        "count": slugs.len(),
        "slugs": slugs
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    NotFound(String),
    InvalidRecord(String),
    Internal(String),
}

impl From<NotFoundError> for AppError {
    fn from(e: NotFoundError) -> Self {
        AppError::NotFound(e.to_string())
    }
}

impl From<InvalidRecordError> for AppError {
    fn from(e: InvalidRecordError) -> Self {
        tracing::warn!("Refusing to render {}: {}", e.slug, e);
        AppError::InvalidRecord(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidRecord(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
