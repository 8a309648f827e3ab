// Axum server for the dashboard
//
// Purpose: serve the rendered page, its JSON view model and the image assets.
// The parsed content document is cached once per load and only replaced by an
// explicit POST /admin/reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::DashboardConfig;
use crate::content::{load_content, ContentDocument, ContentError};
use crate::dashboard::{build_page_data, DashboardGenerator, DashboardPageData, RenderContext};

/// URL prefix the asset directory is mounted under.
pub const ASSET_ROUTE: &str = "/assets";

/// File types the asset route serves. Everything else under the asset directory
/// is a 404.
const ASSET_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "avif"];

// ============================================================================
// Document Cache
// ============================================================================

/// Parsed content document, loaded at most once until an explicit reload.
///
/// Concurrent first requests coalesce on a single load (`try_get_with`). There is
/// no TTL; only a successful `reload` replaces the entry.
#[derive(Clone)]
pub struct DocumentCache {
    path: Arc<PathBuf>,
    cache: Cache<PathBuf, Arc<ContentDocument>>,
}

impl DocumentCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            cache: Cache::builder().max_capacity(1).build(),
        }
    }

    /// Cached document, loading it on first use.
    pub async fn get(&self) -> Result<Arc<ContentDocument>, Arc<ContentError>> {
        let path = Arc::clone(&self.path);
        self.cache
            .try_get_with(self.path.to_path_buf(), async move {
                tracing::debug!("Loading content from {}", path.display());
                load_content(path.as_path()).map(Arc::new)
            })
            .await
    }

    /// Load the file again and replace the cached document. A failed load keeps
    /// the current document in place.
    pub async fn reload(&self) -> Result<Arc<ContentDocument>, Arc<ContentError>> {
        tracing::info!("Reloading content from {}", self.path.display());
        let document = match load_content(self.path.as_path()) {
            Ok(document) => Arc::new(document),
            Err(err) => {
                tracing::warn!("Reload failed, keeping the cached document: {}", err);
                return Err(Arc::new(err));
            }
        };
        self.cache
            .insert(self.path.to_path_buf(), Arc::clone(&document))
            .await;
        Ok(document)
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub documents: DocumentCache,
    pub generator: Arc<DashboardGenerator>,
    pub asset_dir: Arc<PathBuf>,
}

impl AppState {
    /// Build state and load the content file once. A missing file is fatal.
    pub async fn new(config: &DashboardConfig) -> anyhow::Result<Self> {
        tracing::info!("Initializing document cache...");
        let documents = DocumentCache::new(config.content_path.clone());

        tracing::info!("Loading {}...", config.content_path.display());
        documents.get().await?;

        Ok(Self {
            documents,
            generator: Arc::new(DashboardGenerator::new()),
            asset_dir: Arc::new(config.asset_dir.clone()),
        })
    }

    /// Fresh context per request so "today" tracks the calendar.
    fn render_context(&self) -> RenderContext {
        RenderContext::new(self.asset_dir.to_path_buf()).with_asset_url_prefix(ASSET_ROUTE)
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    // Image files only; the guard runs on the path with the prefix stripped
    let assets: Router = Router::new()
        .fallback_service(ServeDir::new(state.asset_dir.as_path()))
        .layer(middleware::from_fn(asset_guard));

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Rendered page
        .route("/", get(dashboard_page))

        // View model (JSON)
        .route("/api/dashboard", get(dashboard_data))

        // Explicit cache invalidation
        .route("/admin/reload", post(reload_content))

        // Images referenced by the content file
        .nest_service(ASSET_ROUTE, assets)

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

async fn dashboard_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let document = state.documents.get().await?;
    let html = state.generator.generate(&document, &state.render_context());
    Ok(Html(html))
}

async fn dashboard_data(State(state): State<AppState>) -> Result<Json<DashboardPageData>, AppError> {
    let document = state.documents.get().await?;
    Ok(Json(build_page_data(&document, &state.render_context())))
}

async fn reload_content(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let document = state.documents.reload().await?;
    Ok(Json(serde_json::json!({
        "status": "reloaded",
        "path": state.documents.path().display().to_string(),
        "timeline_ranges": document.timeline_ranges.len(),
        "kpi_categories": document.matrix.len(),
        "achievements": document.achievements.len(),
    })))
}

// ============================================================================
// Asset Filtering
// ============================================================================

async fn asset_guard(request: Request, next: Next) -> Response {
    if is_servable_asset(request.uri().path()) {
        next.run(request).await
    } else {
        tracing::debug!("Refusing asset request for {}", request.uri().path());
        StatusCode::NOT_FOUND.into_response()
    }
}

/// True for an image path with no hidden or parent segments.
pub fn is_servable_asset(path: &str) -> bool {
    let Ok(decoded) = urlencoding::decode(path) else {
        return false;
    };
    if decoded.contains('\\') {
        return false;
    }

    let segments: Vec<&str> = decoded.split('/').filter(|s| !s.is_empty()).collect();
    if segments.iter().any(|s| s.starts_with('.')) {
        return false;
    }

    segments
        .last()
        .and_then(|file| Path::new(file).extension())
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            ASSET_EXTENSIONS.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Content(Arc<ContentError>),
}

impl From<Arc<ContentError>> for AppError {
    fn from(err: Arc<ContentError>) -> Self {
        AppError::Content(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Content(err) => {
                tracing::error!("Content error: {}", err);
                let status = match &*err {
                    ContentError::NotFound { .. } => StatusCode::NOT_FOUND,
                    ContentError::Io { .. } | ContentError::Parse { .. } => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, err.to_string())
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
