use std::fmt;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::Html,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::catalog::page::{PageOptions, index_page, story_page};
use crate::catalog::{Catalog, StoryEntry};
use crate::config::AppConfig;
use crate::error::CatalogError;
use crate::ui::icons::{IconAdapter, SvgIconSet};

/// State shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registered stories.
    pub catalog: Arc<Catalog>,
    /// Glyph renderer used by every story.
    pub icons: Arc<dyn IconAdapter>,
    /// Page chrome.
    pub page: Arc<PageOptions>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("catalog", &self.catalog)
            .field("page", &self.page)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// State for the built-in catalog and SVG icons.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            catalog: Arc::new(Catalog::builtin()),
            icons: Arc::new(SvgIconSet),
            page: Arc::new(config.page_options()),
        }
    }
}

/// Build the catalog router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/stories/{group}/{story}", get(story_handler))
        .route("/api/stories", get(api_list_stories))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the catalog server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::new(&config);

    for group in state.catalog.groups() {
        info!(
            name: "catalog.group.registered",
            group = group.title(),
            stories = group.stories().len(),
            "Story group registered"
        );
    }

    let app = router(state);

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(CatalogError::from)?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Catalog index page.
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(index_page(&state.catalog, &state.page))
}

/// GET /stories/:group/:story - Render one story.
async fn story_handler(
    State(state): State<AppState>,
    Path((group, story)): Path<(String, String)>,
) -> Result<Html<String>, CatalogError> {
    let (group, story) = state.catalog.find(&group, &story)?;

    tracing::debug!(
        name: "catalog.story.rendered",
        group = group.title(),
        story = story.name(),
        "Rendering story"
    );

    Ok(Html(story_page(
        &state.catalog,
        group,
        story,
        state.icons.as_ref(),
        &state.page,
    )))
}

/// GET /api/stories - List every story.
async fn api_list_stories(State(state): State<AppState>) -> Json<Vec<StoryEntry>> {
    Json(state.catalog.entries())
}

/// GET /health - Liveness probe.
async fn health_handler() -> &'static str {
    "ok"
}
