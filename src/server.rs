//! JSON HTTP server over the summarization pipeline.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/summarize` | Ingest a URL or pasted text, return the new record |
//! | `GET`  | `/summaries` | List stored records, optionally filtered by `?q=` |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! A request with neither a URL nor content returns `400` with
//! `{"error": "No content to summarize"}`. Every other pipeline failure
//! (fetch, summarization, store write) surfaces as an opaque `500` with the
//! same `{"error": ...}` shape.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted so the form UI and other
//! browser clients can call the API cross-origin.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::config::Config;
use crate::fetch::ArticleFetcher;
use crate::ingest::{ingest, IngestError, SummarizeSource};
use crate::models::SummaryRecord;
use crate::search::filter_records;
use crate::store::SummaryStore;
use crate::summarizer::{create_summarizer, Summarizer};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SummaryStore>,
    pub summarizer: Arc<dyn Summarizer>,
    pub fetcher: Arc<ArticleFetcher>,
}

impl AppState {
    /// Build production state from configuration.
    ///
    /// # Errors
    ///
    /// Fails when the summarizer (missing API key, unknown provider) or the
    /// fetcher (invalid content selector) cannot be constructed.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            store: Arc::new(SummaryStore::new(config.store.path.clone())),
            summarizer: Arc::from(create_summarizer(&config.summarizer)?),
            fetcher: Arc::new(ArticleFetcher::new(&config.fetcher)?),
        })
    }
}

/// Starts the HTTP server on `[server].bind` and runs until terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    let app = router(state);

    info!("listening on http://{}", config.server.bind);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router. Exposed separately so tests can drive it in-process.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/summarize", post(handle_summarize))
        .route("/summaries", get(handle_summaries))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state)
}

// ============ Error response ============

/// JSON error response body: `{"error": "<message>"}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Internal error type that converts into an HTTP response.
struct AppError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<IngestError> for AppError {
    fn from(err: IngestError) -> Self {
        let status = match err {
            IngestError::NoContent => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        AppError {
            status,
            message: err.to_string(),
        }
    }
}

// ============ POST /summarize ============

/// Request body for `POST /summarize`. Empty strings count as absent;
/// `url` takes precedence when both are supplied.
#[derive(Deserialize)]
struct SummarizeRequest {
    url: Option<String>,
    content: Option<String>,
}

/// Handler for `POST /summarize`.
///
/// Runs the full ingestion pipeline and returns the stored record.
async fn handle_summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummaryRecord>, AppError> {
    let source = SummarizeSource::from_parts(request.url, request.content);

    let record = ingest(&state.fetcher, state.summarizer.as_ref(), &state.store, source)
        .await
        .map_err(|e| {
            if !matches!(e, IngestError::NoContent) {
                error!("ingestion failed: {}", e);
            }
            AppError::from(e)
        })?;

    info!(id = %record.id, "stored summary");
    Ok(Json(record))
}

// ============ GET /summaries ============

/// Query parameters for `GET /summaries`.
#[derive(Deserialize)]
struct SummariesQuery {
    q: Option<String>,
}

/// Handler for `GET /summaries`.
///
/// Loads the full store (newest first) and applies the substring filter
/// when `q` is present and non-empty.
async fn handle_summaries(
    State(state): State<AppState>,
    Query(params): Query<SummariesQuery>,
) -> Json<Vec<SummaryRecord>> {
    let records = state.store.load_all();
    Json(filter_records(records, params.q.as_deref()))
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Handler for `GET /health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
