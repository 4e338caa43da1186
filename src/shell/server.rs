use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{
        Extension, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderName, StatusCode, header},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::foundation::error::{SpinError, SpinResult};
use crate::params::{AnimationParams, ControlLimits};
use crate::pipeline::AnimationArtifact;
use crate::shell::page::render_index;
use crate::shell::worker::GenerationWorker;

/// Response header carrying the number of frames in the returned animation.
pub const FRAME_COUNT_HEADER: &str = "x-frame-count";

/// State shared by every request.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Worker that runs generations.
    pub worker: GenerationWorker,
    /// Slider limits requests are checked against.
    pub limits: ControlLimits,
}

impl AppState {
    /// State with the standard slider limits.
    pub fn new(worker: GenerationWorker) -> Self {
        Self {
            worker,
            limits: ControlLimits::STANDARD,
        }
    }
}

/// Create the shell router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/generate", post(generate_handler))
        .route("/animation.gif", get(download_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

/// Bind `addr` and serve the shell until the process exits.
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> SpinResult<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| SpinError::Other(anyhow::anyhow!("bind {addr}: {e}")))?;
    info!("spinplot shell listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .map_err(|e| SpinError::Other(anyhow::anyhow!("serve: {e}")))
}

/// Error returned by shell handlers.
#[derive(Debug)]
pub struct ShellError(pub SpinError);

impl From<SpinError> for ShellError {
    fn from(e: SpinError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ShellError {
    fn into_response(self) -> Response {
        if self.0.is_user_error() {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": self.0.to_string() })),
            )
                .into_response();
        }
        error!(error = %self.0, "animation generation failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "animation generation failed" })),
        )
            .into_response()
    }
}

/// GET / - slider page
async fn index_handler(Extension(state): Extension<Arc<AppState>>) -> Html<String> {
    Html(render_index(&state.limits))
}

/// POST /api/generate - render and return the GIF for inline preview
async fn generate_handler(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<AnimationParams>, JsonRejection>,
) -> Result<Response, ShellError> {
    let Json(params) = payload.map_err(|e| SpinError::serde(e.body_text()))?;
    let artifact = run(&state, params).await?;
    Ok(gif_response(artifact, "inline"))
}

/// GET /animation.gif - render and return the GIF as a download
async fn download_handler(
    Extension(state): Extension<Arc<AppState>>,
    query: Result<Query<AnimationParams>, QueryRejection>,
) -> Result<Response, ShellError> {
    let Query(params) = query.map_err(|e| SpinError::serde(e.body_text()))?;
    let artifact = run(&state, params).await?;
    Ok(gif_response(artifact, "attachment"))
}

/// GET /health - liveness probe
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "spinplot",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn run(state: &AppState, params: AnimationParams) -> SpinResult<AnimationArtifact> {
    state.limits.check(&params)?;
    let artifact = state.worker.submit(params).await?;
    info!(
        frames = artifact.frame_count,
        bytes = artifact.len(),
        "served animation"
    );
    Ok(artifact)
}

fn gif_response(artifact: AnimationArtifact, disposition: &str) -> Response {
    let headers = [
        (header::CONTENT_TYPE, artifact.mime().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("{disposition}; filename=\"{}\"", artifact.file_name()),
        ),
        (
            HeaderName::from_static(FRAME_COUNT_HEADER),
            artifact.frame_count.to_string(),
        ),
    ];
    (headers, artifact.into_bytes()).into_response()
}
