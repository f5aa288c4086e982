use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::IndexError;
use crate::index::{is_safe_relative, ProjectIndex};
use crate::models::*;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

// ============================================================
// Error Handling
// ============================================================

fn index_error(e: IndexError) -> (StatusCode, String) {
    let status = match e {
        IndexError::ProjectNotFound(_) | IndexError::DocumentNotFound(_) => StatusCode::NOT_FOUND,
        IndexError::InvalidDocumentPath(_) => StatusCode::BAD_REQUEST,
    };
    tracing::debug!("Request failed: {}", e);
    (status, e.to_string())
}

/// Run filesystem work on the blocking pool.
async fn blocking<T, F>(work: F) -> Result<T, (StatusCode, String)>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|e| {
        tracing::error!("Internal error: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    })
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ============================================================
// Projects
// ============================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectList {
    pub projects: Vec<ProjectSummary>,
}

pub async fn list_projects(State(index): State<ProjectIndex>) -> ApiResult<ProjectList> {
    let projects = blocking(move || index.discover_all()).await?;
    Ok(Json(ProjectList { projects }))
}

pub async fn get_project(
    State(index): State<ProjectIndex>,
    Path(id): Path<String>,
) -> ApiResult<ProjectSummary> {
    blocking(move || index.discover_one(&id))
        .await?
        .map(Json)
        .map_err(index_error)
}

// ============================================================
// Documents
// ============================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentList {
    pub documents: Vec<DocumentDescriptor>,
}

pub async fn list_documents(
    State(index): State<ProjectIndex>,
    Path(id): Path<String>,
) -> ApiResult<DocumentList> {
    blocking(move || index.list_documents(&id))
        .await?
        .map(|documents| Json(DocumentList { documents }))
        .map_err(index_error)
}

pub async fn read_document(
    State(index): State<ProjectIndex>,
    Path((id, path)): Path<(String, String)>,
) -> ApiResult<DocumentContent> {
    // The index joins paths unchecked, so the network boundary validates them.
    if !is_safe_relative(&path) {
        return Err(index_error(IndexError::InvalidDocumentPath(path)));
    }

    blocking(move || {
        index
            .read_document(&id, &path)
            .map(|content| DocumentContent { path, content })
    })
    .await?
    .map(Json)
    .map_err(index_error)
}

// ============================================================
// Config
// ============================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct PathInput {
    pub path: String,
}

pub async fn get_config(State(index): State<ProjectIndex>) -> ApiResult<Config> {
    blocking(move || index.config()).await.map(Json)
}

pub async fn add_search_path(
    State(index): State<ProjectIndex>,
    Json(input): Json<PathInput>,
) -> ApiResult<Config> {
    if input.path.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "path must not be empty".to_string()));
    }
    blocking(move || index.add_search_path(&input.path))
        .await
        .map(Json)
}

pub async fn add_project(
    State(index): State<ProjectIndex>,
    Json(input): Json<PathInput>,
) -> ApiResult<Config> {
    if input.path.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "path must not be empty".to_string()));
    }
    blocking(move || index.add_project(&input.path))
        .await
        .map(Json)
}
