//! Static assets and the application-shell catch-all: any unmatched path
//! serves a file from the static directory when one exists, and falls
//! back to index.html so client-side routes resolve.

use crate::http::state::AppState;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use std::path::{Component, Path, PathBuf};

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// Resolve a request path inside the static dir; any traversal component
/// rejects the whole path.
fn sanitize(root: &Path, request_path: &str) -> Option<PathBuf> {
    let trimmed = request_path.trim_start_matches('/');
    let relative = Path::new(trimmed);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(root.join(relative))
}

pub async fn shell_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let root = PathBuf::from(&state.cfg.static_dir);

    if let Some(candidate) = sanitize(&root, uri.path())
        && candidate.is_file()
        && let Ok(bytes) = tokio::fs::read(&candidate).await
    {
        return (
            [(header::CONTENT_TYPE, content_type(&candidate))],
            bytes,
        )
            .into_response();
    }

    // App shell for client-side routing.
    match tokio::fs::read(root.join("index.html")).await {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            bytes,
        )
            .into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}
