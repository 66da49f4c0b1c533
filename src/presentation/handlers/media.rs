use std::path::{Path, PathBuf};

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::error::error_response;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MediaQuery {
    pub path: String,
}

fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("mp4") => "video/mp4",
        Some("avi") => "video/x-msvideo",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

async fn allowed_roots(state: &AppState) -> Vec<PathBuf> {
    let mut roots = Vec::new();
    for root in [&state.settings.storage.local_path, &state.settings.render.tmp_dir] {
        if let Ok(canonical) = tokio::fs::canonicalize(root).await {
            roots.push(canonical);
        }
    }
    roots
}

/// Serves a locally stored asset. Anything outside the storage or render
/// directories is reported as missing.
#[tracing::instrument(skip(state))]
pub async fn media_handler(State(state): State<AppState>, Query(query): Query<MediaQuery>) -> Response {
    let raw = query.path.trim();
    let raw = raw.strip_prefix("file://").unwrap_or(raw);

    let Ok(resolved) = tokio::fs::canonicalize(raw).await else {
        return error_response(StatusCode::NOT_FOUND, "Not found");
    };

    let roots = allowed_roots(&state).await;
    if !roots.iter().any(|root| resolved.starts_with(root)) {
        tracing::warn!(path = %resolved.display(), "Rejected media path outside storage roots");
        return error_response(StatusCode::NOT_FOUND, "Not found");
    }

    match tokio::fs::read(&resolved).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type_for(&resolved))],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::debug!(error = %e, "Media read failed");
            error_response(StatusCode::NOT_FOUND, "Not found")
        }
    }
}
