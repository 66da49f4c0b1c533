use std::path::Path;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::error::error_response;
use crate::application::ports::ContentStoreError;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct IngestResponse {
    pub asset_id: String,
    pub media_url: String,
    pub checksum: String,
}

/// Stores one uploaded pet photo. Only `image/*` parts are accepted.
#[tracing::instrument(skip(state, multipart))]
pub async fn ingest_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.file_name().is_some() || f.content_type().is_some() => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Ingest request with no file");
                return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(e.status(), format!("Failed to read multipart: {}", e));
            }
        }
    };

    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    if !content_type.starts_with("image/") {
        tracing::warn!(content_type = %content_type, "Rejected non-image upload");
        return error_response(StatusCode::BAD_REQUEST, "Only image uploads are supported");
    }

    let suffix = field
        .file_name()
        .and_then(|name| Path::new(name).extension())
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error_response(e.status(), format!("Failed to read file: {}", e));
        }
    };

    tracing::debug!(bytes = data.len(), content_type = %content_type, "Image received");

    match state.content_store.upload(data, &suffix).await {
        Ok(asset) => {
            tracing::info!(asset_id = %asset.asset_id, "Image ingested");
            (
                StatusCode::OK,
                Json(IngestResponse {
                    asset_id: asset.asset_id.to_string(),
                    media_url: asset.url,
                    checksum: asset.checksum.to_string(),
                }),
            )
                .into_response()
        }
        Err(e @ ContentStoreError::TooLarge { .. }) => {
            error_response(StatusCode::PAYLOAD_TOO_LARGE, e.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to store image");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Upload failed: {}", e))
        }
    }
}
