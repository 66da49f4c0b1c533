use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::error_response;
use crate::application::services::{RenderRequest, RenderResult};
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RenderRequestBody {
    pub pet_name: String,
    #[serde(default)]
    pub captions: Vec<String>,
    pub voiceover_url: Option<String>,
}

#[derive(Serialize)]
pub struct RenderResponse {
    pub video_url: String,
    pub asset_id: String,
    pub checksum: String,
    pub rendered_at: DateTime<Utc>,
    pub has_audio: bool,
    pub frame_count: u64,
    pub mux_outcome: Option<&'static str>,
}

impl From<RenderResult> for RenderResponse {
    fn from(result: RenderResult) -> Self {
        Self {
            video_url: result.asset.url,
            asset_id: result.asset.asset_id.to_string(),
            checksum: result.asset.checksum.to_string(),
            rendered_at: result.rendered_at,
            has_audio: result.artifact.has_audio,
            frame_count: result.artifact.frame_count,
            mux_outcome: result.mux_outcome,
        }
    }
}

#[tracing::instrument(skip(state, body), fields(pet_name = %body.pet_name))]
pub async fn render_handler(
    State(state): State<AppState>,
    Json(body): Json<RenderRequestBody>,
) -> Response {
    if body.pet_name.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "pet_name is required");
    }

    let request = RenderRequest {
        pet_name: body.pet_name,
        captions: body.captions,
        audio_ref: body.voiceover_url,
    };

    match state.orchestrator.render(&request).await {
        Ok(result) => (StatusCode::OK, Json(RenderResponse::from(result))).into_response(),
        Err(e) => e.into_response(),
    }
}
