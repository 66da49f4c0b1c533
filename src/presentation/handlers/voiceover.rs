use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::error::error_response;
use crate::application::services::{VoiceoverRequest, VoiceoverResult};
use crate::domain::AudioFormat;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VoiceoverRequestBody {
    pub script: String,
    pub voice_id: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Serialize)]
pub struct VoiceoverResponse {
    pub url: String,
    pub asset_id: String,
    pub checksum: String,
    pub local_path: String,
    pub format: String,
    pub duration_seconds: Option<f64>,
}

impl From<VoiceoverResult> for VoiceoverResponse {
    fn from(result: VoiceoverResult) -> Self {
        Self {
            url: result.asset.url,
            asset_id: result.asset.asset_id.to_string(),
            checksum: result.asset.checksum.to_string(),
            local_path: result.track.local_path.display().to_string(),
            format: result.track.format.to_string(),
            duration_seconds: result.track.duration_seconds,
        }
    }
}

pub fn parse_format(format: Option<&str>) -> Result<AudioFormat, String> {
    match format.map(str::trim).filter(|f| !f.is_empty()) {
        Some(f) => f.parse(),
        None => Ok(AudioFormat::default()),
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn voiceover_handler(
    State(state): State<AppState>,
    Json(body): Json<VoiceoverRequestBody>,
) -> Response {
    if body.script.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "script is required");
    }
    let format = match parse_format(body.format.as_deref()) {
        Ok(f) => f,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    tracing::debug!(script = %sanitize_prompt(&body.script), "Synthesizing voiceover");

    let request = VoiceoverRequest {
        text: body.script,
        voice_id: body.voice_id,
        format,
    };

    match state.orchestrator.create_voiceover(&request).await {
        Ok(result) => (StatusCode::OK, Json(VoiceoverResponse::from(result))).into_response(),
        Err(e) => e.into_response(),
    }
}
