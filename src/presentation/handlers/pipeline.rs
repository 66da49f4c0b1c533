use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::error::error_response;
use super::render::RenderResponse;
use super::story::{StoryRequestBody, StoryResponse};
use super::voiceover::{VoiceoverResponse, parse_format};
use crate::application::services::PipelineRequest;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PipelineRequestBody {
    #[serde(flatten)]
    pub story: StoryRequestBody,
    pub voice_id: Option<String>,
    pub format: Option<String>,
}

#[derive(Serialize)]
pub struct PipelineResponse {
    pub story: StoryResponse,
    pub voiceover: VoiceoverResponse,
    pub render: RenderResponse,
}

/// Story, voiceover and render in one call.
#[tracing::instrument(skip(state, body), fields(pet_name = %body.story.pet_name))]
pub async fn pipeline_handler(
    State(state): State<AppState>,
    Json(body): Json<PipelineRequestBody>,
) -> Response {
    if body.story.pet_name.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "pet_name is required");
    }
    let format = match parse_format(body.format.as_deref()) {
        Ok(f) => f,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    let request = PipelineRequest {
        profile: body.story.profile(),
        models: body.story.models.clone(),
        voice_id: body.voice_id,
        format,
    };

    match state.orchestrator.run(&request).await {
        Ok(result) => (
            StatusCode::OK,
            Json(PipelineResponse {
                story: StoryResponse::from(result.story),
                voiceover: VoiceoverResponse::from(result.voiceover),
                render: RenderResponse::from(result.render),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
