use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::error::error_response;
use crate::application::services::{StoryRequest, StoryResult};
use crate::domain::{PetProfile, ScriptCandidate};
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StoryRequestBody {
    pub pet_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub traits: Vec<String>,
    pub image_url: Option<String>,
    pub models: Option<Vec<String>>,
}

impl StoryRequestBody {
    pub fn profile(&self) -> PetProfile {
        PetProfile::new(self.pet_name.trim(), self.bio.clone(), self.traits.clone())
            .with_image_url(self.image_url.clone().filter(|u| !u.trim().is_empty()))
    }
}

#[derive(Serialize)]
pub struct ProviderResult {
    pub provider: String,
    pub latency_ms: u64,
    pub cost_usd: f64,
    pub content: String,
}

impl From<ScriptCandidate> for ProviderResult {
    fn from(candidate: ScriptCandidate) -> Self {
        Self {
            provider: candidate.provider_id,
            latency_ms: candidate.latency_ms,
            cost_usd: candidate.cost_usd,
            content: candidate.content,
        }
    }
}

#[derive(Serialize)]
pub struct StoryResponse {
    pub pet_name: String,
    pub script: String,
    pub provider: String,
    pub caption_variants: Vec<String>,
    pub hook_variants: Vec<String>,
    pub hashtags: Vec<String>,
    pub provider_results: Vec<ProviderResult>,
    pub storyboard: Option<String>,
    pub palette: Option<Vec<String>>,
}

impl From<StoryResult> for StoryResponse {
    fn from(result: StoryResult) -> Self {
        let winner = result.script.into_inner();
        Self {
            pet_name: result.pet_name,
            script: winner.content,
            provider: winner.provider_id,
            caption_variants: result.copy.captions.into_inner(),
            hook_variants: result.copy.hooks,
            hashtags: result.copy.hashtags,
            provider_results: result
                .provider_results
                .into_iter()
                .map(ProviderResult::from)
                .collect(),
            storyboard: Some(result.storyboard.description),
            palette: result.storyboard.palette,
        }
    }
}

#[tracing::instrument(skip(state, body), fields(pet_name = %body.pet_name))]
pub async fn story_handler(
    State(state): State<AppState>,
    Json(body): Json<StoryRequestBody>,
) -> Response {
    if body.pet_name.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "pet_name is required");
    }

    let request = StoryRequest {
        profile: body.profile(),
        models: body.models.clone(),
    };

    match state.orchestrator.generate_story(&request).await {
        Ok(result) => (StatusCode::OK, Json(StoryResponse::from(result))).into_response(),
        Err(e) => e.into_response(),
    }
}
