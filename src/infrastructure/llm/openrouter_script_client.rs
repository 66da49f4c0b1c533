use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ProviderError, ScriptClient, ScriptCompletion};
use crate::domain::{PetProfile, ScriptPrompt};
use crate::infrastructure::observability::sanitize_prompt;

const FALLBACK_COST_USD: f64 = 0.001;

/// Chat-completions client for an OpenRouter-compatible gateway.
pub struct OpenRouterScriptClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout_secs: u64,
}

impl OpenRouterScriptClient {
    pub fn new(api_key: String, base_url: String, timeout_secs: u64) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ProviderError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    total_cost: Option<f64>,
}

#[async_trait]
impl ScriptClient for OpenRouterScriptClient {
    async fn complete_script(
        &self,
        model: &str,
        profile: &PetProfile,
    ) -> Result<ScriptCompletion, ProviderError> {
        let prompt = ScriptPrompt::for_pet(profile);
        let body = ChatRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
        };

        tracing::debug!(
            model = %model,
            prompt = %sanitize_prompt(&prompt.user),
            "Requesting script completion"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", "https://adoptify.local")
            .header("X-Title", "Adoptify Storyteller")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, self.timeout_secs))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ProviderError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ProviderError::InvalidResponse("no choices returned".to_string()))?;

        let cost_usd = parsed
            .usage
            .and_then(|u| u.total_cost)
            .unwrap_or(FALLBACK_COST_USD);

        Ok(ScriptCompletion { content, cost_usd })
    }
}
