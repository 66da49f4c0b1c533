use std::sync::Arc;

use crate::application::ports::{ProviderError, ScriptClient, StoryboardClient};
use crate::presentation::config::{ProviderSettings, present_key};

use super::gemini_storyboard_client::GeminiStoryboardClient;
use super::openrouter_script_client::OpenRouterScriptClient;
use super::synthetic_script_client::SyntheticScriptClient;
use super::synthetic_storyboard_client::SyntheticStoryboardClient;

/// Picks real or synthetic adapters from explicit settings.
///
/// Degraded mode wins over any configured key; a missing key degrades only
/// that provider.
pub struct ProviderFactory;

impl ProviderFactory {
    pub fn script_client(settings: &ProviderSettings) -> Result<Arc<dyn ScriptClient>, ProviderError> {
        match present_key(&settings.openrouter.api_key) {
            Some(key) if !settings.degraded_mode => {
                tracing::info!(base_url = %settings.openrouter.base_url, "Using OpenRouter script client");
                Ok(Arc::new(OpenRouterScriptClient::new(
                    key.to_string(),
                    settings.openrouter.base_url.clone(),
                    settings.request_timeout_secs,
                )?))
            }
            _ => {
                tracing::info!("Using synthetic script client");
                Ok(Arc::new(SyntheticScriptClient))
            }
        }
    }

    pub fn storyboard_client(
        settings: &ProviderSettings,
    ) -> Result<Arc<dyn StoryboardClient>, ProviderError> {
        match present_key(&settings.gemini.api_key) {
            Some(key) if !settings.degraded_mode => {
                tracing::info!(model = %settings.gemini.model, "Using Gemini storyboard client");
                Ok(Arc::new(GeminiStoryboardClient::new(
                    key.to_string(),
                    settings.gemini.model.clone(),
                    settings.gemini.base_url.clone(),
                    settings.request_timeout_secs,
                )?))
            }
            _ => {
                tracing::info!("Using synthetic storyboard client");
                Ok(Arc::new(SyntheticStoryboardClient))
            }
        }
    }
}
