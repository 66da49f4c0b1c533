use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use super::audio_probe::probe_duration_seconds;
use crate::application::ports::{ProviderError, VoiceSynthesizer};
use crate::domain::{AudioFormat, VoiceTrack};

pub struct ElevenLabsSynthesizer {
    client: reqwest::Client,
    api_key: String,
    base_url: reqwest::Url,
    default_voice_id: String,
    tmp_dir: PathBuf,
    timeout_secs: u64,
}

impl ElevenLabsSynthesizer {
    pub fn new(
        api_key: String,
        base_url: String,
        default_voice_id: String,
        tmp_dir: PathBuf,
        timeout_secs: u64,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ProviderError::Configuration(e.to_string()))?;

        let base_url = reqwest::Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ProviderError::Configuration(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ProviderError::Configuration(format!(
                "{} cannot carry a path",
                base_url
            )));
        }

        Ok(Self {
            client,
            api_key,
            base_url,
            default_voice_id,
            tmp_dir,
            timeout_secs,
        })
    }

    /// `{base}/text-to-speech/{voice}` with the voice id as one encoded segment.
    fn speech_url(&self, voice: &str) -> reqwest::Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("text-to-speech").push(voice);
        }
        url
    }
}

#[async_trait]
impl VoiceSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: Option<&str>,
        format: AudioFormat,
    ) -> Result<VoiceTrack, ProviderError> {
        let voice = voice_id
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(&self.default_voice_id);
        let url = self.speech_url(voice);

        let body = json!({
            "text": text,
            "voice_settings": { "stability": 0.5, "similarity_boost": 0.7 }
        });

        tracing::debug!(voice = %voice, format = %format, chars = text.len(), "Requesting voice synthesis");

        let response = self
            .client
            .post(url)
            .header("xi-api-key", &self.api_key)
            .header(reqwest::header::ACCEPT, format!("audio/{}", format.extension()))
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

        let audio = response
            .bytes()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, self.timeout_secs))?;
        if audio.is_empty() {
            return Err(ProviderError::InvalidResponse("empty audio body".to_string()));
        }

        tokio::fs::create_dir_all(&self.tmp_dir).await?;
        let path = self
            .tmp_dir
            .join(format!("voice-{}.{}", Uuid::new_v4(), format.extension()));
        tokio::fs::write(&path, &audio).await?;

        let probe_path = path.clone();
        let duration_seconds = tokio::task::spawn_blocking(move || probe_duration_seconds(&probe_path))
            .await
            .ok()
            .flatten();

        tracing::info!(
            bytes = audio.len(),
            duration_seconds = ?duration_seconds,
            "Voice synthesized"
        );

        Ok(VoiceTrack {
            local_path: path,
            format,
            duration_seconds,
        })
    }
}
