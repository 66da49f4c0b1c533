use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{ProviderError, VoiceSynthesizer};
use crate::presentation::config::{ProviderSettings, present_key};

use super::elevenlabs_synthesizer::ElevenLabsSynthesizer;
use super::tone_synthesizer::ToneVoiceSynthesizer;

pub struct VoiceSynthesizerFactory;

impl VoiceSynthesizerFactory {
    pub fn create(
        settings: &ProviderSettings,
        tmp_dir: &Path,
    ) -> Result<Arc<dyn VoiceSynthesizer>, ProviderError> {
        match present_key(&settings.elevenlabs.api_key) {
            Some(key) if !settings.degraded_mode => {
                tracing::info!(voice = %settings.elevenlabs.voice_id, "Using ElevenLabs voice synthesizer");
                Ok(Arc::new(ElevenLabsSynthesizer::new(
                    key.to_string(),
                    settings.elevenlabs.base_url.clone(),
                    settings.elevenlabs.voice_id.clone(),
                    tmp_dir.to_path_buf(),
                    settings.elevenlabs.timeout_secs,
                )?))
            }
            _ => {
                tracing::info!("Using synthetic tone voice synthesizer");
                Ok(Arc::new(ToneVoiceSynthesizer::new(tmp_dir.to_path_buf())))
            }
        }
    }
}
