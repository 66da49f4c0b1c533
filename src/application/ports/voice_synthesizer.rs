use async_trait::async_trait;

use super::ProviderError;
use crate::domain::{AudioFormat, VoiceTrack};

#[async_trait]
pub trait VoiceSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: Option<&str>,
        format: AudioFormat,
    ) -> Result<VoiceTrack, ProviderError>;
}
