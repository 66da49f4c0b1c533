use std::f32::consts::PI;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use hound::{SampleFormat, WavSpec, WavWriter};
use uuid::Uuid;

use crate::application::ports::{ProviderError, VoiceSynthesizer};
use crate::domain::{AudioFormat, VoiceTrack};

const SAMPLE_RATE: u32 = 16_000;
const TONE_HZ: f32 = 220.0;
const AMPLITUDE: f32 = 16_000.0;
const CHARS_PER_SECOND: usize = 15;
const MIN_SECONDS: usize = 2;
const MAX_SECONDS: usize = 8;

/// Offline narration: an audible sine tone whose length tracks the text.
///
/// Always emits WAV whatever format was requested, so any muxer can decode it.
pub struct ToneVoiceSynthesizer {
    tmp_dir: PathBuf,
}

impl ToneVoiceSynthesizer {
    pub fn new(tmp_dir: PathBuf) -> Self {
        Self { tmp_dir }
    }

    pub fn duration_for(text: &str) -> u32 {
        (text.chars().count() / CHARS_PER_SECOND).clamp(MIN_SECONDS, MAX_SECONDS) as u32
    }
}

fn write_tone(path: &Path, seconds: u32) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    let total = SAMPLE_RATE * seconds;
    for n in 0..total {
        let t = n as f32 / SAMPLE_RATE as f32;
        let sample = (AMPLITUDE * (2.0 * PI * TONE_HZ * t).sin()) as i16;
        writer.write_sample(sample)?;
    }
    writer.finalize()
}

#[async_trait]
impl VoiceSynthesizer for ToneVoiceSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        _voice_id: Option<&str>,
        format: AudioFormat,
    ) -> Result<VoiceTrack, ProviderError> {
        tokio::fs::create_dir_all(&self.tmp_dir).await?;

        let seconds = Self::duration_for(text);
        let path = self
            .tmp_dir
            .join(format!("voice-{}.{}", Uuid::new_v4(), AudioFormat::Wav.extension()));

        let target = path.clone();
        tokio::task::spawn_blocking(move || write_tone(&target, seconds))
            .await
            .map_err(|e| ProviderError::ApiRequestFailed(format!("tone task: {}", e)))?
            .map_err(|e| ProviderError::ApiRequestFailed(format!("wav write: {}", e)))?;

        tracing::debug!(
            requested = %format,
            seconds,
            path = %path.display(),
            "Synthetic voice tone written"
        );

        Ok(VoiceTrack {
            local_path: path,
            format: AudioFormat::Wav,
            duration_seconds: Some(seconds as f64),
        })
    }
}
