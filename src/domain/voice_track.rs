use std::path::PathBuf;

use super::AudioFormat;

/// Synthesized narration persisted as a temp file.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceTrack {
    pub local_path: PathBuf,
    pub format: AudioFormat,
    pub duration_seconds: Option<f64>,
}
