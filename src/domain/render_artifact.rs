use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderArtifact {
    pub local_path: PathBuf,
    pub has_audio: bool,
    pub frame_count: u64,
}

impl RenderArtifact {
    pub fn silent(local_path: PathBuf, frame_count: u64) -> Self {
        Self {
            local_path,
            has_audio: false,
            frame_count,
        }
    }

    /// The muxed file that supersedes this silent track.
    pub fn with_audio(&self, merged_path: PathBuf) -> Self {
        Self {
            local_path: merged_path,
            has_audio: true,
            frame_count: self.frame_count,
        }
    }

    pub fn suffix(&self) -> String {
        self.local_path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default()
    }
}
