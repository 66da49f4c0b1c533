use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::{AudioRef, RenderArtifact};

/// Terminal states of a mux attempt that still yield a deliverable video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MuxOutcome {
    ToolchainMissing(RenderArtifact),
    Muxed(RenderArtifact),
    Failed {
        artifact: RenderArtifact,
        exit_code: Option<i32>,
        stderr: String,
    },
}

impl MuxOutcome {
    pub fn artifact(&self) -> &RenderArtifact {
        match self {
            MuxOutcome::ToolchainMissing(artifact) | MuxOutcome::Muxed(artifact) => artifact,
            MuxOutcome::Failed { artifact, .. } => artifact,
        }
    }

    pub fn into_artifact(self) -> RenderArtifact {
        match self {
            MuxOutcome::ToolchainMissing(artifact) | MuxOutcome::Muxed(artifact) => artifact,
            MuxOutcome::Failed { artifact, .. } => artifact,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MuxOutcome::ToolchainMissing(_) => "toolchain_missing",
            MuxOutcome::Muxed(_) => "muxed",
            MuxOutcome::Failed { .. } => "mux_failed",
        }
    }
}

#[async_trait]
pub trait AudioMuxer: Send + Sync {
    /// Produces a local temp copy of the referenced audio.
    async fn fetch_audio(&self, audio: &AudioRef) -> Result<PathBuf, MuxError>;

    async fn mux_local(
        &self,
        video: RenderArtifact,
        audio_path: &Path,
    ) -> Result<MuxOutcome, MuxError>;

    /// Fetch then mux. A bad audio reference fails before any tool runs; the
    /// fetched copy is removed once the mux attempt settles.
    async fn mux(&self, video: RenderArtifact, audio: &AudioRef) -> Result<MuxOutcome, MuxError> {
        let audio_path = self.fetch_audio(audio).await?;
        let outcome = self.mux_local(video, &audio_path).await;
        let _ = tokio::fs::remove_file(&audio_path).await;
        outcome
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MuxError {
    #[error("audio fetch failed: {0}")]
    AudioFetchFailed(String),
    #[error("client configuration: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
