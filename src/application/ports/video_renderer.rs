use async_trait::async_trait;

use crate::domain::RenderArtifact;

#[async_trait]
pub trait VideoRenderer: Send + Sync {
    /// Renders one slide per caption into a silent video track.
    async fn render(&self, title: &str, captions: &[String]) -> Result<RenderArtifact, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("frame encoding failed: {0}")]
    Encoding(String),
    #[error("worker pool unavailable: {0}")]
    WorkerPool(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
