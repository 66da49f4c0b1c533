use std::path::PathBuf;
use std::time::Duration;

use uuid::Uuid;

use crate::application::ports::MuxError;
use crate::domain::AudioRef;

/// Materializes an audio reference as a private temp file.
///
/// Nothing is written unless the source was read in full.
pub struct AudioFetcher {
    client: reqwest::Client,
    tmp_dir: PathBuf,
}

impl AudioFetcher {
    pub fn new(tmp_dir: PathBuf, timeout_secs: u64) -> Result<Self, MuxError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| MuxError::Configuration(e.to_string()))?;

        Ok(Self { client, tmp_dir })
    }

    pub async fn fetch(&self, audio: &AudioRef) -> Result<PathBuf, MuxError> {
        tokio::fs::create_dir_all(&self.tmp_dir).await?;
        let target = self
            .tmp_dir
            .join(format!("voice-{}.{}", Uuid::new_v4(), audio.extension()));

        match audio {
            AudioRef::Local(path) => {
                tokio::fs::copy(path, &target).await.map_err(|e| {
                    MuxError::AudioFetchFailed(format!("{}: {}", path.display(), e))
                })?;
            }
            AudioRef::Remote(url) => {
                let bytes = self
                    .client
                    .get(url)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| MuxError::AudioFetchFailed(format!("{}: {}", url, e)))?
                    .bytes()
                    .await
                    .map_err(|e| MuxError::AudioFetchFailed(format!("{}: {}", url, e)))?;
                tokio::fs::write(&target, &bytes).await?;
            }
        }

        tracing::debug!(source = %audio, path = %target.display(), "Audio fetched");
        Ok(target)
    }
}
