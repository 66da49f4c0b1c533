use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use uuid::Uuid;

use super::audio_fetcher::AudioFetcher;
use super::ffmpeg_locator::locate_ffmpeg;
use crate::application::ports::{AudioMuxer, MuxError, MuxOutcome};
use crate::domain::{AudioRef, RenderArtifact};

const STDERR_TAIL_CHARS: usize = 2000;

/// Muxes with an external FFmpeg: video copied, audio transcoded to AAC.
///
/// A missing binary or a failed run degrades to the silent input track;
/// only audio retrieval errors are surfaced.
pub struct FfmpegAudioMuxer {
    fetcher: AudioFetcher,
    ffmpeg_binary: String,
    tmp_dir: PathBuf,
}

impl FfmpegAudioMuxer {
    pub fn new(
        ffmpeg_binary: String,
        tmp_dir: PathBuf,
        audio_fetch_timeout_secs: u64,
    ) -> Result<Self, MuxError> {
        Ok(Self {
            fetcher: AudioFetcher::new(tmp_dir.clone(), audio_fetch_timeout_secs)?,
            ffmpeg_binary,
            tmp_dir,
        })
    }

    fn toolchain_missing(&self, video: RenderArtifact) -> MuxOutcome {
        tracing::warn!(
            binary = %self.ffmpeg_binary,
            "FFmpeg not found; returning silent video"
        );
        MuxOutcome::ToolchainMissing(video)
    }
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let total = text.chars().count();
    text.chars()
        .skip(total.saturating_sub(STDERR_TAIL_CHARS))
        .collect()
}

#[async_trait]
impl AudioMuxer for FfmpegAudioMuxer {
    async fn fetch_audio(&self, audio: &AudioRef) -> Result<PathBuf, MuxError> {
        self.fetcher.fetch(audio).await
    }

    #[tracing::instrument(skip(self, video), fields(video = %video.local_path.display()))]
    async fn mux_local(
        &self,
        video: RenderArtifact,
        audio_path: &Path,
    ) -> Result<MuxOutcome, MuxError> {
        let Some(binary) = locate_ffmpeg(&self.ffmpeg_binary) else {
            return Ok(self.toolchain_missing(video));
        };

        tokio::fs::create_dir_all(&self.tmp_dir).await?;
        let merged = self
            .tmp_dir
            .join(format!("render-{}.mp4", Uuid::new_v4()));

        let run = Command::new(&binary)
            .arg("-y")
            .arg("-i")
            .arg(&video.local_path)
            .arg("-i")
            .arg(audio_path)
            .args(["-c:v", "copy", "-c:a", "aac"])
            .arg(&merged)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        let output = match run {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(self.toolchain_missing(video));
            }
            Err(e) => {
                tracing::error!(binary = %binary.display(), error = %e, "FFmpeg failed to start");
                return Ok(MuxOutcome::Failed {
                    artifact: video,
                    exit_code: None,
                    stderr: e.to_string(),
                });
            }
        };

        let merged_exists = tokio::fs::try_exists(&merged).await.unwrap_or(false);
        if output.status.success() && merged_exists {
            tracing::info!(path = %merged.display(), "Audio muxed");
            if let Err(e) = tokio::fs::remove_file(&video.local_path).await {
                tracing::debug!(error = %e, "Superseded silent track not removed");
            }
            return Ok(MuxOutcome::Muxed(video.with_audio(merged)));
        }

        let stderr = stderr_tail(&output.stderr);
        tracing::error!(
            exit_code = ?output.status.code(),
            merged_exists,
            stderr = %stderr,
            "FFmpeg mux failed; returning silent video"
        );
        if merged_exists {
            let _ = tokio::fs::remove_file(&merged).await;
        }

        Ok(MuxOutcome::Failed {
            artifact: video,
            exit_code: output.status.code(),
            stderr,
        })
    }
}
