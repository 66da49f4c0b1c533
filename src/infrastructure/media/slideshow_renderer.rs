use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use tokio::sync::Semaphore;
use uuid::Uuid;

use super::avi_writer::AviWriter;
use super::frame_painter::{paint_slide, wrap_caption};
use crate::application::ports::{RenderError, VideoRenderer};
use crate::domain::RenderArtifact;
use crate::domain::story_copy::DEFAULT_CAPTION;

const JPEG_QUALITY: u8 = 85;

#[derive(Debug, Clone)]
pub struct SlideshowConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub seconds_per_slide: u32,
    pub wrap_width: usize,
    pub tmp_dir: PathBuf,
}

impl SlideshowConfig {
    pub fn frames_per_slide(&self) -> u32 {
        self.fps * self.seconds_per_slide
    }

    fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidInput("frame size must be non-zero".into()));
        }
        if self.fps == 0 || self.seconds_per_slide == 0 {
            return Err(RenderError::InvalidInput(
                "fps and seconds per slide must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Captioned slideshow into a silent MJPEG/AVI track.
///
/// Encoding runs on the blocking pool; at most `worker_pool_size` renders run
/// at once, later ones wait for a permit.
pub struct SlideshowRenderer {
    config: Arc<SlideshowConfig>,
    permits: Arc<Semaphore>,
}

impl SlideshowRenderer {
    pub fn new(config: SlideshowConfig, worker_pool_size: usize) -> Self {
        Self {
            config: Arc::new(config),
            permits: Arc::new(Semaphore::new(worker_pool_size.max(1))),
        }
    }
}

#[async_trait]
impl VideoRenderer for SlideshowRenderer {
    #[tracing::instrument(skip(self, captions), fields(slides = captions.len()))]
    async fn render(&self, title: &str, captions: &[String]) -> Result<RenderArtifact, RenderError> {
        self.config.validate()?;

        let mut slides: Vec<String> = captions
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        if slides.is_empty() {
            slides.push(DEFAULT_CAPTION.to_string());
        }

        tokio::fs::create_dir_all(&self.config.tmp_dir).await?;
        let output = self
            .config
            .tmp_dir
            .join(format!("story-{}.avi", Uuid::new_v4()));

        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|e| RenderError::WorkerPool(e.to_string()))?;

        let config = Arc::clone(&self.config);
        let title = title.to_string();
        let target = output.clone();
        let result = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            encode_slideshow(&config, &title, &slides, &target)
        })
        .await
        .map_err(|e| RenderError::WorkerPool(e.to_string()))?;

        match result {
            Ok(frame_count) => {
                tracing::info!(path = %output.display(), frame_count, "Slideshow rendered");
                Ok(RenderArtifact::silent(output, frame_count))
            }
            Err(e) => {
                let _ = tokio::fs::remove_file(&output).await;
                Err(e)
            }
        }
    }
}

fn encode_slideshow(
    config: &SlideshowConfig,
    title: &str,
    slides: &[String],
    output: &Path,
) -> Result<u64, RenderError> {
    let mut writer = AviWriter::create(output, config.width, config.height, config.fps)?;
    let repeats = config.frames_per_slide();

    for caption in slides {
        let jpeg = encode_slide(config, title, caption)?;
        for _ in 0..repeats {
            writer.write_frame(&jpeg)?;
        }
    }

    let frames = writer.frame_count() as u64;
    writer.finish()?;
    Ok(frames)
}

/// JPEG bytes of one captioned slide, exactly as stored in every frame of it.
pub fn encode_slide(
    config: &SlideshowConfig,
    title: &str,
    caption: &str,
) -> Result<Vec<u8>, RenderError> {
    let lines = wrap_caption(caption, config.wrap_width);
    let frame = paint_slide(config.width, config.height, title, &lines);

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
        .encode_image(&frame)
        .map_err(|e| RenderError::Encoding(e.to_string()))?;
    Ok(jpeg)
}
