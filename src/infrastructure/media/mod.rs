mod audio_fetcher;
pub mod avi_writer;
mod ffmpeg_locator;
mod ffmpeg_muxer;
mod frame_painter;
mod slideshow_renderer;

pub use audio_fetcher::AudioFetcher;
pub use ffmpeg_locator::locate_ffmpeg;
pub use ffmpeg_muxer::FfmpegAudioMuxer;
pub use frame_painter::{paint_slide, wrap_caption};
pub use slideshow_renderer::{SlideshowConfig, SlideshowRenderer, encode_slide};
