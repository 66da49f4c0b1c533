#![allow(dead_code)]


use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use adoptify::application::services::{PipelineOrchestrator, ScriptProvider};
use adoptify::infrastructure::audio::VoiceSynthesizerFactory;
use adoptify::infrastructure::llm::ProviderFactory;
use adoptify::infrastructure::media::{FfmpegAudioMuxer, SlideshowConfig, SlideshowRenderer};
use adoptify::infrastructure::storage::ContentStoreFactory;
use adoptify::presentation::{AppState, Settings};

pub const TEST_FPS: u32 = 4;
pub const TEST_SECONDS_PER_SLIDE: u32 = 3;

pub fn small_render_config(tmp_dir: &Path) -> SlideshowConfig {
    SlideshowConfig {
        width: 64,
        height: 96,
        fps: TEST_FPS,
        seconds_per_slide: TEST_SECONDS_PER_SLIDE,
        wrap_width: 32,
        tmp_dir: tmp_dir.to_path_buf(),
    }
}

pub fn missing_ffmpeg(root: &Path) -> String {
    root.join("no-such-dir")
        .join("ffmpeg")
        .display()
        .to_string()
}

/// Offline settings rooted in `root`, with a tiny frame size.
pub fn degraded_settings(root: &Path, ffmpeg_binary: &str) -> Settings {
    let mut settings = Settings::default();
    settings.providers.degraded_mode = true;
    settings.providers.openrouter.models = vec!["a".to_string(), "b".to_string()];
    settings.storage.local_path = root.join("store");
    settings.render.tmp_dir = root.join("render");
    settings.render.ffmpeg_binary = ffmpeg_binary.to_string();
    settings.render.width = 64;
    settings.render.height = 96;
    settings.render.fps = TEST_FPS;
    settings.render.seconds_per_slide = TEST_SECONDS_PER_SLIDE;
    settings.render.worker_pool_size = 2;
    settings
}

pub fn build_state(settings: Settings) -> AppState {
    let providers = &settings.providers;
    let render = &settings.render;

    let content_store = ContentStoreFactory::create(&settings.storage).unwrap();
    let renderer = Arc::new(SlideshowRenderer::new(
        SlideshowConfig {
            width: render.width,
            height: render.height,
            fps: render.fps,
            seconds_per_slide: render.seconds_per_slide,
            wrap_width: render.wrap_width,
            tmp_dir: render.tmp_dir.clone(),
        },
        render.worker_pool_size,
    ));
    let muxer = Arc::new(FfmpegAudioMuxer::new(
        render.ffmpeg_binary.clone(),
        render.tmp_dir.clone(),
        5,
    )
    .unwrap());

    let orchestrator = Arc::new(PipelineOrchestrator::new(
        ScriptProvider::new(
            ProviderFactory::script_client(providers).unwrap(),
            Duration::from_secs(5),
        ),
        ProviderFactory::storyboard_client(providers).unwrap(),
        VoiceSynthesizerFactory::create(providers, &render.tmp_dir).unwrap(),
        renderer,
        muxer,
        Arc::clone(&content_store),
        providers.openrouter.models.clone(),
    ));

    AppState {
        orchestrator,
        content_store,
        settings: Arc::new(settings),
    }
}

/// Writes an executable shell script standing in for the muxing binary.
#[cfg(unix)]
pub fn fake_ffmpeg(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join("ffmpeg");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Writes the final argument (the output path) and exits cleanly.
#[cfg(unix)]
pub const FFMPEG_SUCCEEDS: &str = "for last; do :; done\nprintf 'merged' > \"$last\"\nexit 0";

#[cfg(unix)]
pub const FFMPEG_FAILS: &str = "echo 'Invalid data found when processing input' >&2\nexit 1";

pub fn files_with_prefix(dir: &Path, prefix: &str) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with(prefix))
                })
                .collect()
        })
        .unwrap_or_default()
}

/// A local port with nothing listening on it.
pub async fn closed_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}
