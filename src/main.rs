use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use adoptify::application::services::{PipelineOrchestrator, ScriptProvider};
use adoptify::infrastructure::audio::VoiceSynthesizerFactory;
use adoptify::infrastructure::llm::ProviderFactory;
use adoptify::infrastructure::media::{FfmpegAudioMuxer, SlideshowConfig, SlideshowRenderer};
use adoptify::infrastructure::observability::{TracingConfig, init_tracing};
use adoptify::infrastructure::storage::ContentStoreFactory;
use adoptify::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        &TracingConfig::from_settings(environment, &settings.logging),
        settings.server.port,
    );

    if settings.providers.degraded_mode {
        tracing::warn!("Degraded mode enabled; all providers return synthetic payloads");
    }

    let providers = &settings.providers;
    let render = &settings.render;

    let content_store = ContentStoreFactory::create(&settings.storage)?;

    let script_provider = ScriptProvider::new(
        ProviderFactory::script_client(providers)?,
        Duration::from_secs(providers.request_timeout_secs),
    );

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
        render.audio_fetch_timeout_secs,
    )?);

    let orchestrator = Arc::new(PipelineOrchestrator::new(
        script_provider,
        ProviderFactory::storyboard_client(providers)?,
        VoiceSynthesizerFactory::create(providers, &render.tmp_dir)?,
        renderer,
        muxer,
        Arc::clone(&content_store),
        providers.openrouter.models.clone(),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        orchestrator,
        content_store,
        settings: Arc::new(settings),
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
