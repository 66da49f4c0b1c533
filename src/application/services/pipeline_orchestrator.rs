use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::{
    AudioMuxer, ContentStore, ContentStoreError, MuxError, ProviderError, RenderError,
    StoryboardClient, VideoRenderer, VoiceSynthesizer,
};
use crate::domain::{
    AudioFormat, AudioRef, CaptionDeck, PetProfile, RankedScript, RenderArtifact, ScriptCandidate,
    StoredAsset, StoryCopy, Storyboard, VoiceTrack,
};

use super::script_provider::ScriptProvider;
use super::script_ranker::ScriptRanker;

pub struct StoryRequest {
    pub profile: PetProfile,
    pub models: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct StoryResult {
    pub pet_name: String,
    pub script: RankedScript,
    /// All settled candidates in ranking order.
    pub provider_results: Vec<ScriptCandidate>,
    pub copy: StoryCopy,
    pub storyboard: Storyboard,
}

pub struct VoiceoverRequest {
    pub text: String,
    pub voice_id: Option<String>,
    pub format: AudioFormat,
}

#[derive(Debug, Clone)]
pub struct VoiceoverResult {
    pub track: VoiceTrack,
    pub asset: StoredAsset,
}

pub struct RenderRequest {
    pub pet_name: String,
    pub captions: Vec<String>,
    pub audio_ref: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RenderResult {
    pub artifact: RenderArtifact,
    pub asset: StoredAsset,
    pub mux_outcome: Option<&'static str>,
    pub rendered_at: DateTime<Utc>,
}

pub struct PipelineRequest {
    pub profile: PetProfile,
    pub models: Option<Vec<String>>,
    pub voice_id: Option<String>,
    pub format: AudioFormat,
}

#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub story: StoryResult,
    pub voiceover: VoiceoverResult,
    pub render: RenderResult,
}

/// Sequences the provider calls, render, mux and upload for one request.
///
/// Holds only shared, stateless clients; every intermediate value is owned by
/// the call that produced it.
pub struct PipelineOrchestrator {
    script_provider: ScriptProvider,
    storyboard_client: Arc<dyn StoryboardClient>,
    voice_synthesizer: Arc<dyn VoiceSynthesizer>,
    renderer: Arc<dyn VideoRenderer>,
    muxer: Arc<dyn AudioMuxer>,
    content_store: Arc<dyn ContentStore>,
    default_models: Vec<String>,
}

impl PipelineOrchestrator {
    pub fn new(
        script_provider: ScriptProvider,
        storyboard_client: Arc<dyn StoryboardClient>,
        voice_synthesizer: Arc<dyn VoiceSynthesizer>,
        renderer: Arc<dyn VideoRenderer>,
        muxer: Arc<dyn AudioMuxer>,
        content_store: Arc<dyn ContentStore>,
        default_models: Vec<String>,
    ) -> Self {
        Self {
            script_provider,
            storyboard_client,
            voice_synthesizer,
            renderer,
            muxer,
            content_store,
            default_models,
        }
    }

    #[tracing::instrument(skip(self, request), fields(pet_name = %request.profile.pet_name))]
    pub async fn generate_story(&self, request: &StoryRequest) -> Result<StoryResult, PipelineError> {
        let profile = &request.profile;
        let models = match &request.models {
            Some(models) if !models.is_empty() => models.as_slice(),
            _ => self.default_models.as_slice(),
        };

        let storyboard_prompt = Storyboard::prompt_for(&profile.pet_name);
        let (mut candidates, storyboard) = tokio::join!(
            self.script_provider.generate(profile, models),
            self.storyboard_client
                .describe(&storyboard_prompt, profile.image_url.as_deref()),
        );

        if candidates.is_empty() {
            tracing::warn!(
                models = models.len(),
                "All script providers failed; using placeholder script"
            );
            candidates.push(ScriptCandidate::placeholder(&profile.pet_name));
        }

        ScriptRanker::sort(&mut candidates);
        let script = ScriptRanker::rank(&candidates)
            .unwrap_or_else(|_| RankedScript::new(ScriptCandidate::placeholder(&profile.pet_name)));

        let storyboard = storyboard.map_err(PipelineError::Storyboard)?;
        let copy = StoryCopy::extract(script.content());

        tracing::info!(
            provider = %script.candidate().provider_id,
            cost_usd = script.candidate().cost_usd,
            latency_ms = script.candidate().latency_ms,
            captions = copy.captions.len(),
            "Script ranked"
        );

        Ok(StoryResult {
            pet_name: profile.pet_name.clone(),
            script,
            provider_results: candidates,
            copy,
            storyboard,
        })
    }

    #[tracing::instrument(skip(self, request), fields(format = %request.format))]
    pub async fn create_voiceover(
        &self,
        request: &VoiceoverRequest,
    ) -> Result<VoiceoverResult, PipelineError> {
        let track = self
            .voice_synthesizer
            .synthesize(&request.text, request.voice_id.as_deref(), request.format)
            .await
            .map_err(PipelineError::Voice)?;

        let asset = self.content_store.upload_file(&track.local_path).await?;

        tracing::info!(asset_id = %asset.asset_id, "Voiceover stored");
        Ok(VoiceoverResult { track, asset })
    }

    #[tracing::instrument(skip(self, request), fields(pet_name = %request.pet_name))]
    pub async fn render(&self, request: &RenderRequest) -> Result<RenderResult, PipelineError> {
        let deck = CaptionDeck::from_captions(request.captions.clone());

        let audio = request
            .audio_ref
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .map(|r| r.parse::<AudioRef>().map_err(MuxError::AudioFetchFailed))
            .transpose()?;

        let (artifact, mux_outcome) = match audio {
            None => {
                let artifact = self
                    .renderer
                    .render(&request.pet_name, deck.captions())
                    .await?;
                (artifact, None)
            }
            Some(audio) => {
                // Both sides settle before either result is used, so a failed
                // fetch never leaves a finished render behind.
                let (video, fetched) = tokio::join!(
                    self.renderer.render(&request.pet_name, deck.captions()),
                    self.muxer.fetch_audio(&audio),
                );
                let (video, audio_path) = match (video, fetched) {
                    (Ok(video), Ok(path)) => (video, path),
                    (video, Err(e)) => {
                        if let Ok(video) = video {
                            discard(&video.local_path).await;
                        }
                        return Err(e.into());
                    }
                    (Err(e), Ok(path)) => {
                        discard(&path).await;
                        return Err(e.into());
                    }
                };

                let silent_path = video.local_path.clone();
                let outcome = self.muxer.mux_local(video, &audio_path).await;
                discard(&audio_path).await;
                let outcome = match outcome {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        discard(&silent_path).await;
                        return Err(e.into());
                    }
                };
                let label = outcome.as_str();
                (outcome.into_artifact(), Some(label))
            }
        };

        let uploaded = self.content_store.upload_file(&artifact.local_path).await;
        discard(&artifact.local_path).await;
        let asset = uploaded?;

        tracing::info!(
            asset_id = %asset.asset_id,
            has_audio = artifact.has_audio,
            frames = artifact.frame_count,
            "Render stored"
        );

        Ok(RenderResult {
            artifact,
            asset,
            mux_outcome,
            rendered_at: Utc::now(),
        })
    }

    /// Story, then narration of the winning script, then the captioned render
    /// muxed with that narration.
    pub async fn run(&self, request: &PipelineRequest) -> Result<PipelineResult, PipelineError> {
        let story = self
            .generate_story(&StoryRequest {
                profile: request.profile.clone(),
                models: request.models.clone(),
            })
            .await?;

        let voiceover = self
            .create_voiceover(&VoiceoverRequest {
                text: story.script.content().to_string(),
                voice_id: request.voice_id.clone(),
                format: request.format,
            })
            .await?;

        let render = self
            .render(&RenderRequest {
                pet_name: story.pet_name.clone(),
                captions: story.copy.captions.captions().to_vec(),
                audio_ref: Some(
                    AudioRef::Local(voiceover.track.local_path.clone()).to_string(),
                ),
            })
            .await?;

        Ok(PipelineResult {
            story,
            voiceover,
            render,
        })
    }
}

/// Removes an intermediate file; a file that is already gone is fine.
async fn discard(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove temp file");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("storyboard: {0}")]
    Storyboard(ProviderError),
    #[error("voice synthesis: {0}")]
    Voice(ProviderError),
    #[error("render: {0}")]
    Render(#[from] RenderError),
    #[error("audio: {0}")]
    AudioFetch(MuxError),
    #[error("mux: {0}")]
    Mux(MuxError),
    #[error("storage: {0}")]
    Storage(#[from] ContentStoreError),
}

/// A bad audio reference is the caller's fault; local I/O or client setup is ours.
impl From<MuxError> for PipelineError {
    fn from(error: MuxError) -> Self {
        match error {
            MuxError::AudioFetchFailed(_) => PipelineError::AudioFetch(error),
            MuxError::Io(_) | MuxError::Configuration(_) => PipelineError::Mux(error),
        }
    }
}
