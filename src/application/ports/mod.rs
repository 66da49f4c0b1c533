mod audio_muxer;
mod content_store;
mod provider_error;
mod script_client;
mod storyboard_client;
mod video_renderer;
mod voice_synthesizer;

pub use audio_muxer::{AudioMuxer, MuxError, MuxOutcome};
pub use content_store::{ContentStore, ContentStoreError, check_size};
pub use provider_error::ProviderError;
pub use script_client::{ScriptClient, ScriptCompletion};
pub use storyboard_client::StoryboardClient;
pub use video_renderer::{RenderError, VideoRenderer};
pub use voice_synthesizer::VoiceSynthesizer;
