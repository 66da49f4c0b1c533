mod audio_format;
mod audio_ref;
mod pet_profile;
mod render_artifact;
mod script_candidate;
mod script_prompt;
pub mod story_copy;
mod stored_asset;
mod storyboard;
mod voice_track;

pub use audio_format::AudioFormat;
pub use audio_ref::AudioRef;
pub use pet_profile::PetProfile;
pub use render_artifact::RenderArtifact;
pub use script_candidate::{RankedScript, ScriptCandidate};
pub use script_prompt::ScriptPrompt;
pub use story_copy::{CaptionDeck, StoryCopy};
pub use stored_asset::{AssetId, Checksum, StoredAsset};
pub use storyboard::Storyboard;
pub use voice_track::VoiceTrack;
