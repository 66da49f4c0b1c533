mod audio_probe;
mod elevenlabs_synthesizer;
mod tone_synthesizer;
mod voice_synthesizer_factory;

pub use audio_probe::probe_duration_seconds;
pub use elevenlabs_synthesizer::ElevenLabsSynthesizer;
pub use tone_synthesizer::ToneVoiceSynthesizer;
pub use voice_synthesizer_factory::VoiceSynthesizerFactory;
