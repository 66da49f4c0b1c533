mod settings;

pub use settings::{
    ElevenLabsSettings, Environment, GeminiSettings, LoggingSettings, OpenRouterSettings,
    ProviderSettings, RenderSettings, ServerSettings, Settings, StorageSettings, present_key,
};
