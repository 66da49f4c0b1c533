use std::fmt;
use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;

const DEFAULT_MODELS: [&str; 3] = [
    "openai/gpt-4o-mini",
    "anthropic/claude-3-haiku-20240307",
    "google/gemma-2-9b-it",
];

/// Runtime environment, selecting `appsettings.{env}.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Test,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Test => "test",
            Environment::Prod => "prod",
        }
    }

    pub fn from_env() -> Result<Self, String> {
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" | "dev" => Ok(Self::Local),
            "test" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Prod),
            other => Err(format!(
                "Invalid environment: {}. Expected: local, test, or prod",
                other
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub providers: ProviderSettings,
    pub storage: StorageSettings,
    pub render: RenderSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers the optional environment file under `APP_`-prefixed variables,
    /// e.g. `APP_PROVIDERS__DEGRADED_MODE=true`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("providers.openrouter.models")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub api_prefix: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            api_prefix: "/api".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Serve every provider from its synthetic adapter; no network calls.
    pub degraded_mode: bool,
    pub request_timeout_secs: u64,
    pub openrouter: OpenRouterSettings,
    pub gemini: GeminiSettings,
    pub elevenlabs: ElevenLabsSettings,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            degraded_mode: false,
            request_timeout_secs: 60,
            openrouter: OpenRouterSettings::default(),
            gemini: GeminiSettings::default(),
            elevenlabs: ElevenLabsSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenRouterSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub models: Vec<String>,
}

impl Default for OpenRouterSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://openrouter.ai/api/v1".to_string(),
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ElevenLabsSettings {
    pub api_key: Option<String>,
    pub voice_id: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ElevenLabsSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            voice_id: "Rachel".to_string(),
            base_url: "https://api.elevenlabs.io/v1".to_string(),
            timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub bucket: Option<String>,
    pub region: String,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub endpoint: Option<String>,
    pub public_base_url: Option<String>,
    pub local_path: PathBuf,
    pub max_upload_bytes: u64,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            bucket: None,
            region: "auto".to_string(),
            access_key: None,
            secret_key: None,
            endpoint: None,
            public_base_url: None,
            local_path: std::env::temp_dir().join("adoptify"),
            max_upload_bytes: 256 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub ffmpeg_binary: String,
    pub tmp_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub seconds_per_slide: u32,
    pub wrap_width: usize,
    pub worker_pool_size: usize,
    pub audio_fetch_timeout_secs: u64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            ffmpeg_binary: "ffmpeg".to_string(),
            tmp_dir: std::env::temp_dir().join("adoptify").join("render"),
            width: 720,
            height: 1280,
            fps: 30,
            seconds_per_slide: 3,
            wrap_width: 32,
            worker_pool_size: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(2),
            audio_fetch_timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json: bool,
}

/// Treats a blank key the same as a missing one.
pub fn present_key(key: &Option<String>) -> Option<&str> {
    key.as_deref().map(str::trim).filter(|k| !k.is_empty())
}
