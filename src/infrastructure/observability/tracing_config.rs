use crate::presentation::config::{Environment, LoggingSettings};

pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
    pub default_directives: String,
}

impl TracingConfig {
    /// `LOG_FORMAT=json` forces JSON output regardless of settings.
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        let json_from_env = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            environment,
            json_format: logging.json || json_from_env,
            default_directives: "info,adoptify=debug,tower_http=debug".to_string(),
        }
    }
}
