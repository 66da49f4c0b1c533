#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("timed out after {0}s")]
    Timeout(u64),
    #[error("client configuration: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProviderError {
    /// Maps a transport error, keeping timeouts distinguishable.
    pub fn from_reqwest(error: reqwest::Error, timeout_secs: u64) -> Self {
        if error.is_timeout() {
            ProviderError::Timeout(timeout_secs)
        } else {
            ProviderError::ApiRequestFailed(error.to_string())
        }
    }
}
