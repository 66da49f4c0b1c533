use async_trait::async_trait;

use super::ProviderError;
use crate::domain::PetProfile;

/// Payload of one script completion; latency is measured by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptCompletion {
    pub content: String,
    pub cost_usd: f64,
}

#[async_trait]
pub trait ScriptClient: Send + Sync {
    async fn complete_script(
        &self,
        model: &str,
        profile: &PetProfile,
    ) -> Result<ScriptCompletion, ProviderError>;
}
