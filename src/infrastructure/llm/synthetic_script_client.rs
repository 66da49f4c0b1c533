use async_trait::async_trait;

use crate::application::ports::{ProviderError, ScriptClient, ScriptCompletion};
use crate::domain::PetProfile;

pub const SYNTHETIC_SCRIPT_COST_USD: f64 = 0.0004;

/// Offline stand-in: a fixed script per model, no network.
pub struct SyntheticScriptClient;

#[async_trait]
impl ScriptClient for SyntheticScriptClient {
    async fn complete_script(
        &self,
        model: &str,
        profile: &PetProfile,
    ) -> Result<ScriptCompletion, ProviderError> {
        let content = format!(
            "[mock:{}] Meet {}, the cuddle-forward hero looking for a couch. \
             Hook: 'Buffalo, your new hiking buddy is waiting!'. Story beats, CTA, hashtags...",
            model, profile.pet_name
        );

        Ok(ScriptCompletion {
            content,
            cost_usd: SYNTHETIC_SCRIPT_COST_USD,
        })
    }
}
