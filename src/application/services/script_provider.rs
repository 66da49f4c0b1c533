use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;

use crate::application::ports::{ProviderError, ScriptClient};
use crate::domain::{PetProfile, ScriptCandidate};

/// Scatter/gather over one script call per model.
///
/// Every call is settled before returning; a failure or timeout drops only
/// that model's candidate. Output keeps model-list order for the survivors.
pub struct ScriptProvider {
    client: Arc<dyn ScriptClient>,
    call_timeout: Duration,
}

impl ScriptProvider {
    pub fn new(client: Arc<dyn ScriptClient>, call_timeout: Duration) -> Self {
        Self {
            client,
            call_timeout,
        }
    }

    pub async fn generate(&self, profile: &PetProfile, models: &[String]) -> Vec<ScriptCandidate> {
        let calls = models.iter().map(|model| self.generate_one(model, profile));
        let settled = join_all(calls).await;

        let mut candidates = Vec::with_capacity(settled.len());
        for (model, result) in models.iter().zip(settled) {
            match result {
                Ok(candidate) => {
                    tracing::debug!(
                        model = %model,
                        latency_ms = candidate.latency_ms,
                        cost_usd = candidate.cost_usd,
                        "Script candidate received"
                    );
                    candidates.push(candidate);
                }
                Err(e) => {
                    tracing::warn!(model = %model, error = %e, "Script provider call failed");
                }
            }
        }

        tracing::info!(
            requested = models.len(),
            received = candidates.len(),
            "Script fan-out settled"
        );

        candidates
    }

    async fn generate_one(
        &self,
        model: &str,
        profile: &PetProfile,
    ) -> Result<ScriptCandidate, ProviderError> {
        let started = Instant::now();
        let completion = tokio::time::timeout(
            self.call_timeout,
            self.client.complete_script(model, profile),
        )
        .await
        .map_err(|_| ProviderError::Timeout(self.call_timeout.as_secs()))??;

        let latency_ms = started.elapsed().as_millis() as u64;
        Ok(ScriptCandidate::new(
            model,
            latency_ms,
            completion.cost_usd,
            completion.content,
        ))
    }
}
