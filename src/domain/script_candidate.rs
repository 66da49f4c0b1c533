use std::cmp::Ordering;

/// One provider's script plus the cost/latency it reported.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptCandidate {
    pub provider_id: String,
    pub latency_ms: u64,
    pub cost_usd: f64,
    pub content: String,
}

impl ScriptCandidate {
    pub fn new(
        provider_id: impl Into<String>,
        latency_ms: u64,
        cost_usd: f64,
        content: impl Into<String>,
    ) -> Self {
        Self {
            provider_id: provider_id.into(),
            latency_ms,
            cost_usd: cost_usd.max(0.0),
            content: content.into(),
        }
    }

    /// Stand-in used when every provider call failed.
    pub fn placeholder(pet_name: &str) -> Self {
        Self::new(
            "placeholder",
            0,
            0.0,
            format!(
                "Meet {pet_name}, a sweet soul waiting for a forever home.\n\
                 Hook: come say hi this weekend\n\
                 #adoptify #adoptdontshop"
            ),
        )
    }

    /// Orders by cost, then latency. Equal keys compare as `Equal`, so stable
    /// sorts keep input order.
    pub fn cmp_by_cost_then_latency(&self, other: &Self) -> Ordering {
        self.cost_usd
            .total_cmp(&other.cost_usd)
            .then(self.latency_ms.cmp(&other.latency_ms))
    }
}

/// The winning candidate of a ranking round.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedScript(ScriptCandidate);

impl RankedScript {
    pub fn new(candidate: ScriptCandidate) -> Self {
        Self(candidate)
    }

    pub fn candidate(&self) -> &ScriptCandidate {
        &self.0
    }

    pub fn content(&self) -> &str {
        &self.0.content
    }

    pub fn into_inner(self) -> ScriptCandidate {
        self.0
    }
}
