use crate::domain::{RankedScript, ScriptCandidate};

/// Cheapest candidate wins, then the fastest, then the earliest in input order.
pub struct ScriptRanker;

impl ScriptRanker {
    pub fn rank(candidates: &[ScriptCandidate]) -> Result<RankedScript, RankError> {
        candidates
            .iter()
            .min_by(|a, b| a.cmp_by_cost_then_latency(b))
            .cloned()
            .map(RankedScript::new)
            .ok_or(RankError::EmptyCandidateSet)
    }

    /// Stable sort into ranking order.
    pub fn sort(candidates: &mut [ScriptCandidate]) {
        candidates.sort_by(|a, b| a.cmp_by_cost_then_latency(b));
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RankError {
    #[error("no script candidates to rank")]
    EmptyCandidateSet,
}
