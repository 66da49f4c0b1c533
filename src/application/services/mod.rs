mod pipeline_orchestrator;
mod script_provider;
mod script_ranker;

pub use pipeline_orchestrator::{
    PipelineError, PipelineOrchestrator, PipelineRequest, PipelineResult, RenderRequest,
    RenderResult, StoryRequest, StoryResult, VoiceoverRequest, VoiceoverResult,
};
pub use script_provider::ScriptProvider;
pub use script_ranker::{RankError, ScriptRanker};
