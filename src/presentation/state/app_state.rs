use std::sync::Arc;

use crate::application::ports::ContentStore;
use crate::application::services::PipelineOrchestrator;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<PipelineOrchestrator>,
    pub content_store: Arc<dyn ContentStore>,
    pub settings: Arc<Settings>,
}
