mod error;
mod health;
mod ingest;
mod media;
mod pipeline;
mod render;
mod story;
mod voiceover;

pub use error::{ErrorResponse, error_response, pipeline_error_status};
pub use health::health_handler;
pub use ingest::ingest_handler;
pub use media::media_handler;
pub use pipeline::pipeline_handler;
pub use render::render_handler;
pub use story::story_handler;
pub use voiceover::voiceover_handler;
