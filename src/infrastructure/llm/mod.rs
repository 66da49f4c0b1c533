mod gemini_storyboard_client;
mod openrouter_script_client;
mod provider_factory;
mod synthetic_script_client;
mod synthetic_storyboard_client;

pub use gemini_storyboard_client::GeminiStoryboardClient;
pub use openrouter_script_client::OpenRouterScriptClient;
pub use provider_factory::ProviderFactory;
pub use synthetic_script_client::{SYNTHETIC_SCRIPT_COST_USD, SyntheticScriptClient};
pub use synthetic_storyboard_client::SyntheticStoryboardClient;
