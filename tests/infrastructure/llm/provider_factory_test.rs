use adoptify::application::ports::{ScriptClient, StoryboardClient};
use adoptify::domain::PetProfile;
use adoptify::infrastructure::llm::{ProviderFactory, SYNTHETIC_SCRIPT_COST_USD};
use adoptify::presentation::config::ProviderSettings;

use crate::helpers::closed_port;

async fn unreachable_settings() -> ProviderSettings {
    let port = closed_port().await;
    let mut settings = ProviderSettings::default();
    settings.request_timeout_secs = 2;
    settings.openrouter.base_url = format!("http://127.0.0.1:{port}");
    settings.gemini.base_url = format!("http://127.0.0.1:{port}");
    settings
}

fn profile() -> PetProfile {
    PetProfile::new("Pip", "Small and brave", vec![])
}

#[tokio::test]
async fn given_degraded_mode_with_keys_when_building_then_synthetic_clients_are_used() {
    let mut settings = unreachable_settings().await;
    settings.degraded_mode = true;
    settings.openrouter.api_key = Some("real-key".to_string());
    settings.gemini.api_key = Some("real-key".to_string());

    let script = ProviderFactory::script_client(&settings)
        .unwrap()
        .complete_script("m", &profile())
        .await
        .unwrap();
    let storyboard = ProviderFactory::storyboard_client(&settings)
        .unwrap()
        .describe("prompt", None)
        .await
        .unwrap();

    assert_eq!(script.cost_usd, SYNTHETIC_SCRIPT_COST_USD);
    assert!(storyboard.palette.is_some());
}

#[tokio::test]
async fn given_blank_key_when_building_then_synthetic_client_is_used() {
    let mut settings = unreachable_settings().await;
    settings.openrouter.api_key = Some("   ".to_string());

    let script = ProviderFactory::script_client(&settings)
        .unwrap()
        .complete_script("m", &profile())
        .await
        .unwrap();

    assert!(script.content.contains("Pip"));
}

#[tokio::test]
async fn given_key_and_live_mode_when_building_then_real_client_calls_the_network() {
    let mut settings = unreachable_settings().await;
    settings.gemini.api_key = Some("real-key".to_string());

    let result = ProviderFactory::storyboard_client(&settings)
        .unwrap()
        .describe("prompt", None)
        .await;

    assert!(result.is_err());
}
