use async_trait::async_trait;

use crate::application::ports::{ProviderError, StoryboardClient};
use crate::domain::Storyboard;

pub struct SyntheticStoryboardClient;

#[async_trait]
impl StoryboardClient for SyntheticStoryboardClient {
    async fn describe(
        &self,
        _prompt: &str,
        _image_ref: Option<&str>,
    ) -> Result<Storyboard, ProviderError> {
        Ok(Storyboard::new(
            "1) Close-up eyes. 2) Playful zoom. 3) CTA card",
            Some(vec!["#f8d9d6".to_string(), "#6c63ff".to_string()]),
        ))
    }
}
