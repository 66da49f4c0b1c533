use async_trait::async_trait;

use super::ProviderError;
use crate::domain::Storyboard;

#[async_trait]
pub trait StoryboardClient: Send + Sync {
    async fn describe(
        &self,
        prompt: &str,
        image_ref: Option<&str>,
    ) -> Result<Storyboard, ProviderError>;
}
