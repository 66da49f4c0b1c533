use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;
use serde_json::json;

use crate::application::ports::{ProviderError, StoryboardClient};
use crate::domain::Storyboard;

const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Vision-capable storyboard call against the Generative Language API.
///
/// The pet photo travels inline: `data:` URIs are forwarded as-is, `http(s)`
/// references are downloaded and base64-encoded first.
pub struct GeminiStoryboardClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout_secs: u64,
}

impl GeminiStoryboardClient {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        timeout_secs: u64,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ProviderError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    async fn inline_image(&self, image_ref: &str) -> Result<InlineImage, ProviderError> {
        let image_ref = image_ref.trim();

        if let Some(rest) = image_ref.strip_prefix("data:") {
            let (meta, data) = rest.split_once(',').ok_or_else(|| {
                ProviderError::InvalidResponse("malformed data URI for image".to_string())
            })?;
            let mime_type = meta.strip_suffix(";base64").ok_or_else(|| {
                ProviderError::InvalidResponse("image data URI must be base64".to_string())
            })?;
            return Ok(InlineImage {
                mime_type: non_empty_mime(mime_type),
                data: data.to_string(),
            });
        }

        if !(image_ref.starts_with("http://") || image_ref.starts_with("https://")) {
            return Err(ProviderError::ApiRequestFailed(format!(
                "unsupported image reference: {}",
                image_ref
            )));
        }

        let response = self
            .client
            .get(image_ref)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ProviderError::from_reqwest(e, self.timeout_secs))?;

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string())
            .filter(|v| v.starts_with("image/"))
            .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string());

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, self.timeout_secs))?;

        tracing::debug!(bytes = bytes.len(), mime_type = %mime_type, "Storyboard image fetched");

        Ok(InlineImage {
            mime_type,
            data: general_purpose::STANDARD.encode(&bytes),
        })
    }
}

struct InlineImage {
    mime_type: String,
    data: String,
}

fn non_empty_mime(mime_type: &str) -> String {
    if mime_type.trim().is_empty() {
        DEFAULT_IMAGE_MIME.to_string()
    } else {
        mime_type.trim().to_string()
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

#[async_trait]
impl StoryboardClient for GeminiStoryboardClient {
    async fn describe(
        &self,
        prompt: &str,
        image_ref: Option<&str>,
    ) -> Result<Storyboard, ProviderError> {
        let mut parts = vec![json!({ "text": prompt })];
        if let Some(image_ref) = image_ref {
            let image = self.inline_image(image_ref).await?;
            parts.push(json!({
                "inline_data": { "mime_type": image.mime_type, "data": image.data }
            }));
        }
        let body = json!({ "contents": [{ "parts": parts }] });

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );

        tracing::debug!(model = %self.model, with_image = image_ref.is_some(), "Requesting storyboard");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, self.timeout_secs))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ProviderError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let description = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| ProviderError::InvalidResponse("no candidates returned".to_string()))?;

        Ok(Storyboard::new(description, None))
    }
}
