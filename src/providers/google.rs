use crate::config::ProviderConfig;
use crate::providers::{GeneratedImage, ImageOptions, ImageProvider};
use crate::ImageryError;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, info};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const PLACEHOLDER_API_KEY: &str = "your_google_api_key_here";

pub struct GoogleImageProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GoogleImageProvider {
    /// Create a new Google Gemini image provider from configuration
    pub fn new(config: &ProviderConfig, timeout: Duration) -> Result<Self, ImageryError> {
        // Try config first, then fall back to environment variable
        let api_key = resolve_api_key(
            config.api_key.clone(),
            std::env::var("GOOGLE_API_KEY").ok(),
        )?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(GoogleImageProvider {
            client,
            api_key,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: config.model.clone(),
        })
    }
}

/// First usable key of `configured` and `from_env`. Empty keys and the
/// `.env` template placeholder are skipped.
fn resolve_api_key(
    configured: Option<String>,
    from_env: Option<String>,
) -> Result<String, ImageryError> {
    let usable = |key: &String| !key.is_empty() && key != PLACEHOLDER_API_KEY;
    configured
        .filter(usable)
        .or_else(|| from_env.filter(usable))
        .ok_or(ImageryError::MissingApiKey)
}

#[async_trait]
impl ImageProvider for GoogleImageProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(
        &self,
        prompt: &str,
        options: &ImageOptions,
    ) -> Result<GeneratedImage, ImageryError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&json!({
                "contents": [{
                    "parts": [{ "text": prompt }]
                }],
                "generationConfig": {
                    "responseModalities": ["TEXT", "IMAGE"],
                    "imageConfig": {
                        "aspectRatio": options.aspect_ratio.as_str(),
                        "imageSize": options.image_size.as_str()
                    }
                }
            }))
            .send()
            .await?;

        let response_body: Value = response.json().await?;

        // Check for API error response
        if let Some(error) = response_body.get("error") {
            return Err(ImageryError::ApiError {
                code: error["code"].as_i64().unwrap_or(0),
                message: error["message"]
                    .as_str()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        parse_image_response(&response_body)
    }
}

/// Pull the first inline image and any text notes out of a generateContent response.
fn parse_image_response(body: &Value) -> Result<GeneratedImage, ImageryError> {
    let parts = body["candidates"][0]["content"]["parts"]
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut notes = Vec::new();
    let mut image = None;

    for part in parts {
        if let Some(text) = part["text"].as_str() {
            debug!("Model note: {}", text);
            notes.push(text.to_string());
        } else if let Some(data) = part["inlineData"]["data"].as_str() {
            if image.is_none() {
                let mime_type = part["inlineData"]["mimeType"]
                    .as_str()
                    .unwrap_or("image/png")
                    .to_string();
                image = Some((STANDARD.decode(data)?, mime_type));
            }
        }
    }

    let (bytes, mime_type) = image.ok_or(ImageryError::NoImageGenerated)?;
    info!("Received {} bytes of {}", bytes.len(), mime_type);

    Ok(GeneratedImage {
        bytes,
        mime_type,
        notes,
    })
}
