mod google;

pub use google::GoogleImageProvider;

use async_trait::async_trait;
use serde::Deserialize;

use crate::ImageryError;

/// Aspect ratios accepted by the image service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum AspectRatio {
    /// 1:1, used for 8x8 inch cookbook pages
    #[default]
    #[serde(rename = "1:1", alias = "square")]
    Square,
    #[serde(rename = "3:4", alias = "portrait")]
    Portrait,
    #[serde(rename = "4:3", alias = "landscape")]
    Landscape,
    #[serde(rename = "9:16", alias = "tall")]
    Tall,
    #[serde(rename = "16:9", alias = "hero")]
    Widescreen,
    #[serde(rename = "21:9", alias = "wide")]
    UltraWide,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Landscape => "4:3",
            AspectRatio::Tall => "9:16",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::UltraWide => "21:9",
        }
    }
}

/// Output resolution class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "1K", alias = "1k")]
    OneK,
    /// High quality for print
    #[default]
    #[serde(rename = "2K", alias = "2k")]
    TwoK,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::OneK => "1K",
            ImageSize::TwoK => "2K",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageOptions {
    pub aspect_ratio: AspectRatio,
    pub image_size: ImageSize,
}

/// Image bytes returned by a provider
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    /// Free-text remarks the model returned alongside the image
    pub notes: Vec<String>,
}

/// Trait for text-to-image services
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Generate a single image for `prompt`
    async fn generate(
        &self,
        prompt: &str,
        options: &ImageOptions,
    ) -> Result<GeneratedImage, ImageryError>;
}
