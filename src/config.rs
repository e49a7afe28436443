use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::providers::{AspectRatio, ImageOptions, ImageSize};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct ImageryConfig {
    /// Image generation provider settings
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Retry behavior for provider calls
    #[serde(default)]
    pub retry: RetryConfig,
    /// Directory generated images are written to
    #[serde(default)]
    pub output_dir: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ImageryConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            retry: RetryConfig::default(),
            output_dir: None,
            timeout: default_timeout(),
        }
    }
}

/// Configuration for the image generation provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Model identifier (e.g., "gemini-3-pro-image-preview")
    #[serde(default = "default_model")]
    pub model: String,
    /// API key for authentication (can also be set via GOOGLE_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
    /// Aspect ratio of generated images
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    /// Resolution class of generated images
    #[serde(default)]
    pub image_size: ImageSize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: None,
            base_url: None,
            aspect_ratio: AspectRatio::default(),
            image_size: ImageSize::default(),
        }
    }
}

impl ProviderConfig {
    pub fn image_options(&self) -> ImageOptions {
        ImageOptions {
            aspect_ratio: self.aspect_ratio,
            image_size: self.image_size,
        }
    }
}

/// Configuration for retrying failed generations
#[derive(Debug, Deserialize, Clone)]
pub struct RetryConfig {
    /// Number of attempts per image before giving up
    #[serde(default = "default_retry_attempts")]
    pub attempts: u32,
    /// Delay between retries in milliseconds, grows linearly with each attempt
    #[serde(default = "default_retry_delay_ms")]
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            attempts: default_retry_attempts(),
            delay_ms: default_retry_delay_ms(),
        }
    }
}

// Default value functions
fn default_model() -> String {
    "gemini-3-pro-image-preview".to_string()
}

fn default_retry_attempts() -> u32 {
    1
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_timeout() -> u64 {
    120
}

impl ImageryConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COOKBOOK__ prefix
    /// 2. cookbook.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COOKBOOK__PROVIDER__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ImageryConfig::load`] for the lookup order.
pub fn load_config() -> Result<ImageryConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("cookbook").required(false))
        // Use double underscore for nested: COOKBOOK__PROVIDER__MODEL
        .add_source(
            Environment::with_prefix("COOKBOOK")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
