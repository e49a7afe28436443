use thiserror::Error;

/// Errors that can occur while building prompts or generating images
#[derive(Error, Debug)]
pub enum ImageryError {
    /// HTTP request to the image service failed
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The image service answered with an error object
    #[error("Image API error ({code}): {message}")]
    ApiError { code: i64, message: String },

    /// The response contained no image part
    #[error("No image was generated in the response")]
    NoImageGenerated,

    /// Inline image payload was not valid base64
    #[error("Failed to decode image data: {0}")]
    DecodeError(#[from] base64::DecodeError),

    /// No usable API key in configuration or environment
    #[error("GOOGLE_API_KEY not found in config or environment")]
    MissingApiKey,

    /// Recipe JSON could not be parsed
    #[error("Failed to parse recipe: {0}")]
    RecipeParseError(#[from] serde_json::Error),

    /// Reading a recipe or writing an image failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
