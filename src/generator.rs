use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info, warn};
use tokio::time::sleep;

use crate::builder::DishImageRequest;
use crate::config::{ImageryConfig, RetryConfig};
use crate::model::CookbookRecipe;
use crate::prompt::{
    render_custom_prompt, render_dish_prompt, render_ingredients_prompt, safe_file_stem,
};
use crate::providers::{GeneratedImage, GoogleImageProvider, ImageOptions, ImageProvider};
use crate::ImageryError;

const DEFAULT_OUTPUT_DIR: &str = "data/images/generated";
const PROMPT_PREVIEW_CHARS: usize = 100;

/// Paths of the images produced for one recipe
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeImages {
    pub dish: Option<PathBuf>,
    pub ingredients: Option<PathBuf>,
}

impl RecipeImages {
    pub fn len(&self) -> usize {
        self.dish.iter().count() + self.ingredients.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generates cookbook page images and writes them to disk
pub struct CookbookImageGenerator {
    provider: Box<dyn ImageProvider>,
    output_dir: PathBuf,
    options: ImageOptions,
    retry: RetryConfig,
}

impl CookbookImageGenerator {
    /// Create a generator backed by Google Gemini from configuration
    pub fn new(config: &ImageryConfig) -> Result<Self, ImageryError> {
        let provider =
            GoogleImageProvider::new(&config.provider, Duration::from_secs(config.timeout))?;
        let output_dir = config
            .output_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

        Ok(Self::with_provider(Box::new(provider), output_dir)
            .with_options(config.provider.image_options())
            .with_retry(config.retry.clone()))
    }

    /// Create a generator around any provider, with square 2K images and no retries
    pub fn with_provider(provider: Box<dyn ImageProvider>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            output_dir: output_dir.into(),
            options: ImageOptions::default(),
            retry: RetryConfig {
                attempts: 1,
                delay_ms: 0,
            },
        }
    }

    pub fn with_options(mut self, options: ImageOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Generate a finished-dish image whose colors follow its ingredients
    pub async fn generate_dish_image(
        &self,
        request: &DishImageRequest,
    ) -> Result<PathBuf, ImageryError> {
        let prompt = render_dish_prompt(request);
        let save_path = request.output_path.clone().unwrap_or_else(|| {
            self.output_dir
                .join(format!("{}_dish.png", safe_file_stem(&request.dish_name)))
        });

        self.generate_and_save(&prompt, save_path).await
    }

    /// Generate a flat-lay image of the raw ingredients for a dish
    pub async fn generate_ingredients_image<S: AsRef<str>>(
        &self,
        dish_name: &str,
        ingredients: &[S],
        output_path: Option<PathBuf>,
        additional_styling: &str,
    ) -> Result<PathBuf, ImageryError> {
        let prompt = render_ingredients_prompt(dish_name, ingredients, additional_styling);
        let save_path = output_path.unwrap_or_else(|| {
            self.output_dir
                .join(format!("{}_ingredients.png", safe_file_stem(dish_name)))
        });

        self.generate_and_save(&prompt, save_path).await
    }

    /// Generate an image from a caller-written prompt
    pub async fn generate_custom_image(
        &self,
        prompt: &str,
        output_path: impl Into<PathBuf>,
        add_cookbook_style: bool,
    ) -> Result<PathBuf, ImageryError> {
        let prompt = render_custom_prompt(prompt, add_cookbook_style);
        self.generate_and_save(&prompt, output_path.into()).await
    }

    /// Dish photo for `request`, plus the ingredients flat-lay when asked
    /// for and the request lists ingredients
    pub async fn generate_dish_images(
        &self,
        request: &DishImageRequest,
        generate_ingredients: bool,
    ) -> Result<RecipeImages, ImageryError> {
        let mut images = RecipeImages {
            dish: Some(self.generate_dish_image(request).await?),
            ingredients: None,
        };

        if generate_ingredients && !request.ingredients.is_empty() {
            images.ingredients = Some(
                self.generate_ingredients_image(&request.dish_name, &request.ingredients, None, "")
                    .await?,
            );
        }

        Ok(images)
    }

    /// Generate the dish and/or ingredients images for a recipe.
    ///
    /// The ingredients image is skipped when the recipe lists no ingredients.
    pub async fn generate_recipe_images(
        &self,
        recipe: &CookbookRecipe,
        generate_dish: bool,
        generate_ingredients: bool,
    ) -> Result<RecipeImages, ImageryError> {
        let dish_name = recipe.dish_name();
        let ingredients = recipe.ingredients();
        let recipe_id = recipe.recipe_id();
        let mut images = RecipeImages::default();

        if generate_dish {
            let request = DishImageRequest::builder()
                .dish_name(dish_name.clone())
                .description(recipe.dish_description())
                .ingredients(ingredients.iter().cloned())
                .cooking_method(recipe.detect_cooking_method())
                .output_path(self.output_dir.join(format!("{}_dish.png", recipe_id)))
                .build()?;
            images.dish = Some(self.generate_dish_image(&request).await?);
        }

        if generate_ingredients && !ingredients.is_empty() {
            let path = self
                .output_dir
                .join(format!("{}_ingredients.png", recipe_id));
            images.ingredients = Some(
                self.generate_ingredients_image(&dish_name, &ingredients, Some(path), "")
                    .await?,
            );
        }

        Ok(images)
    }

    async fn generate_and_save(
        &self,
        prompt: &str,
        save_path: PathBuf,
    ) -> Result<PathBuf, ImageryError> {
        info!("Generating image: {}", save_path.display());
        debug!(
            "Prompt preview: {}...",
            prompt.chars().take(PROMPT_PREVIEW_CHARS).collect::<String>()
        );

        let image = self.generate_with_retry(prompt).await?;
        for note in &image.notes {
            debug!("Model note: {}", note);
        }

        if let Some(parent) = save_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&save_path, &image.bytes).await?;
        info!("Image saved: {}", save_path.display());

        Ok(save_path)
    }

    async fn generate_with_retry(&self, prompt: &str) -> Result<GeneratedImage, ImageryError> {
        let attempts = self.retry.attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.provider.generate(prompt, &self.options).await {
                Ok(image) => return Ok(image),
                Err(e) if attempt < attempts => {
                    warn!(
                        "Provider {} failed (attempt {}/{}): {}",
                        self.provider.provider_name(),
                        attempt,
                        attempts,
                        e
                    );
                    // Linear backoff: delay grows with each attempt
                    let delay = Duration::from_millis(self.retry.delay_ms * attempt as u64);
                    debug!("Waiting {:?} before retry", delay);
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
