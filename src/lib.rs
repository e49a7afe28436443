//! Ingredient-aware cookbook imagery.
//!
//! The core is [`AppearanceAnalyzer`], which turns ingredient lines such as
//! `"2 tbsp sweet paprika"` into a color and texture description. The rest of
//! the crate wraps that description into photography prompts and sends them
//! to an image generation service.

pub mod appearance;
pub mod builder;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod prompt;
pub mod providers;
pub mod report;

use std::path::Path;

pub use appearance::{AnalysisResult, AppearanceAnalyzer, ColorIntensity};
pub use builder::{DishImageRequest, DishImageRequestBuilder};
pub use crate::config::ImageryConfig;
pub use error::ImageryError;
pub use generator::{CookbookImageGenerator, RecipeImages};
pub use model::CookbookRecipe;
pub use report::ColorReport;

/// Preview the color analysis for a recipe file without generating anything
pub async fn analyze_recipe_colors(
    recipe_path: impl AsRef<Path>,
) -> Result<ColorReport, ImageryError> {
    let recipe = CookbookRecipe::from_file(recipe_path).await?;
    Ok(ColorReport::for_recipe(&recipe))
}

/// Generate dish and ingredients images for a recipe file using the loaded configuration
pub async fn generate_recipe_images(
    recipe_path: impl AsRef<Path>,
    generate_dish: bool,
    generate_ingredients: bool,
) -> Result<RecipeImages, ImageryError> {
    let config = ImageryConfig::load()?;
    let generator = CookbookImageGenerator::new(&config)?;
    let recipe = CookbookRecipe::from_file(recipe_path).await?;

    generator
        .generate_recipe_images(&recipe, generate_dish, generate_ingredients)
        .await
}
