//! Prompt templates for cookbook photography.
//!
//! The style blocks live in plain text files next to this module and are
//! embedded at compile time with `include_str!`, so they can be edited
//! without dealing with Rust string syntax.

use crate::appearance::{texture_description, AppearanceAnalyzer};
use crate::builder::DishImageRequest;

/// Style for finished-dish photographs
pub const DISH_STYLE: &str = include_str!("dish_style.txt");

/// Style for raw-ingredient flat lays
pub const INGREDIENTS_STYLE: &str = include_str!("ingredients_style.txt");

/// Appended to custom prompts when cookbook styling is requested
pub const CUSTOM_STYLE: &str = "Additional style: Professional food photography, natural lighting,
high-end cookbook quality, 8K detail, photorealistic.";

/// At most this many ingredients are quoted back in the color requirements.
const MAX_LISTED_INGREDIENTS: usize = 8;

/// Color and texture requirements derived from the ingredient list.
///
/// Returns an empty string when there are no ingredients, so the dish prompt
/// falls back to its plain description.
pub fn appearance_requirements<S: AsRef<str>>(ingredients: &[S], cooking_method: &str) -> String {
    if ingredients.is_empty() {
        return String::new();
    }

    let analysis = AppearanceAnalyzer::analyze(ingredients);
    let texture = texture_description(ingredients, cooking_method);
    let listed: Vec<&str> = ingredients
        .iter()
        .take(MAX_LISTED_INGREDIENTS)
        .map(AsRef::as_ref)
        .collect();

    format!(
        r#"
CRITICAL COLOR AND APPEARANCE REQUIREMENTS (based on actual ingredients):
- The dish MUST have {color} coloring
- Texture should show {texture}
- These colors come from the actual spices and ingredients used:
  {listed}

Do NOT make the dish look generic. Match the specific color profile above."#,
        color = analysis.color_description,
        texture = texture,
        listed = listed.join(", ")
    )
}

/// Render the prompt for a finished-dish photograph
pub fn render_dish_prompt(request: &DishImageRequest) -> String {
    let appearance = appearance_requirements(&request.ingredients, &request.cooking_method);

    format!(
        r#"Create a stunning photograph of {dish_name},
a traditional {context} dish: {description}
{appearance}

Style requirements:
{style}

{styling}

The dish should look authentic, homemade yet beautifully presented,
as if photographed for a high-end heritage cookbook."#,
        dish_name = request.dish_name,
        context = request.cultural_context,
        description = request.description,
        appearance = appearance,
        style = DISH_STYLE.trim_end(),
        styling = request.additional_styling
    )
}

/// Render the prompt for a flat lay of the raw ingredients
pub fn render_ingredients_prompt<S: AsRef<str>>(
    dish_name: &str,
    ingredients: &[S],
    additional_styling: &str,
) -> String {
    let ingredients_text = ingredients
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(", ");

    format!(
        r#"Create a beautiful flat-lay photograph showing the raw ingredients
for making {dish_name}:

Ingredients to show: {ingredients_text}

Style requirements:
{style}

{additional_styling}

Arrange ingredients in an artistic, balanced composition
that showcases the fresh, quality ingredients used in this traditional recipe."#,
        dish_name = dish_name,
        ingredients_text = ingredients_text,
        style = INGREDIENTS_STYLE.trim_end(),
        additional_styling = additional_styling
    )
}

/// Optionally append the cookbook look to a caller-written prompt
pub fn render_custom_prompt(prompt: &str, add_cookbook_style: bool) -> String {
    if add_cookbook_style {
        format!("{}\n\n{}", prompt, CUSTOM_STYLE)
    } else {
        prompt.to_string()
    }
}

/// File-name stem for a dish: lower case, spaces to underscores, no apostrophes
pub fn safe_file_stem(name: &str) -> String {
    name.to_lowercase().replace(' ', "_").replace('\'', "")
}
