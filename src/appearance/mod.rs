//! Ingredient appearance analysis.
//!
//! Maps free-text ingredient lines to a color and texture description that
//! can be dropped into an image-generation prompt. Everything here is a pure
//! function over the static tables in [`catalog`]: there is no error path and
//! no state shared between calls.

pub mod catalog;
mod texture;

pub use texture::texture_description;

use log::debug;
use serde::Serialize;

use catalog::{colors_by_specificity, INTENSITY_ADJECTIVES, LIQUID_BASES, QUANTITY_PATTERNS};

/// Returned when there are no ingredients to look at.
pub const NO_INGREDIENTS_DESCRIPTION: &str = "natural home-cooked appearance";

/// Returned when ingredients were given but none of them carries a known color.
pub const NO_COLORS_DESCRIPTION: &str = "natural earthy tones";

const DOMINANT_COLOR_COUNT: usize = 3;

/// A detected color together with its weighted intensity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorIntensity {
    pub color: String,
    pub intensity: f64,
}

/// Outcome of [`AppearanceAnalyzer::analyze`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Natural-language color phrase, e.g. "rich warm orange-red with hints of tomato red"
    pub color_description: String,
    /// Up to three strongest colors, strongest first
    pub dominant_colors: Vec<String>,
    /// Sauce or broth the dish appears to sit in
    pub liquid_base: Option<String>,
    /// Every detected color ranked by intensity
    pub all_colors: Vec<ColorIntensity>,
}

pub struct AppearanceAnalyzer;

impl AppearanceAnalyzer {
    /// Analyze ingredient lines (with or without quantities) for dish color.
    ///
    /// Never fails: unrecognized or empty input yields a generic description.
    ///
    /// # Example
    /// ```
    /// use cookbook_imagery::AppearanceAnalyzer;
    ///
    /// let analysis = AppearanceAnalyzer::analyze(&["2 tbsp sweet paprika", "1 tomato"]);
    /// assert_eq!(analysis.dominant_colors[0], "warm orange-red");
    /// ```
    pub fn analyze<S: AsRef<str>>(ingredients: &[S]) -> AnalysisResult {
        let by_specificity = colors_by_specificity();

        // Insertion order is kept so that equal intensities rank by first sighting
        let mut colors: Vec<ColorIntensity> = Vec::new();
        let mut liquid_base: Option<&str> = None;

        for ingredient in ingredients {
            let line = ingredient.as_ref().to_lowercase();
            let multiplier = quantity_multiplier(&line);

            let mut matched: Vec<&str> = Vec::new();
            for &&(key, color, base) in by_specificity.iter() {
                if !line.contains(key) {
                    continue;
                }
                // "sweet paprika" already covers "paprika"
                if matched
                    .iter()
                    .any(|m| *m != key && (m.contains(key) || key.contains(*m)))
                {
                    continue;
                }
                matched.push(key);

                let intensity = base * multiplier;
                match colors.iter_mut().find(|c| c.color == color) {
                    Some(existing) => {
                        if intensity > existing.intensity {
                            existing.intensity = intensity;
                        }
                    }
                    None => colors.push(ColorIntensity {
                        color: color.to_string(),
                        intensity,
                    }),
                }
            }

            for (key, description) in LIQUID_BASES {
                if line.contains(key) {
                    liquid_base = Some(*description);
                }
            }

            debug!(
                "ingredient {:?}: multiplier {}, matched {:?}",
                line, multiplier, matched
            );
        }

        colors.sort_by(|a, b| b.intensity.total_cmp(&a.intensity));

        let dominant = &colors[..colors.len().min(DOMINANT_COLOR_COUNT)];
        let color_description = if ingredients.is_empty() {
            NO_INGREDIENTS_DESCRIPTION.to_string()
        } else if dominant.is_empty() {
            NO_COLORS_DESCRIPTION.to_string()
        } else {
            describe_colors(dominant, liquid_base)
        };

        AnalysisResult {
            color_description,
            dominant_colors: dominant.iter().map(|c| c.color.clone()).collect(),
            liquid_base: liquid_base.map(str::to_string),
            all_colors: colors,
        }
    }

    /// Texture phrase for the given ingredients and cooking method.
    ///
    /// See [`texture_description`].
    pub fn texture<S: AsRef<str>>(ingredients: &[S], cooking_method: &str) -> String {
        texture_description(ingredients, cooking_method)
    }
}

/// Largest multiplier among the quantity words found in `line`, at least 1.0.
fn quantity_multiplier(line: &str) -> f64 {
    QUANTITY_PATTERNS
        .iter()
        .filter(|(pattern, _)| line.contains(pattern))
        .fold(1.0, |acc, (_, mult)| f64::max(acc, *mult))
}

/// Compose the color phrase from the ranked dominant colors. `dominant` must
/// not be empty.
fn describe_colors(dominant: &[ColorIntensity], liquid_base: Option<&str>) -> String {
    let primary = &dominant[0];
    let prefix = intensity_prefix(&primary.color, primary.intensity);

    let mut parts = vec![format!("{}{}", prefix, primary.color).trim().to_string()];

    if let Some(secondary) = dominant.get(1) {
        parts.push(format!("with hints of {}", secondary.color));
    }
    if let Some(tertiary) = dominant.get(2) {
        parts.push(format!("and accents of {}", tertiary.color));
    }
    if let Some(base) = liquid_base {
        parts.push(format!("in a {}", base));
    }

    parts.join(" ")
}

fn intensity_prefix(color: &str, intensity: f64) -> &'static str {
    let has_adjective = INTENSITY_ADJECTIVES
        .iter()
        .any(|adjective| color.starts_with(adjective));

    if intensity > 2.0 {
        "deeply saturated "
    } else if intensity > 1.5 {
        "rich "
    } else if has_adjective {
        ""
    } else if intensity > 1.0 {
        "warm "
    } else {
        "subtle "
    }
}
