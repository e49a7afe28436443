//! Human-readable preview of the color analysis, useful for checking color
//! decisions before spending an image generation on them.

use std::fmt;

use crate::appearance::{AnalysisResult, AppearanceAnalyzer};
use crate::model::CookbookRecipe;

const MAX_LISTED_COLORS: usize = 8;
const BAR_SCALE: f64 = 5.0;
const UNKNOWN_TITLE: &str = "Unknown";

#[derive(Debug, Clone)]
pub struct ColorReport {
    pub title: String,
    pub ingredients: Vec<String>,
    pub analysis: AnalysisResult,
}

impl ColorReport {
    pub fn new(title: impl Into<String>, ingredients: Vec<String>) -> Self {
        let analysis = AppearanceAnalyzer::analyze(&ingredients);
        Self {
            title: title.into(),
            ingredients,
            analysis,
        }
    }

    /// Report titled with the English name; there is no Hebrew fallback here
    pub fn for_recipe(recipe: &CookbookRecipe) -> Self {
        let title = recipe
            .english_name()
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string());
        Self::new(title, recipe.ingredients())
    }
}

fn intensity_bar(intensity: f64) -> String {
    "█".repeat((intensity * BAR_SCALE).max(0.0) as usize)
}

impl fmt::Display for ColorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Color Analysis for: {}", self.title)?;
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(f)?;
        writeln!(f, "Ingredients analyzed:")?;
        for ingredient in &self.ingredients {
            writeln!(f, "  • {}", ingredient)?;
        }

        let analysis = &self.analysis;
        let dominant = if analysis.dominant_colors.is_empty() {
            "None detected".to_string()
        } else {
            analysis.dominant_colors.join(", ")
        };

        writeln!(f)?;
        writeln!(f, "Color Analysis Results:")?;
        writeln!(f, "   Primary description: {}", analysis.color_description)?;
        writeln!(f, "   Dominant colors: {}", dominant)?;
        writeln!(
            f,
            "   Liquid base: {}",
            analysis.liquid_base.as_deref().unwrap_or("Not detected")
        )?;

        if !analysis.all_colors.is_empty() {
            writeln!(f)?;
            writeln!(f, "   All detected colors (by intensity):")?;
            for color in analysis.all_colors.iter().take(MAX_LISTED_COLORS) {
                writeln!(
                    f,
                    "      {:<30} {} ({:.1})",
                    color.color,
                    intensity_bar(color.intensity),
                    color.intensity
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_bar() {
        assert_eq!(intensity_bar(1.5), "███████");
        assert_eq!(intensity_bar(0.1), "");
    }

    #[test]
    fn test_report_lists_colors() {
        let report = ColorReport::new(
            "Mhamsa",
            vec!["3 cups tomato paste".to_string(), "1 tsp cumin".to_string()],
        );
        let text = report.to_string();

        assert!(text.starts_with("Color Analysis for: Mhamsa\n"));
        assert!(text.contains("  • 3 cups tomato paste"));
        assert!(text.contains("Liquid base: red tomato-based sauce"));
        assert!(text.contains("(5.0)"));
        assert!(text.contains("earthy tan-brown"));
    }

    #[test]
    fn test_report_without_colors() {
        let recipe = CookbookRecipe::from_json(r#"{"ingredients": ["salt"]}"#).unwrap();
        let text = ColorReport::for_recipe(&recipe).to_string();

        assert!(text.starts_with("Color Analysis for: Unknown"));
        assert!(text.contains("Dominant colors: None detected"));
        assert!(text.contains("Liquid base: Not detected"));
        assert!(!text.contains("All detected colors"));
    }

    #[test]
    fn test_report_title_ignores_non_english_name() {
        let recipe = CookbookRecipe::from_json(
            r#"{"name": {"he": "חריימה"}, "ingredients": {"en": ["1 tsp cumin"]}}"#,
        )
        .unwrap();
        let report = ColorReport::for_recipe(&recipe);

        assert_eq!(report.title, "Unknown");
        assert_eq!(report.ingredients, vec!["1 tsp cumin"]);

        let recipe =
            CookbookRecipe::from_json(r#"{"name": {"en": "Chraime", "he": "חריימה"}}"#).unwrap();
        assert_eq!(ColorReport::for_recipe(&recipe).title, "Chraime");
    }
}
