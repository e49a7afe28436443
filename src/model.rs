use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

use crate::ImageryError;

const PREFERRED_LANGUAGE: &str = "en";
const FALLBACK_NAME_LANGUAGE: &str = "he";
const DEFAULT_DISH_NAME: &str = "dish";

/// A field that is either given directly or keyed by language code
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Localized<T> {
    Plain(T),
    // entries are decoded on lookup so a null or mistyped sibling language
    // does not hide the one being asked for
    ByLanguage(HashMap<String, Value>),
    // anything else (numbers, mismatched shapes) is kept but unused
    Other(Value),
}

impl<T: DeserializeOwned + Clone> Localized<T> {
    /// Value for `language`; an entry of the wrong shape counts as missing.
    pub fn get(&self, language: &str) -> Option<T> {
        match self {
            Localized::Plain(value) => Some(value.clone()),
            Localized::ByLanguage(values) => values
                .get(language)
                .and_then(|value| serde_json::from_value(value.clone()).ok()),
            Localized::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeVariant {
    #[serde(default)]
    pub steps: Option<Localized<Vec<Value>>>,
}

/// Recipe as stored in the cookbook's JSON files
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CookbookRecipe {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<Localized<String>>,
    #[serde(default)]
    pub description: Option<Localized<String>>,
    #[serde(default)]
    pub ingredients: Option<Localized<Vec<String>>>,
    #[serde(default)]
    pub steps: Option<Localized<Vec<Value>>>,
    #[serde(default)]
    pub variants: Vec<RecipeVariant>,
}

impl CookbookRecipe {
    pub fn from_json(json: &str) -> Result<Self, ImageryError> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ImageryError> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    /// English name, then Hebrew, then "dish"
    pub fn dish_name(&self) -> String {
        match &self.name {
            Some(Localized::Other(value)) => value.to_string(),
            Some(name) => name
                .get(PREFERRED_LANGUAGE)
                .or_else(|| name.get(FALLBACK_NAME_LANGUAGE))
                .unwrap_or_else(|| DEFAULT_DISH_NAME.to_string()),
            None => DEFAULT_DISH_NAME.to_string(),
        }
    }

    /// English name only, without any fallback
    pub fn english_name(&self) -> Option<String> {
        self.name.as_ref().and_then(|n| n.get(PREFERRED_LANGUAGE))
    }

    pub fn dish_description(&self) -> String {
        self.description
            .as_ref()
            .and_then(|d| d.get(PREFERRED_LANGUAGE))
            .unwrap_or_default()
    }

    pub fn ingredients(&self) -> Vec<String> {
        self.ingredients
            .as_ref()
            .and_then(|i| i.get(PREFERRED_LANGUAGE))
            .unwrap_or_default()
    }

    /// Explicit id, or the dish name in snake case
    pub fn recipe_id(&self) -> String {
        self.id
            .clone()
            .unwrap_or_else(|| self.dish_name().to_lowercase().replace(' ', "_"))
    }

    /// Summarize how the dish is cooked from its step texts.
    ///
    /// Returns the distinct keywords ("fried", "stewed", "baked", "boiled")
    /// in the order they were first seen, separated by spaces.
    pub fn detect_cooking_method(&self) -> String {
        let variant_steps = self.variants.iter().filter_map(|v| v.steps.as_ref());
        let all_steps = variant_steps.chain(self.steps.as_ref());

        let mut keywords: Vec<&str> = Vec::new();
        for steps in all_steps {
            let Some(steps) = steps.get(PREFERRED_LANGUAGE) else {
                continue;
            };
            for step in steps.iter().filter_map(Value::as_str) {
                for keyword in cooking_keywords(step) {
                    if !keywords.contains(&keyword) {
                        keywords.push(keyword);
                    }
                }
            }
        }

        keywords.join(" ")
    }
}

fn cooking_keywords(step: &str) -> Vec<&'static str> {
    const METHODS: &[(&[&str], &str)] = &[
        (&["fry", "sauté", "saute"], "fried"),
        (&["simmer", "stew"], "stewed"),
        (&["bake", "roast"], "baked"),
        (&["boil"], "boiled"),
    ];

    let step = step.to_lowercase();
    METHODS
        .iter()
        .filter(|(verbs, _)| verbs.iter().any(|verb| step.contains(verb)))
        .map(|(_, keyword)| *keyword)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_fields_prefer_english() {
        let recipe = CookbookRecipe::from_json(
            r#"{
                "id": "mhamsa",
                "name": {"en": "Mhamsa", "he": "מחמסה"},
                "description": {"en": "Pearl couscous stew"},
                "ingredients": {"en": ["1 cup mhamsa", "1 tomato"], "he": ["כוס מחמסה"]}
            }"#,
        )
        .unwrap();

        assert_eq!(recipe.dish_name(), "Mhamsa");
        assert_eq!(recipe.dish_description(), "Pearl couscous stew");
        assert_eq!(recipe.ingredients(), vec!["1 cup mhamsa", "1 tomato"]);
        assert_eq!(recipe.recipe_id(), "mhamsa");
    }

    #[test]
    fn test_name_falls_back_to_hebrew_then_default() {
        let recipe = CookbookRecipe::from_json(r#"{"name": {"he": "חריימה"}}"#).unwrap();
        assert_eq!(recipe.dish_name(), "חריימה");

        let recipe = CookbookRecipe::from_json(r#"{"name": {"fr": "Chakchouka"}}"#).unwrap();
        assert_eq!(recipe.dish_name(), "dish");

        let recipe = CookbookRecipe::from_json("{}").unwrap();
        assert_eq!(recipe.dish_name(), "dish");
        assert!(recipe.ingredients().is_empty());
        assert_eq!(recipe.dish_description(), "");
    }

    #[test]
    fn test_plain_fields() {
        let recipe = CookbookRecipe::from_json(
            r#"{
                "name": "Fish Couscous",
                "description": "Friday couscous",
                "ingredients": ["2 cups couscous", "1 tsp turmeric"]
            }"#,
        )
        .unwrap();

        assert_eq!(recipe.dish_name(), "Fish Couscous");
        assert_eq!(recipe.recipe_id(), "fish_couscous");
        assert_eq!(recipe.ingredients().len(), 2);
    }

    #[test]
    fn test_detect_cooking_method_from_variants_and_steps() {
        let recipe = CookbookRecipe::from_json(
            r#"{
                "variants": [
                    {"steps": {"en": ["Sauté the onions", "Simmer for 20 minutes", "Fry the bread"]}},
                    {"steps": ["Bake until golden"]}
                ],
                "steps": ["Boil the water", 42, {"note": "ignored"}]
            }"#,
        )
        .unwrap();

        assert_eq!(recipe.detect_cooking_method(), "fried stewed baked boiled");
    }

    #[test]
    fn test_detect_cooking_method_empty() {
        let recipe = CookbookRecipe::from_json(r#"{"steps": {"he": ["לטגן"]}}"#).unwrap();
        assert_eq!(recipe.detect_cooking_method(), "");
    }

    #[test]
    fn test_null_or_mistyped_sibling_language() {
        let recipe = CookbookRecipe::from_json(
            r#"{
                "name": {"en": "Mhamsa", "he": null},
                "description": {"en": "Pearl couscous stew", "he": 7},
                "ingredients": {"en": ["3 cups tomato paste"], "he": null},
                "steps": {"en": ["Fry the onions"], "he": "not a list"}
            }"#,
        )
        .unwrap();

        assert_eq!(recipe.dish_name(), "Mhamsa");
        assert_eq!(recipe.recipe_id(), "mhamsa");
        assert_eq!(recipe.dish_description(), "Pearl couscous stew");
        assert_eq!(recipe.ingredients(), vec!["3 cups tomato paste"]);
        assert_eq!(recipe.detect_cooking_method(), "fried");
    }

    #[test]
    fn test_mistyped_english_entry_counts_as_missing() {
        let recipe =
            CookbookRecipe::from_json(r#"{"name": {"en": 12, "he": "מחמסה"}}"#).unwrap();
        assert_eq!(recipe.dish_name(), "מחמסה");
        assert_eq!(recipe.english_name(), None);
    }

    #[test]
    fn test_invalid_json() {
        let result = CookbookRecipe::from_json("not json");
        assert!(matches!(result, Err(ImageryError::RecipeParseError(_))));
    }
}
