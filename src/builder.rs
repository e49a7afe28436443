use std::path::PathBuf;

use crate::ImageryError;

const DEFAULT_CULTURAL_CONTEXT: &str = "Tunisian Jewish Djerban";

/// Everything needed to render a finished-dish photograph
#[derive(Debug, Clone)]
pub struct DishImageRequest {
    pub dish_name: String,
    pub description: String,
    /// Ingredient lines with quantities, used for color accuracy
    pub ingredients: Vec<String>,
    /// Cultural origin for authentic styling
    pub cultural_context: String,
    /// How the dish is cooked (fried, stewed, ...)
    pub cooking_method: String,
    pub additional_styling: String,
    /// Where to save the image; defaults to `{dish}_dish.png` in the output directory
    pub output_path: Option<PathBuf>,
}

impl DishImageRequest {
    /// Create a new builder for a dish image request
    ///
    /// # Example
    /// ```
    /// use cookbook_imagery::DishImageRequest;
    ///
    /// let request = DishImageRequest::builder()
    ///     .dish_name("Mhamsa")
    ///     .description("Tunisian pearl couscous in tomato stew")
    ///     .ingredients(["2 tbsp sweet paprika", "1 tomato", "1 cup couscous"])
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(request.cultural_context, "Tunisian Jewish Djerban");
    /// ```
    pub fn builder() -> DishImageRequestBuilder {
        DishImageRequestBuilder::default()
    }
}

/// Builder for [`DishImageRequest`]
#[derive(Debug, Default)]
pub struct DishImageRequestBuilder {
    dish_name: Option<String>,
    description: String,
    ingredients: Vec<String>,
    cultural_context: Option<String>,
    cooking_method: String,
    additional_styling: String,
    output_path: Option<PathBuf>,
}

impl DishImageRequestBuilder {
    pub fn dish_name(mut self, name: impl Into<String>) -> Self {
        self.dish_name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the ingredient lines, quantities included ("2 tbsp sweet paprika")
    pub fn ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn cultural_context(mut self, context: impl Into<String>) -> Self {
        self.cultural_context = Some(context.into());
        self
    }

    pub fn cooking_method(mut self, method: impl Into<String>) -> Self {
        self.cooking_method = method.into();
        self
    }

    pub fn additional_styling(mut self, styling: impl Into<String>) -> Self {
        self.additional_styling = styling.into();
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<DishImageRequest, ImageryError> {
        let dish_name = self
            .dish_name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| ImageryError::BuilderError("No dish name specified".to_string()))?;

        Ok(DishImageRequest {
            dish_name,
            description: self.description,
            ingredients: self.ingredients,
            cultural_context: self
                .cultural_context
                .unwrap_or_else(|| DEFAULT_CULTURAL_CONTEXT.to_string()),
            cooking_method: self.cooking_method,
            additional_styling: self.additional_styling,
            output_path: self.output_path,
        })
    }
}
