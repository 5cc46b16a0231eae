//! Recipe and ingredient types.

use serde::{Deserialize, Serialize};

/// An ingredient line of a recipe.
///
/// The quantity is free text ("2 cups", "a pinch") and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    /// Name of the ingredient
    pub name: String,
    /// Amount needed, as written by the model
    pub quantity: String,
}

impl Ingredient {
    /// Creates a new ingredient line.
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

/// A generated recipe.
///
/// `recipe_name` is the key used for saving, removing and deduplication.
/// Serialized field names match the camelCase JSON the model returns and the
/// persisted collection uses.
///
/// # Examples
///
/// ```
/// use what2cook_core::{Ingredient, Recipe};
///
/// let json = r#"{
///     "recipeName": "Palak Paneer",
///     "description": "Paneer in spiced spinach gravy.",
///     "prepTime": "15 minutes",
///     "cookTime": "25 minutes",
///     "servings": "4 servings",
///     "ingredients": [{"name": "paneer", "quantity": "200 g"}],
///     "instructions": ["Blanch the spinach."]
/// }"#;
///
/// let recipe: Recipe = serde_json::from_str(json).unwrap();
/// assert_eq!(recipe.recipe_name, "Palak Paneer");
/// assert_eq!(recipe.ingredients[0], Ingredient::new("paneer", "200 g"));
/// assert!(recipe.image_url.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Name of the recipe, unique within a saved collection
    pub recipe_name: String,
    /// Short description of the dish
    pub description: String,
    /// Preparation time, e.g. "15 minutes"
    pub prep_time: String,
    /// Cooking time, e.g. "30 minutes"
    pub cook_time: String,
    /// Servings, e.g. "4 servings"
    pub servings: String,
    /// Every ingredient the recipe needs
    pub ingredients: Vec<Ingredient>,
    /// Ordered preparation steps
    pub instructions: Vec<String>,
    /// Generated photo as a `data:` URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Recipe {
    /// Returns a copy of this recipe carrying the given image.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Whether an image is attached.
    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}
