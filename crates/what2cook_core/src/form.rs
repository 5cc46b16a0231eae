//! Form state for one recipe generation request.

use derive_getters::Getters;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Ingredients offered when nothing has been saved from a previous session.
pub const DEFAULT_INGREDIENTS: [&str; 4] = ["paneer", "spinach", "onion", "garlic"];

/// Meal the recipes are meant for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum MealType {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Dessert,
    Snack,
}

/// Cuisine style. `Any` adds no constraint to the prompt.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Cuisine {
    Any,
    Italian,
    Mexican,
    #[default]
    Indian,
    Chinese,
    Japanese,
    Thai,
    American,
}

/// Region of Indian cuisine. Only meaningful when the cuisine is [`Cuisine::Indian`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum IndianRegion {
    #[default]
    Any,
    North,
    South,
}

/// Dietary filter. `None` adds no constraint to the prompt.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Diet {
    None,
    #[default]
    Vegetarian,
    Vegan,
    #[serde(rename = "Gluten-Free")]
    #[strum(to_string = "Gluten-Free", serialize = "GlutenFree", serialize = "gluten free")]
    GlutenFree,
    Keto,
}

/// Trims, lowercases and deduplicates ingredient names, keeping first-seen order.
///
/// # Examples
///
/// ```
/// use what2cook_core::normalize_ingredients;
///
/// let cleaned = normalize_ingredients(["  Paneer", "spinach", "PANEER", ""]);
/// assert_eq!(cleaned, vec!["paneer", "spinach"]);
/// ```
pub fn normalize_ingredients<I, S>(ingredients: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    ingredients
        .into_iter()
        .map(|raw| raw.as_ref().trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

fn deserialize_ingredients<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<String>::deserialize(deserializer).map(normalize_ingredients)
}

/// Parameters of one generation request.
///
/// # Examples
///
/// ```
/// use what2cook_core::{Cuisine, FormData, IndianRegion};
///
/// let form = FormData::new(["Paneer", "spinach"])
///     .with_cuisine(Cuisine::Indian)
///     .with_indian_region(IndianRegion::North);
///
/// assert_eq!(form.ingredients(), &["paneer", "spinach"]);
/// assert_eq!(*form.indian_region(), Some(IndianRegion::North));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    /// Normalized ingredient names
    #[serde(deserialize_with = "deserialize_ingredients")]
    ingredients: Vec<String>,
    /// Meal type
    meal_type: MealType,
    /// Cuisine style
    cuisine: Cuisine,
    /// Dietary filter
    diet: Diet,
    /// Indian region, only used with [`Cuisine::Indian`]
    #[serde(
        default,
        rename = "indianCuisineRegion",
        skip_serializing_if = "Option::is_none"
    )]
    indian_region: Option<IndianRegion>,
    /// Free-text request passed to the model verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    special_requests: Option<String>,
}

impl FormData {
    /// Creates form data with default preferences for the given ingredients.
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            ingredients: normalize_ingredients(ingredients),
            meal_type: MealType::default(),
            cuisine: Cuisine::default(),
            diet: Diet::default(),
            indian_region: None,
            special_requests: None,
        }
    }

    /// Sets the meal type.
    pub fn with_meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = meal_type;
        self
    }

    /// Sets the cuisine. Switching away from Indian clears the region.
    pub fn with_cuisine(mut self, cuisine: Cuisine) -> Self {
        self.cuisine = cuisine;
        if cuisine != Cuisine::Indian {
            self.indian_region = None;
        }
        self
    }

    /// Sets the Indian region.
    pub fn with_indian_region(mut self, region: IndianRegion) -> Self {
        self.indian_region = Some(region);
        self
    }

    /// Sets the dietary filter.
    pub fn with_diet(mut self, diet: Diet) -> Self {
        self.diet = diet;
        self
    }

    /// Sets the special request. Blank text is treated as absent.
    pub fn with_special_requests(mut self, request: impl Into<String>) -> Self {
        let request = request.into();
        self.special_requests = if request.trim().is_empty() {
            None
        } else {
            Some(request)
        };
        self
    }

    /// The region restriction in effect, if any.
    ///
    /// Only an Indian cuisine with a concrete region yields one.
    pub fn region_restriction(&self) -> Option<IndianRegion> {
        match (self.cuisine, self.indian_region) {
            (Cuisine::Indian, Some(region)) if region != IndianRegion::Any => Some(region),
            _ => None,
        }
    }
}
