//! Tunables for the generation pipeline.

use derive_getters::Getters;
use std::time::Duration;
use what2cook_core::{DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};

/// Pause between consecutive image requests.
pub const DEFAULT_IMAGE_DELAY: Duration = Duration::from_millis(1000);

/// Model names and pacing used by [`RecipeGenerator`](crate::RecipeGenerator)
/// and [`ShoppingListBuilder`](crate::ShoppingListBuilder).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use what2cook_generation::GenerationOptionsBuilder;
///
/// let options = GenerationOptionsBuilder::default()
///     .image_delay(Duration::from_millis(250))
///     .build()
///     .unwrap();
///
/// assert_eq!(options.text_model(), "gemini-2.5-flash");
/// assert_eq!(*options.image_delay(), Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerationOptions {
    /// Model for recipe and shopping-list text
    #[builder(default = "DEFAULT_TEXT_MODEL.to_string()")]
    text_model: String,

    /// Model for recipe photos
    #[builder(default = "DEFAULT_IMAGE_MODEL.to_string()")]
    image_model: String,

    /// Pause between image requests, not taken after the last one
    #[builder(default = "DEFAULT_IMAGE_DELAY")]
    image_delay: Duration,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            image_delay: DEFAULT_IMAGE_DELAY,
        }
    }
}
