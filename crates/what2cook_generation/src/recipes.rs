//! The recipe generation pipeline.

use crate::{GenerationOptions, image_prompt, parse_recipes, recipe_prompt, recipe_schema};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use what2cook_core::{FormData, ImageRequest, Recipe, StructuredRequest};
use what2cook_error::{ValidationError, ValidationErrorKind, What2CookResult};
use what2cook_interface::{ImageModel, TextModel};

/// Turns form data into recipes, with a photo for each when possible.
///
/// Text generation failures are returned to the caller. Image failures are
/// logged and the affected recipe is returned without a photo. Images are
/// requested one at a time with [`GenerationOptions::image_delay`] between
/// requests.
pub struct RecipeGenerator {
    text_model: Arc<dyn TextModel>,
    image_model: Option<Arc<dyn ImageModel>>,
    options: GenerationOptions,
}

impl std::fmt::Debug for RecipeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeGenerator")
            .field("provider", &self.text_model.provider_name())
            .field("images", &self.image_model.is_some())
            .field("options", &self.options)
            .finish()
    }
}

impl RecipeGenerator {
    /// Creates a text-only generator.
    pub fn new(text_model: Arc<dyn TextModel>, options: GenerationOptions) -> Self {
        Self {
            text_model,
            image_model: None,
            options,
        }
    }

    /// Enables photos.
    pub fn with_image_model(mut self, image_model: Arc<dyn ImageModel>) -> Self {
        self.image_model = Some(image_model);
        self
    }

    /// The options in effect.
    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Generates recipes for the form.
    ///
    /// An empty result means the model produced nothing usable; it is not an
    /// error.
    ///
    /// # Errors
    ///
    /// - [`ValidationErrorKind::NoIngredients`] when the form has no
    ///   ingredients. No request is made.
    /// - A generation error when the text request fails or its output has the
    ///   wrong shape.
    #[instrument(
        skip(self, form),
        fields(
            provider = self.text_model.provider_name(),
            ingredients = form.ingredients().len(),
            meal = %form.meal_type(),
            cuisine = %form.cuisine(),
        )
    )]
    pub async fn generate_recipes(&self, form: &FormData) -> What2CookResult<Vec<Recipe>> {
        if form.ingredients().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::NoIngredients).into());
        }

        let request = StructuredRequest::new(
            self.options.text_model(),
            recipe_prompt(form),
            recipe_schema(),
        );
        debug!(prompt_len = request.prompt.len(), "Requesting recipes");

        let text = self.text_model.generate_json(&request).await.map_err(|e| {
            error!(error = %e, "Recipe generation failed");
            e
        })?;

        let recipes = parse_recipes(&text)?;
        if recipes.is_empty() {
            info!("Model returned no recipes");
            return Ok(recipes);
        }

        let recipes = match self.image_model.as_deref() {
            Some(image_model) => self.attach_images(image_model, recipes).await,
            None => recipes,
        };

        info!(
            count = recipes.len(),
            with_images = recipes.iter().filter(|r| r.has_image()).count(),
            "Recipes generated"
        );
        Ok(recipes)
    }

    async fn attach_images(&self, image_model: &dyn ImageModel, recipes: Vec<Recipe>) -> Vec<Recipe> {
        let delay = *self.options.image_delay();
        let mut illustrated = Vec::with_capacity(recipes.len());

        for (index, recipe) in recipes.into_iter().enumerate() {
            if index > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            illustrated.push(self.illustrate(image_model, recipe).await);
        }

        illustrated
    }

    async fn illustrate(&self, image_model: &dyn ImageModel, recipe: Recipe) -> Recipe {
        let request = ImageRequest::single_jpeg(self.options.image_model(), image_prompt(&recipe));

        match image_model.generate_image(&request).await {
            Ok(image) => {
                debug!(recipe = %recipe.recipe_name, "Image attached");
                recipe.with_image_url(image.data_uri())
            }
            Err(e) => {
                warn!(
                    recipe = %recipe.recipe_name,
                    error = %e,
                    "Image generation failed, continuing without image"
                );
                recipe
            }
        }
    }
}
