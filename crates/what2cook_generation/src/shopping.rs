//! Shopping list aggregation.

use crate::{GenerationOptions, parse_shopping_list, shopping_list_prompt, shopping_list_schema};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use what2cook_core::{Recipe, ShoppingList, StructuredRequest};
use what2cook_error::{GenerationErrorKind, What2CookResult};
use what2cook_interface::TextModel;

/// Merges the ingredients of several recipes into one categorized list.
///
/// Quantity arithmetic and categorization are left to the text model.
pub struct ShoppingListBuilder {
    text_model: Arc<dyn TextModel>,
    options: GenerationOptions,
}

impl std::fmt::Debug for ShoppingListBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShoppingListBuilder")
            .field("provider", &self.text_model.provider_name())
            .field("model", self.options.text_model())
            .finish()
    }
}

impl ShoppingListBuilder {
    /// Creates a builder using the options' text model.
    pub fn new(text_model: Arc<dyn TextModel>, options: GenerationOptions) -> Self {
        Self {
            text_model,
            options,
        }
    }

    /// Builds a shopping list for the recipes.
    ///
    /// Returns `Ok(None)` when the model's answer is empty or unusable.
    /// Callers are expected to pass at least one recipe.
    ///
    /// # Errors
    ///
    /// Returns the text model's error if the request itself fails. An answer
    /// without text, or a refused prompt, is not an error.
    #[instrument(skip_all, fields(recipes = recipes.len()))]
    pub async fn generate_shopping_list(
        &self,
        recipes: &[Recipe],
    ) -> What2CookResult<Option<ShoppingList>> {
        if recipes.is_empty() {
            debug!("Building a shopping list for zero recipes");
        }

        let request = StructuredRequest::new(
            self.options.text_model(),
            shopping_list_prompt(recipes),
            shopping_list_schema(),
        );

        let text = match self.text_model.generate_json(&request).await {
            Ok(text) => text,
            Err(e) if is_nothing_to_show(&e.kind) => {
                info!(reason = %e.kind, "Model returned no shopping list");
                return Ok(None);
            }
            Err(e) => {
                error!(error = %e, "Shopping list generation failed");
                return Err(e.into());
            }
        };

        let list = parse_shopping_list(&text);
        match &list {
            Some(list) => info!(
                categories = list.categories().len(),
                items = list.item_count(),
                "Shopping list generated"
            ),
            None => info!("Model returned no shopping list"),
        }
        Ok(list)
    }
}

/// Answers that carry no list but did reach the service.
fn is_nothing_to_show(kind: &GenerationErrorKind) -> bool {
    matches!(
        kind,
        GenerationErrorKind::EmptyResponse | GenerationErrorKind::Blocked(_)
    )
}
