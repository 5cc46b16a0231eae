//! Shopping list command handler.

use super::saved::select_saved;
use std::sync::Arc;
use tracing::instrument;
use what2cook::{
    GeminiClient, Settings, ShoppingList, ShoppingListBuilder, What2CookResult, share,
};

/// Builds a shopping list for the named saved recipes, or all of them.
///
/// Fails before any request when there is nothing to build from.
pub async fn build_shopping_list(
    settings: &Settings,
    names: &[String],
) -> What2CookResult<Option<ShoppingList>> {
    let recipes = select_saved(settings.recipe_book().saved_recipes(), names)?;

    let client = Arc::new(GeminiClient::from_env_with_base_url(settings.base_url())?);
    let builder = ShoppingListBuilder::new(client, settings.generation_options()?);
    builder.generate_shopping_list(&recipes).await
}

/// Handles the shopping-list command.
#[instrument(skip_all, fields(named = names.len()))]
pub async fn handle_shopping_list(settings: &Settings, names: Vec<String>) -> What2CookResult<()> {
    match build_shopping_list(settings, &names).await? {
        Some(list) => println!("{}", share::shopping_list_text(&list)),
        None => println!("Nothing to show: the shopping list came back empty."),
    }
    Ok(())
}
