//! Share command handler.

use super::saved::find_saved;
use super::shopping::build_shopping_list;
use what2cook::{Settings, ShareTarget, What2CookResult, share};

/// Prints a saved recipe, or a fresh shopping list, rendered for `target`.
#[tracing::instrument(skip(settings))]
pub async fn handle_share(
    settings: &Settings,
    name: Option<String>,
    shopping_list: bool,
    target: ShareTarget,
) -> What2CookResult<()> {
    if shopping_list {
        match build_shopping_list(settings, &[]).await? {
            Some(list) => println!("{}", share::share_shopping_list(&list, target)),
            None => println!("Nothing to share: the shopping list came back empty."),
        }
        return Ok(());
    }

    let Some(name) = name else {
        return Ok(());
    };
    let recipe = find_saved(&settings.recipe_book(), &name)?;
    println!("{}", share::share_recipe(&recipe, target));
    Ok(())
}
