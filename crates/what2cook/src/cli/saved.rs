//! Saved recipe command handlers.

use super::SavedCommand;
use super::display::{recipe_card, recipe_summary};
use what2cook::{
    KeyValueStore, Recipe, RecipeBook, Settings, ValidationError, ValidationErrorKind,
    What2CookResult,
};

/// Handles `saved list|show|remove`.
#[tracing::instrument(skip_all)]
pub fn handle_saved_command(settings: &Settings, command: SavedCommand) -> What2CookResult<()> {
    let book = settings.recipe_book();

    match command {
        SavedCommand::List => {
            let recipes = book.saved_recipes();
            if recipes.is_empty() {
                println!("You haven't saved any recipes yet.");
            }
            for recipe in &recipes {
                println!("{}", recipe_summary(recipe));
            }
        }
        SavedCommand::Show { name } => {
            let recipe = find_saved(&book, &name)?;
            println!("{}", recipe_card(&recipe, true));
        }
        SavedCommand::Remove { name } => {
            if book.is_saved(&name) {
                book.remove_recipe(&name)?;
                println!("Removed '{}'.", name);
            } else {
                println!("'{}' was not saved.", name);
            }
        }
    }

    Ok(())
}

/// Looks up a saved recipe, failing with a validation error if absent.
pub fn find_saved<S: KeyValueStore>(
    book: &RecipeBook<S>,
    name: &str,
) -> Result<Recipe, ValidationError> {
    book.find_recipe(name)
        .ok_or_else(|| ValidationError::new(ValidationErrorKind::UnknownRecipe(name.to_string())))
}

/// Picks the named recipes from the saved collection, or all of them.
///
/// Fails if a name is unknown or nothing is left to pick.
pub fn select_saved(saved: Vec<Recipe>, names: &[String]) -> Result<Vec<Recipe>, ValidationError> {
    let selected = if names.is_empty() {
        saved
    } else {
        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            let recipe = saved
                .iter()
                .find(|r| &r.recipe_name == name)
                .ok_or_else(|| {
                    ValidationError::new(ValidationErrorKind::UnknownRecipe(name.clone()))
                })?;
            if !selected.iter().any(|r: &Recipe| r.recipe_name == recipe.recipe_name) {
                selected.push(recipe.clone());
            }
        }
        selected
    };

    if selected.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::NoRecipes));
    }
    Ok(selected)
}
