//! Terminal rendering and error presentation.

use what2cook::{ErrorCategory, Recipe, What2CookError};

/// Formats a recipe card for the terminal.
pub fn recipe_card(recipe: &Recipe, saved: bool) -> String {
    let mut card = format!("== {}", recipe.recipe_name);
    if saved {
        card.push_str(" [saved]");
    }
    card.push_str(&format!(
        "\n{}\nPrep: {} | Cook: {} | Serves: {}\n",
        recipe.description, recipe.prep_time, recipe.cook_time, recipe.servings
    ));
    card.push_str(if recipe.has_image() {
        "Photo: generated\n"
    } else {
        "Photo: none\n"
    });

    card.push_str("\nIngredients:\n");
    for ingredient in &recipe.ingredients {
        card.push_str(&format!("  - {} {}\n", ingredient.quantity, ingredient.name));
    }

    card.push_str("\nInstructions:\n");
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        card.push_str(&format!("  {}. {}\n", step + 1, instruction));
    }
    card
}

/// One-line summary used in listings.
pub fn recipe_summary(recipe: &Recipe) -> String {
    format!(
        "{} ({} prep, {} cook, {})",
        recipe.recipe_name, recipe.prep_time, recipe.cook_time, recipe.servings
    )
}

/// The message shown for a failed command.
pub fn error_message(err: &What2CookError) -> String {
    let message = err.user_message();
    match err.category() {
        ErrorCategory::Configuration => format!("Configuration error: {}", message),
        ErrorCategory::Validation => message,
        ErrorCategory::Generation => format!("Failed to generate from the API: {}", message),
        ErrorCategory::Image | ErrorCategory::Storage => format!("Error: {}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use what2cook::{ConfigError, ConfigErrorKind, Ingredient, ValidationError, ValidationErrorKind};

    fn recipe() -> Recipe {
        Recipe {
            recipe_name: "Masala Omelette".to_string(),
            description: "Spiced eggs.".to_string(),
            prep_time: "5 minutes".to_string(),
            cook_time: "5 minutes".to_string(),
            servings: "1 serving".to_string(),
            ingredients: vec![Ingredient::new("eggs", "2")],
            instructions: vec!["Whisk.".to_string(), "Fry.".to_string()],
            image_url: None,
        }
    }

    #[test]
    fn test_card_marks_saved_recipes() {
        let card = recipe_card(&recipe(), true);
        assert!(card.starts_with("== Masala Omelette [saved]\n"));
        assert!(card.contains("  - 2 eggs\n"));
        assert!(card.contains("  2. Fry.\n"));
        assert!(card.contains("Photo: none"));
        assert!(!recipe_card(&recipe(), false).contains("[saved]"));
    }

    #[test]
    fn test_error_messages_by_category() {
        let err = ValidationError::new(ValidationErrorKind::NoIngredients).into();
        assert_eq!(error_message(&err), "Please provide at least one ingredient.");

        let err = ConfigError::new(ConfigErrorKind::MissingApiKey).into();
        assert!(error_message(&err).starts_with("Configuration error: GEMINI_API_KEY"));
    }
}
