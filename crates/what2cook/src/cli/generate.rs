//! Generate command handler.

use super::GenerateArgs;
use super::display::recipe_card;
use std::sync::Arc;
use tracing::{info, instrument};
use what2cook::{
    Cuisine, DEFAULT_INGREDIENTS, FormData, GeminiClient, RecipeGenerator, Settings,
    What2CookResult,
};

/// Builds the form from arguments, falling back to the last non-empty
/// ingredient list and then to the defaults.
pub fn build_form(args: &GenerateArgs, saved_ingredients: Option<Vec<String>>) -> FormData {
    let ingredients = if args.ingredients.is_empty() {
        saved_ingredients
            .filter(|saved| !saved.is_empty())
            .unwrap_or_else(|| DEFAULT_INGREDIENTS.iter().map(|s| s.to_string()).collect())
    } else {
        args.ingredients.clone()
    };

    let mut form = FormData::new(ingredients)
        .with_meal_type(args.meal)
        .with_cuisine(args.cuisine)
        .with_diet(args.diet);

    if let Some(region) = args.region.filter(|_| args.cuisine == Cuisine::Indian) {
        form = form.with_indian_region(region);
    }
    if let Some(request) = &args.request {
        form = form.with_special_requests(request.as_str());
    }
    form
}

/// Builds a generator from settings. The API key is read here.
pub fn build_generator(settings: &Settings, with_images: bool) -> What2CookResult<RecipeGenerator> {
    let client = Arc::new(GeminiClient::from_env_with_base_url(settings.base_url())?);
    let generator = RecipeGenerator::new(client.clone(), settings.generation_options()?);

    Ok(if with_images && *settings.generate_images() {
        generator.with_image_model(client)
    } else {
        generator
    })
}

/// Handles the generate command.
#[instrument(skip_all, fields(ingredients = args.ingredients.len(), save = args.save))]
pub async fn handle_generate(settings: &Settings, args: GenerateArgs) -> What2CookResult<()> {
    let book = settings.recipe_book();
    let form = build_form(&args, book.saved_ingredients());
    if !form.ingredients().is_empty() {
        book.save_ingredients(form.ingredients());
    }

    println!("Cooking up ideas with: {}", form.ingredients().join(", "));

    let generator = build_generator(settings, !args.no_images)?;
    let recipes = generator.generate_recipes(&form).await?;

    if recipes.is_empty() {
        println!("No recipes found. Try different ingredients or preferences.");
        return Ok(());
    }

    for recipe in &recipes {
        if args.save {
            book.save_recipe(recipe)?;
        }
        println!("\n{}", recipe_card(recipe, book.is_saved(&recipe.recipe_name)));
    }

    info!(count = recipes.len(), "Generate command finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use what2cook::{Diet, IndianRegion, MealType};

    fn args(ingredients: &[&str]) -> GenerateArgs {
        GenerateArgs {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            meal: MealType::Dinner,
            cuisine: Cuisine::Indian,
            region: None,
            diet: Diet::Vegetarian,
            request: None,
            save: false,
            no_images: false,
        }
    }

    #[test]
    fn test_explicit_ingredients_win() {
        let form = build_form(&args(&["Rice", "rice", "Dal"]), Some(vec!["egg".to_string()]));
        assert_eq!(*form.ingredients(), ["rice", "dal"]);
    }

    #[test]
    fn test_saved_then_default_ingredients() {
        let form = build_form(&args(&[]), Some(vec!["egg".to_string()]));
        assert_eq!(*form.ingredients(), ["egg"]);

        let form = build_form(&args(&[]), None);
        assert_eq!(*form.ingredients(), DEFAULT_INGREDIENTS);
    }

    #[test]
    fn test_empty_saved_list_falls_back_to_defaults() {
        let form = build_form(&args(&[]), Some(Vec::new()));
        assert_eq!(*form.ingredients(), DEFAULT_INGREDIENTS);
    }

    #[test]
    fn test_blank_explicit_ingredients_stay_empty() {
        let form = build_form(&args(&["   "]), Some(vec!["egg".to_string()]));
        assert!(form.ingredients().is_empty());
    }

    #[test]
    fn test_region_ignored_outside_indian_cuisine() {
        let mut a = args(&["tofu"]);
        a.cuisine = Cuisine::Thai;
        a.region = Some(IndianRegion::South);
        assert_eq!(*build_form(&a, None).indian_region(), None);

        a.cuisine = Cuisine::Indian;
        assert_eq!(*build_form(&a, None).indian_region(), Some(IndianRegion::South));
    }
}
