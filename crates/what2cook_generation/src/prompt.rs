//! Natural-language instructions sent to the text and image models.

use what2cook_core::{Cuisine, Diet, FormData, Recipe};

/// Number of recipes requested per generation.
pub const RECIPE_COUNT: usize = 2;

/// Builds the recipe instruction for a form.
///
/// # Examples
///
/// ```
/// use what2cook_core::{Cuisine, Diet, FormData, MealType};
/// use what2cook_generation::recipe_prompt;
///
/// let form = FormData::new(["eggs", "tomato"])
///     .with_meal_type(MealType::Breakfast)
///     .with_cuisine(Cuisine::Any)
///     .with_diet(Diet::None);
///
/// let prompt = recipe_prompt(&form);
/// assert!(prompt.starts_with("Generate 2 creative and delicious recipes for a Breakfast."));
/// assert!(prompt.contains("eggs, tomato"));
/// assert!(!prompt.contains("cuisine."));
/// ```
pub fn recipe_prompt(form: &FormData) -> String {
    let diet = match form.diet() {
        Diet::None => String::new(),
        diet => format!(" that is {}", diet),
    };

    let mut lines = vec![format!(
        "Generate {} creative and delicious recipes for a {}{}.",
        RECIPE_COUNT, form.meal_type(), diet
    )];

    if let Some(line) = cuisine_instruction(form) {
        lines.push(line);
    }

    lines.push(format!(
        "The user has the following ingredients available: {}.",
        form.ingredients().join(", ")
    ));

    if let Some(request) = form
        .special_requests()
        .as_deref()
        .filter(|request| !request.trim().is_empty())
    {
        lines.push(format!(
            "IMPORTANT: The user has a special request: \"{}\". Please adhere to it.",
            request
        ));
    }

    lines.push(
        "The recipes should primarily use these ingredients, but you can include a few common \
         pantry staples if necessary (like oil, salt, pepper, spices)."
            .to_string(),
    );
    lines.push(
        "For each recipe, provide a name, a short description, prep time, cook time, servings, \
         a list of ingredients with quantities, and step-by-step instructions."
            .to_string(),
    );
    lines.push("Ensure the final output strictly adheres to the provided JSON schema.".to_string());

    lines.join("\n")
}

fn cuisine_instruction(form: &FormData) -> Option<String> {
    if *form.cuisine() == Cuisine::Any {
        return None;
    }

    Some(match form.region_restriction() {
        Some(region) => format!(
            "The recipes MUST be authentic {} Indian cuisine. Do not suggest recipes from other regions of India.",
            region
        ),
        None => format!("The recipes should be in the style of {} cuisine.", form.cuisine()),
    })
}

/// Builds the photo prompt for a recipe.
pub fn image_prompt(recipe: &Recipe) -> String {
    format!(
        "A delicious, professional food photograph of \"{}\". {}. The image should be vibrant, \
         appetizing, and well-lit with a clean background.",
        recipe.recipe_name,
        recipe.description.trim().trim_end_matches('.')
    )
}

/// Builds the consolidation instruction for a set of recipes.
///
/// Only names and ingredient lines are included. Quantities are passed
/// through exactly as the recipes state them.
pub fn shopping_list_prompt(recipes: &[Recipe]) -> String {
    let mut prompt = String::from(
        "Create a single consolidated grocery shopping list for the following recipes.\n",
    );

    for recipe in recipes {
        prompt.push_str(&format!("\nRecipe: {}\n", recipe.recipe_name));
        for ingredient in &recipe.ingredients {
            prompt.push_str(&format!("- {} {}\n", ingredient.quantity, ingredient.name));
        }
    }

    prompt.push_str(
        "\nInstructions:\n\
         1. Combine identical ingredients across recipes and merge their quantities using ordinary \
         unit arithmetic where possible (for example, \"1 onion\" and \"1/2 onion\" become \
         \"1 1/2 onions\").\n\
         2. Group the items into grocery store categories such as Produce, Dairy & Eggs, \
         Meat & Fish, Pantry Staples and Spices.\n\
         3. For each item, give the typical size it is sold in at a store (for example \
         \"1 bunch\" or \"1 small jar\").\n\
         4. Leave out near-universal staples like salt, pepper and water unless a recipe names a \
         specific kind (for example \"sea salt\" or \"black peppercorns\").\n\
         Ensure the final output strictly adheres to the provided JSON schema.",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use what2cook_core::{Ingredient, IndianRegion, MealType};

    fn recipe(name: &str, ingredients: Vec<Ingredient>) -> Recipe {
        Recipe {
            recipe_name: name.to_string(),
            description: "A hearty dish.".to_string(),
            prep_time: "10 minutes".to_string(),
            cook_time: "20 minutes".to_string(),
            servings: "2 servings".to_string(),
            ingredients,
            instructions: vec!["Cook it.".to_string()],
            image_url: None,
        }
    }

    #[test]
    fn test_north_indian_prompt_forbids_other_regions() {
        let form = FormData::new(["paneer", "spinach"])
            .with_meal_type(MealType::Dinner)
            .with_cuisine(Cuisine::Indian)
            .with_diet(Diet::Vegetarian)
            .with_indian_region(IndianRegion::North);

        let prompt = recipe_prompt(&form);
        assert!(prompt.contains("for a Dinner that is Vegetarian."));
        assert!(prompt.contains("The recipes MUST be authentic North Indian cuisine."));
        assert!(prompt.contains("Do not suggest recipes from other regions of India."));
        assert!(!prompt.contains("in the style of"));
        assert!(prompt.contains("paneer, spinach"));
    }

    #[test]
    fn test_indian_any_region_uses_generic_style() {
        let form = FormData::new(["rice"])
            .with_cuisine(Cuisine::Indian)
            .with_indian_region(IndianRegion::Any);

        let prompt = recipe_prompt(&form);
        assert!(prompt.contains("The recipes should be in the style of Indian cuisine."));
        assert!(!prompt.contains("MUST be authentic"));
    }

    #[test]
    fn test_no_diet_phrase_for_none() {
        let form = FormData::new(["rice"]).with_diet(Diet::None);
        assert!(recipe_prompt(&form).contains("recipes for a Dinner.\n"));
    }

    #[test]
    fn test_special_request_is_verbatim() {
        let form = FormData::new(["rice"]).with_special_requests("make it spicy, no nuts");
        let prompt = recipe_prompt(&form);
        assert!(prompt.contains(
            "IMPORTANT: The user has a special request: \"make it spicy, no nuts\". Please adhere to it."
        ));

        let form = FormData::new(["rice"]);
        assert!(!recipe_prompt(&form).contains("IMPORTANT"));
    }

    #[test]
    fn test_image_prompt_mentions_name_and_description() {
        let prompt = image_prompt(&recipe("Dal Tadka", vec![]));
        assert!(prompt.starts_with("A delicious, professional food photograph of \"Dal Tadka\". A hearty dish. "));
    }

    #[test]
    fn test_shopping_prompt_keeps_source_quantities() {
        let recipes = vec![
            recipe("Onion Bhaji", vec![Ingredient::new("onion", "1")]),
            recipe("Onion Raita", vec![Ingredient::new("onion", "1/2")]),
        ];

        let prompt = shopping_list_prompt(&recipes);
        assert!(prompt.contains("Recipe: Onion Bhaji\n- 1 onion\n"));
        assert!(prompt.contains("Recipe: Onion Raita\n- 1/2 onion\n"));
        assert!(prompt.contains("merge their quantities"));
        assert!(!prompt.contains("A hearty dish."));
    }
}
