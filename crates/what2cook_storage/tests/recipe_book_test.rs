//! Tests for the recipe persistence adapter.

use what2cook_core::{Ingredient, Recipe};
use what2cook_interface::KeyValueStore;
use what2cook_storage::{INGREDIENTS_KEY, MemoryStore, RECIPES_KEY, RecipeBook};

fn create_test_recipe(name: &str, description: &str) -> Recipe {
    Recipe {
        recipe_name: name.to_string(),
        description: description.to_string(),
        prep_time: "10 minutes".to_string(),
        cook_time: "20 minutes".to_string(),
        servings: "2 servings".to_string(),
        ingredients: vec![Ingredient::new("onion", "1")],
        instructions: vec!["Chop the onion.".to_string()],
        image_url: None,
    }
}

#[test]
fn test_empty_store_has_no_recipes() {
    let book = RecipeBook::new(MemoryStore::new());
    assert!(book.saved_recipes().is_empty());
    assert_eq!(book.saved_ingredients(), None);
}

#[test]
fn test_save_and_load_preserves_order() {
    let book = RecipeBook::new(MemoryStore::new());
    assert!(book.save_recipe(&create_test_recipe("A", "first")).unwrap());
    assert!(book.save_recipe(&create_test_recipe("B", "second")).unwrap());

    let names: Vec<_> = book
        .saved_recipes()
        .into_iter()
        .map(|r| r.recipe_name)
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn test_save_is_idempotent_and_first_write_wins() {
    let book = RecipeBook::new(MemoryStore::new());
    book.save_recipe(&create_test_recipe("Dal", "original")).unwrap();
    let before = book.store().get(RECIPES_KEY).unwrap();

    let added = book.save_recipe(&create_test_recipe("Dal", "replacement")).unwrap();

    assert!(!added);
    assert_eq!(book.store().get(RECIPES_KEY).unwrap(), before);
    let saved = book.saved_recipes();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].description, "original");
}

#[test]
fn test_remove_recipe() {
    let book = RecipeBook::new(MemoryStore::new());
    book.save_recipe(&create_test_recipe("A", "a")).unwrap();
    book.save_recipe(&create_test_recipe("B", "b")).unwrap();

    book.remove_recipe("A").unwrap();

    assert!(!book.is_saved("A"));
    assert!(book.is_saved("B"));
    assert!(book.saved_recipes().iter().all(|r| r.recipe_name != "A"));
}

#[test]
fn test_remove_missing_recipe_is_noop() {
    let book = RecipeBook::new(MemoryStore::new());
    book.save_recipe(&create_test_recipe("A", "a")).unwrap();

    book.remove_recipe("does not exist").unwrap();

    assert_eq!(book.saved_recipes().len(), 1);
}

#[test]
fn test_corrupt_recipes_read_as_empty() {
    let store = MemoryStore::new();
    store.set(RECIPES_KEY, "{not json").unwrap();
    let book = RecipeBook::new(store);

    assert!(book.saved_recipes().is_empty());

    // Saving over corrupt data starts a fresh collection
    book.save_recipe(&create_test_recipe("Fresh", "new")).unwrap();
    assert_eq!(book.saved_recipes().len(), 1);
}

#[test]
fn test_image_url_survives_round_trip() {
    let book = RecipeBook::new(MemoryStore::new());
    let recipe = create_test_recipe("Pic", "with image").with_image_url("data:image/jpeg;base64,AAAA");
    book.save_recipe(&recipe).unwrap();

    assert_eq!(book.find_recipe("Pic"), Some(recipe));
    assert_eq!(book.find_recipe("Nope"), None);
}

#[test]
fn test_ingredients_round_trip() {
    let book = RecipeBook::new(MemoryStore::new());
    let list = vec!["spinach".to_string(), "paneer".to_string(), "garlic".to_string()];

    book.save_ingredients(&list);

    assert_eq!(book.saved_ingredients(), Some(list));
}

#[test]
fn test_corrupt_ingredients_read_as_none() {
    let store = MemoryStore::new();
    store.set(INGREDIENTS_KEY, "[1, 2").unwrap();
    let book = RecipeBook::new(store);

    assert_eq!(book.saved_ingredients(), None);
}

#[test]
fn test_saved_names() {
    let book = RecipeBook::new(MemoryStore::new());
    book.save_recipe(&create_test_recipe("Beta", "b")).unwrap();
    book.save_recipe(&create_test_recipe("Alpha", "a")).unwrap();

    let names: Vec<_> = book.saved_names().into_iter().collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
}
