//! Saved recipes and last-used ingredients.

use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};
use what2cook_core::Recipe;
use what2cook_error::{StorageError, StorageErrorKind};
use what2cook_interface::KeyValueStore;

/// Key holding the JSON array of saved recipes.
pub const RECIPES_KEY: &str = "what2cook_saved_recipes";

/// Key holding the JSON array of last-used ingredient names.
pub const INGREDIENTS_KEY: &str = "what2cook_saved_ingredients";

/// Persistence adapter for saved recipes and the last-used ingredient list.
///
/// Saved recipes behave like a set keyed by `recipe_name`: the first recipe
/// saved under a name wins and later saves under that name are ignored.
/// Corrupt stored data reads as empty and is logged, never surfaced.
///
/// # Examples
///
/// ```
/// use what2cook_storage::{MemoryStore, RecipeBook};
///
/// let book = RecipeBook::new(MemoryStore::new());
/// book.save_ingredients(&["paneer".to_string(), "spinach".to_string()]);
/// assert_eq!(
///     book.saved_ingredients(),
///     Some(vec!["paneer".to_string(), "spinach".to_string()])
/// );
/// assert!(book.saved_recipes().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct RecipeBook<S> {
    store: S,
}

impl<S: KeyValueStore> RecipeBook<S> {
    /// Wraps a key-value store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// All saved recipes in the order they were saved.
    ///
    /// Missing or unreadable data yields an empty list.
    #[instrument(skip(self))]
    pub fn saved_recipes(&self) -> Vec<Recipe> {
        let raw = match self.store.get(RECIPES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read saved recipes");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Recipe>>(&raw) {
            Ok(recipes) => {
                debug!(count = recipes.len(), "Loaded saved recipes");
                recipes
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse saved recipes, treating as empty");
                Vec::new()
            }
        }
    }

    /// Saves a recipe unless one with the same name is already saved.
    ///
    /// Returns `true` if the recipe was added.
    #[instrument(skip(self, recipe), fields(recipe = %recipe.recipe_name))]
    pub fn save_recipe(&self, recipe: &Recipe) -> Result<bool, StorageError> {
        let mut recipes = self.saved_recipes();
        if recipes.iter().any(|r| r.recipe_name == recipe.recipe_name) {
            debug!("Recipe already saved, leaving collection unchanged");
            return Ok(false);
        }

        recipes.push(recipe.clone());
        self.write_recipes(&recipes)?;
        info!(total = recipes.len(), "Recipe saved");
        Ok(true)
    }

    /// Removes every saved recipe with this name. Unknown names are a no-op.
    #[instrument(skip(self))]
    pub fn remove_recipe(&self, recipe_name: &str) -> Result<(), StorageError> {
        let recipes: Vec<Recipe> = self
            .saved_recipes()
            .into_iter()
            .filter(|r| r.recipe_name != recipe_name)
            .collect();
        self.write_recipes(&recipes)?;
        info!(remaining = recipes.len(), "Recipe removed");
        Ok(())
    }

    /// Looks up a saved recipe by name.
    pub fn find_recipe(&self, recipe_name: &str) -> Option<Recipe> {
        self.saved_recipes()
            .into_iter()
            .find(|r| r.recipe_name == recipe_name)
    }

    /// Whether a recipe with this name is saved.
    pub fn is_saved(&self, recipe_name: &str) -> bool {
        self.saved_recipes()
            .iter()
            .any(|r| r.recipe_name == recipe_name)
    }

    /// Names of all saved recipes.
    pub fn saved_names(&self) -> BTreeSet<String> {
        self.saved_recipes()
            .into_iter()
            .map(|r| r.recipe_name)
            .collect()
    }

    /// The ingredient list from the previous session, if one was stored.
    #[instrument(skip(self))]
    pub fn saved_ingredients(&self) -> Option<Vec<String>> {
        let raw = match self.store.get(INGREDIENTS_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "Failed to read saved ingredients");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(ingredients) => Some(ingredients),
            Err(e) => {
                warn!(error = %e, "Failed to parse saved ingredients");
                None
            }
        }
    }

    /// Remembers the ingredient list for the next session.
    ///
    /// Failures are logged and otherwise ignored.
    #[instrument(skip(self, ingredients), fields(count = ingredients.len()))]
    pub fn save_ingredients(&self, ingredients: &[String]) {
        let result = serde_json::to_string(ingredients)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialization(e.to_string())))
            .and_then(|json| self.store.set(INGREDIENTS_KEY, &json));

        if let Err(e) = result {
            warn!(error = %e, "Failed to save ingredients");
        }
    }

    fn write_recipes(&self, recipes: &[Recipe]) -> Result<(), StorageError> {
        let json = serde_json::to_string(recipes)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialization(e.to_string())))?;
        self.store.set(RECIPES_KEY, &json)
    }
}
