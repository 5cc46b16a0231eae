//! Validation of model output into domain types.

use serde_json::Value;
use tracing::{debug, warn};
use what2cook_core::{Recipe, ShoppingList};
use what2cook_error::{GenerationError, GenerationErrorKind};

/// Removes a surrounding Markdown code fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.strip_suffix("```").unwrap_or(rest);
    // Drop the info string ("json") on the opening line.
    match body.split_once('\n') {
        Some((_, inner)) => inner.trim(),
        None => body.trim(),
    }
}

/// Parses the text model's answer into recipes.
///
/// Text that is not JSON, `null`, and an empty array all mean "no recipes"
/// and yield an empty list. JSON of the wrong shape is a
/// [`GenerationErrorKind::SchemaMismatch`].
pub fn parse_recipes(text: &str) -> Result<Vec<Recipe>, GenerationError> {
    let value: Value = match serde_json::from_str(strip_code_fence(text)) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Model output is not JSON, treating as no recipes");
            return Ok(Vec::new());
        }
    };

    let records = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(records) => records,
        other => {
            return Err(GenerationError::new(GenerationErrorKind::SchemaMismatch(
                format!("expected an array of recipes, got {}", json_type(&other)),
            )));
        }
    };

    let mut recipes = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let mut recipe: Recipe = serde_json::from_value(record).map_err(|e| {
            GenerationError::new(GenerationErrorKind::SchemaMismatch(format!(
                "recipe {}: {}",
                index + 1,
                e
            )))
        })?;

        if recipe.recipe_name.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::SchemaMismatch(
                format!("recipe {}: recipeName is empty", index + 1),
            )));
        }

        // Images are attached later, never taken from the model.
        recipe.image_url = None;
        recipes.push(recipe);
    }

    debug!(count = recipes.len(), "Parsed recipes");
    Ok(recipes)
}

/// Parses the text model's answer into a shopping list.
///
/// Anything that does not yield at least one item is `None`.
pub fn parse_shopping_list(text: &str) -> Option<ShoppingList> {
    let list: ShoppingList = match serde_json::from_str(strip_code_fence(text)) {
        Ok(list) => list,
        Err(e) => {
            warn!(error = %e, "Shopping list output did not parse");
            return None;
        }
    };

    if list.is_empty() {
        debug!("Shopping list has no items");
        return None;
    }

    Some(list)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
