//! Recipe generation and shopping list aggregation for What2Cook.
//!
//! [`RecipeGenerator`] turns a [`FormData`](what2cook_core::FormData) into
//! recipes through any [`TextModel`](what2cook_interface::TextModel), then
//! asks an optional [`ImageModel`](what2cook_interface::ImageModel) for one
//! photo per recipe. [`ShoppingListBuilder`] consolidates the ingredients of
//! saved recipes into a categorized list.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use what2cook_core::FormData;
//! use what2cook_generation::{GenerationOptions, RecipeGenerator};
//! # use what2cook_interface::TextModel;
//! # async fn run(model: Arc<dyn TextModel>) -> what2cook_error::What2CookResult<()> {
//! let generator = RecipeGenerator::new(model, GenerationOptions::default());
//! let recipes = generator
//!     .generate_recipes(&FormData::new(["paneer", "spinach"]))
//!     .await?;
//! for recipe in &recipes {
//!     println!("{}", recipe.recipe_name);
//! }
//! # Ok(())
//! # }
//! ```

mod options;
mod parse;
mod prompt;
mod recipes;
mod schema;
mod shopping;

pub use options::{
    DEFAULT_IMAGE_DELAY, GenerationOptions, GenerationOptionsBuilder,
    GenerationOptionsBuilderError,
};
pub use parse::{parse_recipes, parse_shopping_list};
pub use prompt::{RECIPE_COUNT, image_prompt, recipe_prompt, shopping_list_prompt};
pub use recipes::RecipeGenerator;
pub use schema::{recipe_schema, shopping_list_schema};
pub use shopping::ShoppingListBuilder;
