//! What2Cook: recipe ideas from the ingredients you already have.
//!
//! This crate re-exports the workspace crates under one name and adds the
//! application [`Settings`]. The `what2cook` binary is a terminal front end
//! over the same API.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use what2cook::{FormData, GeminiClient, RecipeGenerator, Settings};
//!
//! # async fn run() -> what2cook::What2CookResult<()> {
//! let settings = Settings::load(None)?;
//! let client = Arc::new(GeminiClient::from_env_with_base_url(settings.base_url())?);
//! let generator = RecipeGenerator::new(client.clone(), settings.generation_options()?)
//!     .with_image_model(client);
//!
//! let recipes = generator
//!     .generate_recipes(&FormData::new(["paneer", "spinach"]))
//!     .await?;
//! settings.recipe_book().save_recipe(&recipes[0])?;
//! # Ok(())
//! # }
//! ```

mod settings;

pub use settings::{DEFAULT_CONFIG_FILE, ENV_PREFIX, Settings};

pub use what2cook_core::*;
pub use what2cook_error::*;
pub use what2cook_generation::*;
pub use what2cook_interface::*;
pub use what2cook_models::*;
pub use what2cook_storage::*;
