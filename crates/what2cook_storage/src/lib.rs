//! Local persistence for What2Cook.
//!
//! [`RecipeBook`] is the persistence adapter the rest of the application uses.
//! It stores each logical collection as one JSON value in a [`KeyValueStore`]:
//! [`MemoryStore`] for tests and throwaway sessions, [`FileStore`] for the CLI.
//!
//! [`KeyValueStore`]: what2cook_interface::KeyValueStore

mod file;
mod memory;
mod recipe_book;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use recipe_book::{INGREDIENTS_KEY, RECIPES_KEY, RecipeBook};
