//! Core data types for the What2Cook recipe generator.
//!
//! This crate provides the domain model shared by every other crate: the form a
//! user fills in, the recipes and shopping lists that come back, the request
//! shapes sent to the generative model, and plain-text renderings for sharing.

mod form;
mod observability;
mod recipe;
mod request;
pub mod share;
mod shopping;

pub use form::{
    Cuisine, DEFAULT_INGREDIENTS, Diet, FormData, IndianRegion, MealType, normalize_ingredients,
};
pub use observability::init_tracing;
pub use recipe::{Ingredient, Recipe};
pub use request::{
    DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, GeneratedImage, ImageRequest, JPEG_MIME,
    LANDSCAPE_ASPECT_RATIO, StructuredRequest,
};
pub use share::{EmailMessage, ShareTarget};
pub use shopping::{ShoppingList, ShoppingListCategory, ShoppingListItem};
