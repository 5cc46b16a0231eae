//! Trait definitions for the What2Cook recipe generator.
//!
//! The pipeline talks to the generative service and to local persistence only
//! through these traits, so tests can substitute in-process fakes.

mod model;
mod store;

pub use model::{ImageModel, TextModel};
pub use store::KeyValueStore;
