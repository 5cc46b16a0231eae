//! Gemini REST client.
//!
//! Text goes through `models/{model}:generateContent` with a response schema;
//! images go through `models/{model}:predict`.

mod client;
mod conversions;
mod dto;

pub use client::{GeminiClient, api_key_from_env};
pub use what2cook_core::{DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Older variable name, still honoured.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

/// Base URL of the generative language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
