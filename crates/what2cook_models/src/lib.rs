//! Generative model integrations for What2Cook.
//!
//! Only Google's generative language API is supported: Gemini for structured
//! text and Imagen for pictures, both reached through [`GeminiClient`].

mod gemini;

pub use gemini::{
    API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, FALLBACK_API_KEY_ENV,
    GeminiClient, api_key_from_env,
};
