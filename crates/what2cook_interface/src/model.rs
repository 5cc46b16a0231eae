//! Generative model capabilities.

use async_trait::async_trait;
use std::sync::Arc;
use what2cook_core::{GeneratedImage, ImageRequest, StructuredRequest};
use what2cook_error::{GenerationError, ImageError};

/// Text generation constrained to a response schema.
///
/// Implementations return the raw response text; parsing and validation
/// belong to the caller.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Sends the prompt and schema, returning the model's JSON text.
    async fn generate_json(&self, request: &StructuredRequest) -> Result<String, GenerationError>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;
}

/// Image generation.
#[async_trait]
pub trait ImageModel: Send + Sync {
    /// Generates one image for the prompt.
    ///
    /// A response without image bytes is an error, not an empty success.
    async fn generate_image(&self, request: &ImageRequest) -> Result<GeneratedImage, ImageError>;
}

#[async_trait]
impl<T: TextModel + ?Sized> TextModel for Arc<T> {
    async fn generate_json(&self, request: &StructuredRequest) -> Result<String, GenerationError> {
        (**self).generate_json(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}

#[async_trait]
impl<T: ImageModel + ?Sized> ImageModel for Arc<T> {
    async fn generate_image(&self, request: &ImageRequest) -> Result<GeneratedImage, ImageError> {
        (**self).generate_image(request).await
    }
}
