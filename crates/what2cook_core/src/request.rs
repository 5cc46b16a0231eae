//! Request and response types for the generative model capabilities.

use serde::{Deserialize, Serialize};

/// Model used for recipe and shopping-list text.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Model used for recipe photos.
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";

/// MIME type requested for generated images.
pub const JPEG_MIME: &str = "image/jpeg";

/// Aspect ratio requested for generated images.
pub const LANDSCAPE_ASPECT_RATIO: &str = "16:9";

/// A prompt whose answer must be JSON conforming to `schema`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredRequest {
    /// Model identifier, e.g. "gemini-2.5-flash"
    pub model: String,
    /// Natural-language instruction
    pub prompt: String,
    /// Response schema in the service's schema dialect
    pub schema: serde_json::Value,
    /// Ask the service to answer with strict JSON
    pub strict_json: bool,
}

impl StructuredRequest {
    /// Creates a strict-JSON request.
    pub fn new(
        model: impl Into<String>,
        prompt: impl Into<String>,
        schema: serde_json::Value,
    ) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            schema,
            strict_json: true,
        }
    }
}

/// A request for generated images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    /// Model identifier, e.g. "imagen-4.0-generate-001"
    pub model: String,
    /// Description of the picture
    pub prompt: String,
    /// Number of images to generate
    pub count: u32,
    /// Output MIME type
    pub mime_type: String,
    /// Output aspect ratio, e.g. "16:9"
    pub aspect_ratio: String,
}

impl ImageRequest {
    /// One landscape JPEG.
    pub fn single_jpeg(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            count: 1,
            mime_type: JPEG_MIME.to_string(),
            aspect_ratio: LANDSCAPE_ASPECT_RATIO.to_string(),
        }
    }
}

/// A generated image as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// MIME type of the image
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub base64_data: String,
}

impl GeneratedImage {
    /// Encodes the image as a `data:` URI.
    ///
    /// # Examples
    ///
    /// ```
    /// use what2cook_core::GeneratedImage;
    ///
    /// let image = GeneratedImage {
    ///     mime_type: "image/jpeg".to_string(),
    ///     base64_data: "AAAA".to_string(),
    /// };
    /// assert_eq!(image.data_uri(), "data:image/jpeg;base64,AAAA");
    /// ```
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64_data)
    }
}
