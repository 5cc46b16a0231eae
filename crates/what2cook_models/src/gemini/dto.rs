//! Wire types for the generative language API.

use serde::{Deserialize, Serialize};

/// A content block in a request or response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A content part. Only text parts are produced or consumed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Text of the part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Set on reasoning parts that are not part of the answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

/// Output constraints for `generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// "application/json" for strict JSON output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Schema the JSON output must satisfy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

/// `generateContent` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns
    pub contents: Vec<Content>,
    /// Output constraints
    pub generation_config: GenerationConfig,
}

/// Why a prompt was refused.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Block reason, e.g. "SAFETY"
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// A response candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,
    /// Reason generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// `generateContent` response body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates, usually one
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Present when the prompt was refused
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// One prompt for `predict`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictInstance {
    /// Image description
    pub prompt: String,
}

/// Image encoding options.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    /// e.g. "image/jpeg"
    pub mime_type: String,
}

/// Image generation parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters {
    /// Number of images
    pub sample_count: u32,
    /// e.g. "16:9"
    pub aspect_ratio: String,
    /// Encoding options
    pub output_options: OutputOptions,
}

/// `predict` request body.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    /// Prompts
    pub instances: Vec<PredictInstance>,
    /// Parameters
    pub parameters: PredictParameters,
}

/// A generated image.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Base64 image bytes
    #[serde(default)]
    pub bytes_base64_encoded: Option<String>,
    /// MIME type of the image
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// `predict` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    /// Generated images; absent when everything was filtered
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    /// Error details
    pub error: ErrorBody,
}

/// Error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message
    #[serde(default)]
    pub message: String,
}
