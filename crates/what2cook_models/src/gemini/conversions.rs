//! Conversions between What2Cook request types and the wire format.

use super::dto::{
    Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    OutputOptions, Part, PredictInstance, PredictParameters, PredictRequest, PredictResponse,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use what2cook_core::{GeneratedImage, ImageRequest, StructuredRequest};
use what2cook_error::{GenerationError, GenerationErrorKind, ImageError, ImageErrorKind};

const JSON_MIME: &str = "application/json";

/// Builds a `generateContent` body from a structured request.
pub fn to_generate_content(req: &StructuredRequest) -> GenerateContentRequest {
    let generation_config = if req.strict_json {
        GenerationConfig {
            response_mime_type: Some(JSON_MIME.to_string()),
            response_schema: Some(req.schema.clone()),
        }
    } else {
        GenerationConfig {
            response_mime_type: None,
            response_schema: None,
        }
    };

    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(req.prompt.clone()),
                thought: None,
            }],
        }],
        generation_config,
    }
}

/// Extracts the answer text from the first candidate.
///
/// Reasoning parts are skipped. A refused prompt or a candidate without text
/// is an error.
pub fn from_generate_content(
    response: &GenerateContentResponse,
) -> Result<String, GenerationError> {
    let text: String = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter(|part| part.thought != Some(true))
                .filter_map(|part| part.text.as_deref())
                .collect()
        })
        .unwrap_or_default();

    if !text.trim().is_empty() {
        return Ok(text.trim().to_string());
    }

    match response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.clone())
    {
        Some(reason) => Err(GenerationError::new(GenerationErrorKind::Blocked(reason))),
        None => Err(GenerationError::new(GenerationErrorKind::EmptyResponse)),
    }
}

/// Builds a `predict` body from an image request.
pub fn to_predict(req: &ImageRequest) -> PredictRequest {
    PredictRequest {
        instances: vec![PredictInstance {
            prompt: req.prompt.clone(),
        }],
        parameters: PredictParameters {
            sample_count: req.count,
            aspect_ratio: req.aspect_ratio.clone(),
            output_options: OutputOptions {
                mime_type: req.mime_type.clone(),
            },
        },
    }
}

/// Takes the first image from a `predict` response.
///
/// The payload must be present and decode as base64.
pub fn from_predict(
    response: PredictResponse,
    requested_mime: &str,
) -> Result<GeneratedImage, ImageError> {
    let prediction = response
        .predictions
        .into_iter()
        .next()
        .ok_or_else(|| ImageError::new(ImageErrorKind::MissingPayload))?;

    let data = prediction
        .bytes_base64_encoded
        .filter(|data| !data.is_empty())
        .ok_or_else(|| ImageError::new(ImageErrorKind::MissingPayload))?;

    STANDARD
        .decode(data.as_bytes())
        .map_err(|e| ImageError::new(ImageErrorKind::InvalidPayload(e.to_string())))?;

    Ok(GeneratedImage {
        mime_type: prediction
            .mime_type
            .unwrap_or_else(|| requested_mime.to_string()),
        base64_data: data,
    })
}

/// Pulls the service's message out of an error body, falling back to the raw text.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .ok()
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| body.trim().to_string())
}
