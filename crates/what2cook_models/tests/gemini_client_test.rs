//! Tests for the Gemini client against a local mock server.
//!
//! The live test at the bottom needs GEMINI_API_KEY and runs only with
//! `--features api`.

use serde_json::json;
use what2cook_core::{ImageRequest, StructuredRequest};
use what2cook_error::{GenerationErrorKind, HttpErrorKind, ImageErrorKind, What2CookErrorKind};
use what2cook_interface::{ImageModel, TextModel};
use what2cook_models::GeminiClient;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn text_request() -> StructuredRequest {
    StructuredRequest::new(
        "gemini-2.5-flash",
        "Give me a recipe",
        json!({"type": "ARRAY", "items": {"type": "STRING"}}),
    )
}

#[tokio::test]
async fn test_generate_json_returns_candidate_text() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "  [\"dal\"]  "}]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", server.uri())?;
    let text = client.generate_json(&text_request()).await?;
    assert_eq!(text, "[\"dal\"]");

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body)?;
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Give me a recipe");
    assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    assert_eq!(body["generationConfig"]["responseSchema"]["type"], "ARRAY");
    Ok(())
}

#[tokio::test]
async fn test_generate_json_surfaces_service_message() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("bad-key", server.uri())?;
    let err = client.generate_json(&text_request()).await.unwrap_err();

    assert_eq!(
        err.kind,
        GenerationErrorKind::HttpError {
            status_code: 400,
            message: "API key not valid.".to_string(),
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_generate_json_without_candidates() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", server.uri())?;
    let err = client.generate_json(&text_request()).await.unwrap_err();
    assert_eq!(err.kind, GenerationErrorKind::EmptyResponse);
    Ok(())
}

#[tokio::test]
async fn test_generate_image_returns_payload() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/imagen-4.0-generate-001:predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "predictions": [{"bytesBase64Encoded": "/9j/4AAQ", "mimeType": "image/jpeg"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", server.uri())?;
    let request = ImageRequest::single_jpeg("imagen-4.0-generate-001", "A photo of dal");
    let image = client.generate_image(&request).await?;

    assert_eq!(image.data_uri(), "data:image/jpeg;base64,/9j/4AAQ");

    let requests = server.received_requests().await.unwrap_or_default();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body)?;
    assert_eq!(body["parameters"]["sampleCount"], 1);
    assert_eq!(body["parameters"]["aspectRatio"], "16:9");
    Ok(())
}

#[tokio::test]
async fn test_generate_image_filtered_is_missing_payload() -> Result<(), Box<dyn std::error::Error>>
{
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", server.uri())?;
    let request = ImageRequest::single_jpeg("imagen-4.0-generate-001", "A photo");
    let err = client.generate_image(&request).await.unwrap_err();
    assert_eq!(err.kind, ImageErrorKind::MissingPayload);
    Ok(())
}

#[test]
fn test_blank_key_is_rejected() {
    let err = GeminiClient::new("   ").unwrap_err();
    assert_eq!(err.category(), what2cook_error::ErrorCategory::Configuration);
}

#[test]
fn test_malformed_base_url_is_rejected() {
    for base_url in ["generativelanguage.googleapis.com/v1beta", "ftp://example.com"] {
        let err = GeminiClient::with_base_url("test-key", base_url).unwrap_err();
        assert_eq!(err.category(), what2cook_error::ErrorCategory::Configuration);
        match err.kind() {
            What2CookErrorKind::Http(e) => {
                assert!(matches!(e.kind, HttpErrorKind::InvalidBaseUrl { .. }), "{base_url}")
            }
            other => panic!("unexpected error for {base_url}: {other}"),
        }
    }
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_live_structured_generation() {
    dotenvy::dotenv().ok();
    let client = GeminiClient::from_env().expect("GEMINI_API_KEY must be set for API tests");

    let request = StructuredRequest::new(
        "gemini-2.5-flash",
        "List three common kitchen herbs.",
        json!({"type": "ARRAY", "items": {"type": "STRING"}}),
    );
    let text = client.generate_json(&request).await.expect("API call succeeded");
    let parsed: Vec<String> = serde_json::from_str(&text).expect("valid JSON array");
    assert!(!parsed.is_empty());
}
