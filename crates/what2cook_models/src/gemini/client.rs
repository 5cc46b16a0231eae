//! HTTP client for the generative language API.

use super::conversions;
use super::dto::{GenerateContentResponse, PredictResponse};
use super::{API_KEY_ENV, DEFAULT_BASE_URL, FALLBACK_API_KEY_ENV};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, error, instrument};
use what2cook_core::{GeneratedImage, ImageRequest, StructuredRequest};
use what2cook_error::{
    ConfigError, ConfigErrorKind, GenerationError, GenerationErrorKind, HttpError, HttpErrorKind,
    ImageError, ImageErrorKind, What2CookResult,
};
use what2cook_interface::{ImageModel, TextModel};

const PROVIDER: &str = "gemini";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Reads the API key from the environment.
///
/// `GEMINI_API_KEY` wins over `API_KEY`. Blank values count as missing.
pub fn api_key_from_env() -> Result<String, ConfigError> {
    [API_KEY_ENV, FALLBACK_API_KEY_ENV]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::new(ConfigErrorKind::MissingApiKey))
}

/// Client for Gemini text generation and Imagen image generation.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl GeminiClient {
    /// Creates a client against the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank or the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> What2CookResult<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom endpoint, e.g. a proxy or a test server.
    #[instrument(skip_all, fields(provider = PROVIDER))]
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> What2CookResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::MissingApiKey).into());
        }

        let client = Client::builder()
            .gzip(true)
            .build()
            .map_err(|e| HttpError::new(HttpErrorKind::ClientBuild(e.to_string())))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        match Url::parse(&base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(HttpError::new(HttpErrorKind::InvalidBaseUrl {
                    reason: format!("unsupported scheme '{}'", url.scheme()),
                    url: base_url,
                })
                .into());
            }
            Err(e) => {
                return Err(HttpError::new(HttpErrorKind::InvalidBaseUrl {
                    reason: e.to_string(),
                    url: base_url,
                })
                .into());
            }
        }
        debug!(url = %base_url, "Created Gemini client");

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Creates a client using the key from the environment.
    pub fn from_env() -> What2CookResult<Self> {
        Self::new(api_key_from_env()?)
    }

    /// Same as [`GeminiClient::from_env`] with a custom endpoint.
    pub fn from_env_with_base_url(base_url: impl Into<String>) -> What2CookResult<Self> {
        Self::with_base_url(api_key_from_env()?, base_url)
    }

    /// Returns the endpoint base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/models/{}:{}", self.base_url, model, method)
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    #[instrument(skip(self, request), fields(provider = PROVIDER, model = %request.model, prompt_len = request.prompt.len()))]
    async fn generate_json(&self, request: &StructuredRequest) -> Result<String, GenerationError> {
        let body = conversions::to_generate_content(request);
        debug!(strict_json = request.strict_json, "Sending generateContent request");

        let response = self
            .client
            .post(self.endpoint(&request.model, "generateContent"))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GenerationError::new(GenerationErrorKind::Request(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = conversions::error_message(&error_text);
            error!(status = %status, error = %message, "API error");
            return Err(GenerationError::new(GenerationErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GenerationError::new(GenerationErrorKind::Request(format!(
                "Failed to parse response body: {}",
                e
            )))
        })?;

        let text = conversions::from_generate_content(&parsed)?;
        debug!(
            candidates = parsed.candidates.len(),
            text_len = text.len(),
            "Received response"
        );
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

#[async_trait]
impl ImageModel for GeminiClient {
    #[instrument(skip(self, request), fields(provider = PROVIDER, model = %request.model))]
    async fn generate_image(&self, request: &ImageRequest) -> Result<GeneratedImage, ImageError> {
        let body = conversions::to_predict(request);
        debug!(aspect_ratio = %request.aspect_ratio, "Sending predict request");

        let response = self
            .client
            .post(self.endpoint(&request.model, "predict"))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ImageError::new(ImageErrorKind::Request(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ImageError::new(ImageErrorKind::HttpError {
                status_code: status.as_u16(),
                message: conversions::error_message(&error_text),
            }));
        }

        let parsed: PredictResponse = response.json().await.map_err(|e| {
            ImageError::new(ImageErrorKind::Request(format!(
                "Failed to parse response body: {}",
                e
            )))
        })?;

        let image = conversions::from_predict(parsed, &request.mime_type)?;
        debug!(bytes_b64 = image.base64_data.len(), "Received image");
        Ok(image)
    }
}
