//! Image-generation error types.

/// Failures of a single image request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ImageErrorKind {
    /// Request could not be sent or the body could not be read
    #[display("Image request failed: {}", _0)]
    Request(String),
    /// Service answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message returned by the service
        message: String,
    },
    /// Response carried no image bytes
    #[display("Image response contained no image payload")]
    MissingPayload,
    /// Image bytes were not valid base64
    #[display("Base64 decode error: {}", _0)]
    InvalidPayload(String),
}

/// Image-generation error with location tracking.
///
/// These never reach the user; the pipeline logs them and drops the image.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The kind of error that occurred
    pub kind: ImageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImageError {
    /// Create a new image error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
