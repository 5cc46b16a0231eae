//! Text-generation error types.

/// Failures of the text-generation step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    /// Request could not be sent or the body could not be read
    Request(String),
    /// Service answered with a non-success status
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message returned by the service
        message: String,
    },
    /// Service answered without any text candidate
    EmptyResponse,
    /// Service refused the prompt
    Blocked(String),
    /// Response parsed as JSON but did not match the requested schema
    SchemaMismatch(String),
}

impl std::fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationErrorKind::Request(msg) => {
                write!(f, "Text generation request failed: {}", msg)
            }
            GenerationErrorKind::HttpError {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            GenerationErrorKind::EmptyResponse => {
                write!(f, "Text generation returned no content")
            }
            GenerationErrorKind::Blocked(reason) => {
                write!(f, "Prompt was blocked by the service: {}", reason)
            }
            GenerationErrorKind::SchemaMismatch(msg) => {
                write!(f, "Response did not match the expected shape: {}", msg)
            }
        }
    }
}

/// Text-generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use what2cook_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::HttpError {
///     status_code: 503,
///     message: "overloaded".to_string(),
/// });
/// assert!(format!("{}", err).contains("overloaded"));
/// ```
#[derive(Debug, Clone)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GenerationError {}
