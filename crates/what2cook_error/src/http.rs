//! HTTP client setup errors.

/// Reasons an HTTP client could not be prepared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HttpErrorKind {
    /// The underlying client failed to initialize (TLS backend, proxy settings)
    #[display("Failed to build HTTP client: {}", _0)]
    ClientBuild(String),
    /// The configured endpoint is not an absolute http(s) URL
    #[display("Invalid base URL '{}': {}", url, reason)]
    InvalidBaseUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

/// HTTP client setup error with source location.
///
/// # Examples
///
/// ```
/// use what2cook_error::{HttpError, HttpErrorKind};
///
/// let err = HttpError::new(HttpErrorKind::InvalidBaseUrl {
///     url: "localhost".to_string(),
///     reason: "relative URL without a base".to_string(),
/// });
/// assert!(format!("{}", err).contains("localhost"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", kind, line, file)]
pub struct HttpError {
    /// The kind of failure
    pub kind: HttpErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError at the current location.
    #[track_caller]
    pub fn new(kind: HttpErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
