//! Error types for the What2Cook recipe generator.
//!
//! Each failure family carries the source location where it was raised. The
//! umbrella [`What2CookError`] wraps any of them so callers can propagate with `?`
//! and still recover the family through [`What2CookError::category`].

mod config;
mod generation;
mod http;
mod image;
mod storage;
mod validation;

pub use config::{ConfigError, ConfigErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use http::{HttpError, HttpErrorKind};
pub use image::{ImageError, ImageErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum What2CookErrorKind {
    /// Missing credential or unusable settings
    Config(ConfigError),
    /// Caller-side precondition violated
    Validation(ValidationError),
    /// Text generation failed
    Generation(GenerationError),
    /// Image generation failed
    Image(ImageError),
    /// Local persistence failed
    Storage(StorageError),
    /// HTTP client could not be built
    Http(HttpError),
}

impl std::fmt::Display for What2CookErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            What2CookErrorKind::Config(e) => write!(f, "{}", e),
            What2CookErrorKind::Validation(e) => write!(f, "{}", e),
            What2CookErrorKind::Generation(e) => write!(f, "{}", e),
            What2CookErrorKind::Image(e) => write!(f, "{}", e),
            What2CookErrorKind::Storage(e) => write!(f, "{}", e),
            What2CookErrorKind::Http(e) => write!(f, "{}", e),
        }
    }
}

/// Coarse classification used to decide how a failure is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Fatal, shown verbatim, never retried
    Configuration,
    /// Shown as a prompt to fix the input
    Validation,
    /// Shown inline with the underlying message
    Generation,
    /// Recovered locally, never shown
    Image,
    /// Recovered locally, never shown
    Storage,
}

/// What2Cook error with kind discrimination.
#[derive(Debug)]
pub struct What2CookError(Box<What2CookErrorKind>);

impl What2CookError {
    /// Create a new error from a kind.
    pub fn new(kind: What2CookErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &What2CookErrorKind {
        &self.0
    }

    /// Classify the error for presentation.
    ///
    /// HTTP client construction failures count as configuration problems.
    pub fn category(&self) -> ErrorCategory {
        match self.kind() {
            What2CookErrorKind::Config(_) | What2CookErrorKind::Http(_) => {
                ErrorCategory::Configuration
            }
            What2CookErrorKind::Validation(_) => ErrorCategory::Validation,
            What2CookErrorKind::Generation(_) => ErrorCategory::Generation,
            What2CookErrorKind::Image(_) => ErrorCategory::Image,
            What2CookErrorKind::Storage(_) => ErrorCategory::Storage,
        }
    }

    /// Message suitable for showing to a user, without source locations.
    pub fn user_message(&self) -> String {
        match self.kind() {
            What2CookErrorKind::Config(e) => e.kind.to_string(),
            What2CookErrorKind::Validation(e) => e.kind.to_string(),
            What2CookErrorKind::Generation(e) => e.kind.to_string(),
            What2CookErrorKind::Image(e) => e.kind.to_string(),
            What2CookErrorKind::Storage(e) => e.kind.to_string(),
            What2CookErrorKind::Http(e) => e.kind.to_string(),
        }
    }
}

impl std::fmt::Display for What2CookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "What2Cook Error: {}", self.0)
    }
}

impl std::error::Error for What2CookError {}

// Generic From implementation for any type that converts to What2CookErrorKind
impl<T> From<T> for What2CookError
where
    T: Into<What2CookErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for What2Cook operations.
pub type What2CookResult<T> = std::result::Result<T, What2CookError>;
