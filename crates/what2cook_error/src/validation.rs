//! Caller-side precondition failures.

/// Preconditions that a request failed before any network call was made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// The form carried no ingredients
    #[display("Please provide at least one ingredient.")]
    NoIngredients,
    /// A shopping list was requested for zero recipes
    #[display("Select at least one saved recipe to build a shopping list.")]
    NoRecipes,
    /// A named recipe is not in the saved collection
    #[display("No saved recipe named '{}'", _0)]
    UnknownRecipe(String),
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use what2cook_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::NoIngredients);
/// assert!(format!("{}", err).contains("at least one ingredient"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
