//! Error types for validation failures
//!
//! Evaluation produces one of three shapes, unified under [`Error`]:
//!
//! - [`TypeError`]: the value handed to a validator is not the type the
//!   validator was built for. Internal; never shown verbatim to end users.
//! - [`ValidationError`]: a single violated constraint. Safe to surface.
//! - [`ValidationErrors`]: a flat aggregate of both, produced in
//!   collect-all mode.
//!
//! All messages use `Cow<'static, str>` so static messages never allocate.

use std::borrow::Cow;
use std::fmt;

/// Message rendered by an aggregate that holds nothing.
pub const NO_ERRORS_MESSAGE: &str = "there were no validation errors";

/// Result alias used by every evaluation entry point.
pub type Result<T = (), E = Error> = std::result::Result<T, E>;

// ============================================================================
// TYPE ERROR
// ============================================================================

/// The runtime type of a value does not match the validator's type.
///
/// Indicates a wiring mistake in the validator tree rather than bad input,
/// so aggregates only ever report how many of these occurred.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct TypeError {
    message: Cow<'static, str>,
}

impl TypeError {
    /// Creates a type error with an internal message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Creates the standard `expected "X"; got "Y"` message.
    pub fn mismatch(expected: &str, actual: &str) -> Self {
        Self::new(format!(r#"expected "{expected}"; got "{actual}""#))
    }

    /// Returns the internal message.
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use = "prefixed returns a new error"]
    fn prefixed(self, name: &str) -> Self {
        Self::new(format!("{name}: {}", self.message))
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single violated constraint.
///
/// # Examples
///
/// ```
/// use ensure::foundation::ValidationError;
///
/// let error = ValidationError::new("must not be empty");
/// assert_eq!(error.to_string(), "must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: Cow<'static, str>,
}

impl ValidationError {
    /// Creates a validation error with a user-facing message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use = "prefixed returns a new error"]
    fn prefixed(self, name: &str) -> Self {
        Self::new(format!("{name}: {}", self.message))
    }
}

impl From<&'static str> for ValidationError {
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A flat collection of type errors and validation errors.
///
/// Appending another `ValidationErrors` merges its two lists into this one,
/// so arbitrarily deep validator trees still report a single level of
/// problems.
///
/// `Display` renders the first validation error when there is one, otherwise
/// only a count of type errors (their contents describe internal types),
/// otherwise [`NO_ERRORS_MESSAGE`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    type_errors: Vec<TypeError>,
    validation_errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error, flattening nested aggregates.
    pub fn append(&mut self, error: impl Into<Error>) {
        match error.into() {
            Error::Type(e) => self.type_errors.push(e),
            Error::Validation(e) => self.validation_errors.push(e),
            Error::Aggregate(other) => self.extend(other),
        }
    }

    /// Adds an error from outside this crate.
    ///
    /// Crate error types keep their classification; anything else is
    /// wrapped as a [`ValidationError`] carrying its display message.
    pub fn append_foreign(&mut self, error: &(dyn std::error::Error + 'static)) {
        if let Some(e) = error.downcast_ref::<Error>() {
            self.append(e.clone());
        } else if let Some(e) = error.downcast_ref::<Self>() {
            self.extend(e.clone());
        } else if let Some(e) = error.downcast_ref::<TypeError>() {
            self.type_errors.push(e.clone());
        } else if let Some(e) = error.downcast_ref::<ValidationError>() {
            self.validation_errors.push(e.clone());
        } else {
            self.validation_errors
                .push(ValidationError::new(error.to_string()));
        }
    }

    /// Merges another collection into this one.
    pub fn extend(&mut self, other: Self) {
        self.type_errors.extend(other.type_errors);
        self.validation_errors.extend(other.validation_errors);
    }

    /// Returns true if any error of either kind is present.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_type_errors() || self.has_validation_errors()
    }

    /// Returns true if any type error is present.
    #[must_use]
    pub fn has_type_errors(&self) -> bool {
        !self.type_errors.is_empty()
    }

    /// Returns true if any validation error is present.
    #[must_use]
    pub fn has_validation_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }

    /// Returns the type errors in insertion order.
    #[must_use]
    pub fn type_errors(&self) -> &[TypeError] {
        &self.type_errors
    }

    /// Returns the validation errors in insertion order.
    #[must_use]
    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.validation_errors
    }

    /// Total number of errors of both kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.type_errors.len() + self.validation_errors.len()
    }

    /// Returns true if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_errors()
    }

    /// `Ok(())` when empty, otherwise the collection as an [`Error`].
    pub fn into_result(self) -> Result {
        if self.has_errors() {
            Err(Error::Aggregate(self))
        } else {
            Ok(())
        }
    }

    #[must_use = "prefixed returns a new collection"]
    fn prefixed(self, name: &str) -> Self {
        Self {
            type_errors: self
                .type_errors
                .into_iter()
                .map(|e| e.prefixed(name))
                .collect(),
            validation_errors: self
                .validation_errors
                .into_iter()
                .map(|e| e.prefixed(name))
                .collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.validation_errors.first() {
            return write!(f, "{first}");
        }

        match self.type_errors.len() {
            0 => f.write_str(NO_ERRORS_MESSAGE),
            1 => f.write_str("validation failed with 1 type error"),
            n => write!(f, "validation failed with {n} type errors"),
        }
    }
}

impl std::error::Error for ValidationErrors {}

impl<E: Into<Error>> FromIterator<E> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.append(error);
        }
        errors
    }
}

// ============================================================================
// UNIFIED ERROR
// ============================================================================

/// Any failure produced while evaluating a validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The value's type did not match the validator.
    #[error(transparent)]
    Type(#[from] TypeError),

    /// A single constraint was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Several failures, collected in collect-all mode.
    #[error(transparent)]
    Aggregate(#[from] ValidationErrors),
}

impl Error {
    /// Shorthand for a single validation error.
    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation(ValidationError::new(message))
    }

    /// Returns true for [`Error::Type`].
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::Type(_))
    }

    /// Returns the aggregate if this error is one.
    #[must_use]
    pub fn as_aggregate(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Aggregate(errors) => Some(errors),
            _ => None,
        }
    }

    /// Converts any shape into an aggregate.
    #[must_use]
    pub fn into_aggregate(self) -> ValidationErrors {
        match self {
            Self::Aggregate(errors) => errors,
            other => {
                let mut errors = ValidationErrors::new();
                errors.append(other);
                errors
            }
        }
    }

    /// Prefixes every message with `"{name}: "`.
    ///
    /// Aggregates are prefixed entry by entry and stay flat.
    #[must_use = "with_context returns a new error"]
    pub fn with_context(self, name: &str) -> Self {
        match self {
            Self::Type(e) => Self::Type(e.prefixed(name)),
            Self::Validation(e) => Self::Validation(e.prefixed(name)),
            Self::Aggregate(errors) => Self::Aggregate(errors.prefixed(name)),
        }
    }
}

// ============================================================================
// UNWRAPPING
// ============================================================================

/// Finds a [`ValidationErrors`] in an arbitrary error.
///
/// Looks at the error itself, inside [`Error::Aggregate`], and down the
/// `source()` chain. Useful when validation results travel through a
/// generic error channel.
///
/// # Examples
///
/// ```
/// use ensure::foundation::{as_validation_errors, Error, ValidationErrors};
///
/// let mut errors = ValidationErrors::new();
/// errors.append(Error::validation("too short"));
/// let boxed: Box<dyn std::error::Error> = Box::new(Error::Aggregate(errors));
///
/// assert!(as_validation_errors(boxed.as_ref()).is_some());
/// ```
pub fn as_validation_errors<'a>(
    error: &'a (dyn std::error::Error + 'static),
) -> Option<&'a ValidationErrors> {
    let mut current = Some(error);
    while let Some(err) = current {
        if let Some(errors) = err.downcast_ref::<ValidationErrors>() {
            return Some(errors);
        }
        if let Some(Error::Aggregate(errors)) = err.downcast_ref::<Error>() {
            return Some(errors);
        }
        current = err.source();
    }
    None
}

// ============================================================================
// TESTS
// ============================================================================
