//! Core traits for the validation system
//!
//! Every validator kind implements [`Validate`]. The trait carries a stable
//! type tag used wherever validators are mixed generically, a typed entry
//! point and an untyped one that checks the runtime type first.

use std::any::Any;
use std::sync::Arc;

use crate::foundation::{Result, TypeError, ValidationOptions};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait all validators implement.
///
/// Validators are built once through chained constraint methods and then only
/// read, so they are `Send + Sync` and can be shared across threads.
///
/// # Examples
///
/// ```
/// use ensure::prelude::*;
///
/// let name = string().is_not_empty().is_shorter_than(20);
/// assert!(name.validate("alice").is_ok());
/// assert!(name.validate("").is_err());
/// ```
pub trait Validate: Send + Sync {
    /// The type being validated.
    ///
    /// `?Sized` so that `str` and `[T]` can be validated directly.
    type Input: ?Sized;

    /// Stable, comparable identifier of the type this validator accepts.
    fn type_name(&self) -> &'static str;

    /// Validates `input` with explicit options.
    fn validate_with(&self, input: &Self::Input, options: &ValidationOptions) -> Result;

    /// Validates `input` with the default (fail-fast) options.
    fn validate(&self, input: &Self::Input) -> Result {
        self.validate_with(input, &ValidationOptions::default())
    }

    /// Validates a value of unknown type.
    ///
    /// Returns [`Error::Type`](crate::foundation::Error::Type) when the value
    /// is not of the accepted type.
    fn validate_untyped(&self, value: &dyn Any, options: &ValidationOptions) -> Result;
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn validate_with(&self, input: &Self::Input, options: &ValidationOptions) -> Result {
        (**self).validate_with(input, options)
    }

    fn validate_untyped(&self, value: &dyn Any, options: &ValidationOptions) -> Result {
        (**self).validate_untyped(value, options)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn validate_with(&self, input: &Self::Input, options: &ValidationOptions) -> Result {
        (**self).validate_with(input, options)
    }

    fn validate_untyped(&self, value: &dyn Any, options: &ValidationOptions) -> Result {
        (**self).validate_untyped(value, options)
    }
}

// ============================================================================
// UNTYPED HELPERS
// ============================================================================

/// Stands in for the actual type in mismatch messages.
///
/// A `&dyn Any` only exposes its `TypeId`, which has no readable name.
pub const UNKNOWN_TYPE: &str = "unknown type";

/// Downcasts an untyped value, or reports a [`TypeError`] naming `expected`.
///
/// The error reads `expected "{expected}"; got "unknown type"`. Use
/// [`downcast_named`] when the caller knows what it is passing.
pub fn downcast<'a, T: Any>(value: &'a dyn Any, expected: &str) -> Result<&'a T, TypeError> {
    downcast_named(value, expected, UNKNOWN_TYPE)
}

/// Like [`downcast`], naming `actual` in the mismatch message.
///
/// # Examples
///
/// ```
/// use ensure::foundation::downcast_named;
///
/// let value = String::from("five");
/// let err = downcast_named::<i32>(&value, "i32", std::any::type_name_of_val(&value))
///     .unwrap_err();
/// assert_eq!(err.message(), r#"expected "i32"; got "alloc::string::String""#);
/// ```
pub fn downcast_named<'a, T: Any>(
    value: &'a dyn Any,
    expected: &str,
    actual: &str,
) -> Result<&'a T, TypeError> {
    value
        .downcast_ref::<T>()
        .ok_or_else(|| TypeError::mismatch(expected, actual))
}
