//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`Error`], [`TypeError`], [`ValidationError`], [`ValidationErrors`]
//! - **Options**: [`ValidationOptions`], [`AnyOptions`]
//!
//! # Two failure classes
//!
//! Wiring a validator to something it cannot validate (an invalid range, an
//! alias for a field that was never bound, alternatives of different types)
//! is a programming error and panics while the validator is being built.
//! Everything found while evaluating a value is returned as an [`Error`].
//!
//! # Evaluation modes
//!
//! ```
//! use ensure::prelude::*;
//!
//! let v = number::<i32>().is_odd().is_greater_than(1).equals(5);
//!
//! // Fail-fast: the first failing check is returned on its own.
//! assert!(matches!(v.validate(&0), Err(Error::Validation(_))));
//!
//! // Collect-all: every check runs.
//! let err = v.validate_with(&0, &ValidationOptions::collect_all()).unwrap_err();
//! assert_eq!(err.into_aggregate().validation_errors().len(), 3);
//! ```

pub mod error;
pub mod options;
pub mod traits;

pub use error::{
    Error, NO_ERRORS_MESSAGE, Result, TypeError, ValidationError, ValidationErrors,
    as_validation_errors,
};
pub use options::{AnyOptions, DEFAULT_ANY_ERROR, ValidationOptions, options};
pub use traits::{UNKNOWN_TYPE, Validate, downcast, downcast_named};
