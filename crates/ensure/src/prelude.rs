//! Prelude module for convenient imports.
//!
//! `use ensure::prelude::*;` brings in the trait, error and option types,
//! every validator constructor and the [`AnyOf`] combinator.

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{
    AnyOptions, Error, Result, TypeError, Validate, ValidationError, ValidationErrors,
    ValidationOptions, as_validation_errors, options,
};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{
    ArrayValidator, BooleanValidator, MapValidator, Nullable, Number, NumberValidator,
    RecordValidator, StringValidator, array, boolean, length, map, number, optional, record,
    required, string,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{AnyOf, any_of};

pub use crate::patterns;
