//! Required and optional wrappers for `Option<T>`
//!
//! - [`required`] fails on `None`
//! - [`optional`] passes on `None`
//!
//! Both delegate to the wrapped validator on `Some`. `T` only needs to borrow
//! as the wrapped validator's input, so `Option<String>` works with a string
//! validator.
//!
//! # Examples
//!
//! ```
//! use ensure::prelude::*;
//!
//! let nickname = optional(string().is_longer_than(2));
//! assert!(nickname.validate(&None::<String>).is_ok());
//! assert!(nickname.validate(&Some("ab".to_string())).is_err());
//!
//! let age = required(number::<u8>().is_positive());
//! assert_eq!(
//!     age.validate(&None::<u8>).unwrap_err().to_string(),
//!     "required value cannot be missing"
//! );
//! ```

use std::any::{Any, type_name};
use std::borrow::Borrow;
use std::marker::PhantomData;

use crate::foundation::{Error, Result, Validate, ValidationOptions, downcast};

/// Message returned by [`required`] on `None`.
pub const REQUIRED_MISSING_MESSAGE: &str = "required value cannot be missing";

/// Wraps a validator so it accepts `Option<T>`.
pub struct Nullable<V, T> {
    inner: V,
    optional: bool,
    _marker: PhantomData<fn() -> T>,
}

/// `None` is an error; `Some` is validated by `inner`.
#[must_use]
pub fn required<V, T>(inner: V) -> Nullable<V, T> {
    Nullable::new(inner, false)
}

/// `None` passes; `Some` is validated by `inner`.
#[must_use]
pub fn optional<V, T>(inner: V) -> Nullable<V, T> {
    Nullable::new(inner, true)
}

impl<V, T> Nullable<V, T> {
    fn new(inner: V, optional: bool) -> Self {
        Self {
            inner,
            optional,
            _marker: PhantomData,
        }
    }

    /// Returns true if `None` passes.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// The wrapped validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V, T> Validate for Nullable<V, T>
where
    V: Validate,
    T: Borrow<V::Input> + 'static,
{
    type Input = Option<T>;

    fn type_name(&self) -> &'static str {
        type_name::<Option<T>>()
    }

    fn validate_with(&self, input: &Option<T>, options: &ValidationOptions) -> Result {
        match input {
            Some(value) => self.inner.validate_with(value.borrow(), options),
            None if self.optional => Ok(()),
            None => Err(Error::validation(REQUIRED_MISSING_MESSAGE)),
        }
    }

    fn validate_untyped(&self, value: &dyn Any, options: &ValidationOptions) -> Result {
        let input = downcast::<Option<T>>(value, self.type_name())?;
        self.validate_with(input, options)
    }
}

impl<V: std::fmt::Debug, T> std::fmt::Debug for Nullable<V, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Nullable")
            .field("inner", &self.inner)
            .field("optional", &self.optional)
            .finish()
    }
}
