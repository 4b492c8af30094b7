//! Boolean validator

use std::any::{Any, type_name};

use crate::checks::CheckList;
use crate::foundation::{
    Error, Result, Validate, ValidationError, ValidationOptions, downcast,
};

/// Builder and evaluator for `bool` values.
#[derive(Debug, Default)]
pub struct BooleanValidator {
    checks: CheckList<bool>,
}

/// Creates an empty boolean validator.
#[must_use]
pub fn boolean() -> BooleanValidator {
    BooleanValidator::new()
}

impl BooleanValidator {
    /// Creates an empty boolean validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            checks: CheckList::new(),
        }
    }

    /// Adds a custom check.
    #[must_use = "builder methods must be chained or built"]
    pub fn is<F>(mut self, check: F) -> Self
    where
        F: Fn(bool) -> std::result::Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.checks.append(move |b, _| check(*b).map_err(Error::from));
        self
    }

    /// Value must be `true`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_true(self) -> Self {
        self.is(|b| {
            if b {
                Ok(())
            } else {
                Err("expected true but got false".into())
            }
        })
    }

    /// Value must be `false`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_false(self) -> Self {
        self.is(|b| {
            if b {
                Err("expected false but got true".into())
            } else {
                Ok(())
            }
        })
    }
}

impl Validate for BooleanValidator {
    type Input = bool;

    fn type_name(&self) -> &'static str {
        type_name::<bool>()
    }

    fn validate_with(&self, input: &bool, options: &ValidationOptions) -> Result {
        self.checks.evaluate(input, options)
    }

    fn validate_untyped(&self, value: &dyn Any, options: &ValidationOptions) -> Result {
        let b = downcast::<bool>(value, self.type_name())?;
        self.validate_with(b, options)
    }
}
