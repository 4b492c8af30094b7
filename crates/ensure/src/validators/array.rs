//! Sequence validator

use std::any::{Any, type_name};
use std::borrow::Borrow;

use crate::checks::IterationChecks;
use crate::foundation::{
    Error, Result, Validate, ValidationError, ValidationOptions, downcast,
};

/// Builder and evaluator for sequences of `T`.
///
/// Validates `[T]`, so it accepts `&Vec<T>`, arrays and slices alike. The
/// type tag is that of `Vec<T>`.
///
/// # Examples
///
/// ```
/// use ensure::prelude::*;
///
/// let v = array::<i32>().is_not_empty().each(number::<i32>().is_positive());
/// assert!(v.validate(&[1, 2, 3]).is_ok());
/// assert!(v.validate(&[]).is_err());
/// assert!(v.validate(&[1, -2]).is_err());
/// ```
pub struct ArrayValidator<T> {
    checks: IterationChecks<usize, T, [T]>,
}

/// Creates an empty validator for sequences of `T`.
#[must_use]
pub fn array<T: Send + Sync + 'static>() -> ArrayValidator<T> {
    ArrayValidator::new()
}

impl<T: Send + Sync + 'static> ArrayValidator<T> {
    /// Creates an empty validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            checks: IterationChecks::for_slice(),
        }
    }

    /// Adds a custom check on the whole sequence.
    #[must_use = "builder methods must be chained or built"]
    pub fn is<F>(mut self, check: F) -> Self
    where
        F: Fn(&[T]) -> std::result::Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.checks.append(move |items, _| check(items).map_err(Error::from));
        self
    }

    /// Sequence must be empty.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_empty(mut self) -> Self {
        self.checks.length().add_is_empty();
        self
    }

    /// Sequence must not be empty.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_not_empty(mut self) -> Self {
        self.checks.length().add_is_not_empty();
        self
    }

    /// Sequence must hold exactly `count` items.
    #[must_use = "builder methods must be chained or built"]
    pub fn has_count(mut self, count: usize) -> Self {
        self.checks.length().add_has_length(count);
        self
    }

    /// Sequence must hold more than `count` items.
    #[must_use = "builder methods must be chained or built"]
    pub fn has_more_than(mut self, count: usize) -> Self {
        self.checks.length().add_is_longer_than(count);
        self
    }

    /// Sequence must hold fewer than `count` items.
    #[must_use = "builder methods must be chained or built"]
    pub fn has_fewer_than(mut self, count: usize) -> Self {
        self.checks.length().add_is_shorter_than(count);
        self
    }

    /// The item count must satisfy `validator`.
    #[must_use = "builder methods must be chained or built"]
    pub fn has_length_where<V>(mut self, validator: V) -> Self
    where
        V: Validate<Input = usize> + 'static,
    {
        self.checks.length().add_has_length_where(validator);
        self
    }

    /// Every item must satisfy `validator`.
    ///
    /// Items are borrowed as the validator's input, so `array::<String>()`
    /// takes a [`string`](crate::validators::string) validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn each<V>(mut self, validator: V) -> Self
    where
        V: Validate + 'static,
        T: Borrow<V::Input>,
    {
        self.checks.add_value_validator(validator);
        self
    }

    /// Every index must satisfy `validator`.
    #[must_use = "builder methods must be chained or built"]
    pub fn each_index<V>(mut self, validator: V) -> Self
    where
        V: Validate + 'static,
        usize: Borrow<V::Input>,
    {
        self.checks.add_key_validator(validator);
        self
    }
}

impl<T: Send + Sync + 'static> Default for ArrayValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for ArrayValidator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayValidator")
            .field("type", &type_name::<Vec<T>>())
            .field("checks", &self.checks)
            .finish()
    }
}

impl<T: Send + Sync + 'static> Validate for ArrayValidator<T> {
    type Input = [T];

    fn type_name(&self) -> &'static str {
        type_name::<Vec<T>>()
    }

    fn validate_with(&self, input: &[T], options: &ValidationOptions) -> Result {
        self.checks.evaluate(input, options)
    }

    fn validate_untyped(&self, value: &dyn Any, options: &ValidationOptions) -> Result {
        let items = downcast::<Vec<T>>(value, self.type_name())?;
        self.validate_with(items, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{number, string};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_sequence_passes_item_checks() {
        let v = array::<String>().each(string().is_not_empty());
        assert!(v.validate(&[]).is_ok());
    }

    #[test]
    fn test_owned_strings_take_string_checks() {
        let v = array::<String>().each(string().is_shorter_than(4).matches(crate::patterns::ALPHA));
        assert!(v.validate(&["ab".to_owned(), "cde".to_owned()]).is_ok());

        let err = v
            .validate_with(
                &["ok".to_owned(), "toolong".to_owned(), "x1".to_owned()],
                &ValidationOptions::collect_all(),
            )
            .unwrap_err();
        assert_eq!(
            err.into_aggregate()
                .validation_errors()
                .iter()
                .map(ValidationError::message)
                .collect::<Vec<_>>(),
            vec![
                "must have a length less than 4; got 7",
                "string does not match expected pattern",
            ]
        );
    }

    #[test]
    fn test_count_constraints() {
        let v = array::<u8>().has_more_than(1).has_fewer_than(4);
        assert!(v.validate(&[1, 2]).is_ok());
        assert_eq!(
            v.validate(&[1]).unwrap_err().to_string(),
            "must have a length greater than 1; got 1"
        );
        assert!(array::<u8>().has_count(2).validate(&[1, 2, 3]).is_err());
        assert!(array::<u8>().is_empty().validate(&[]).is_ok());
    }

    #[test]
    fn test_collect_all_reports_every_item() {
        let v = array::<i32>()
            .has_length_where(number::<usize>().is_greater_than(5))
            .each(number::<i32>().is_positive());

        let err = v
            .validate_with(&[1, -1, -2], &ValidationOptions::collect_all())
            .unwrap_err();
        let errors = err.into_aggregate();
        assert_eq!(errors.validation_errors().len(), 3);
        assert_eq!(errors.to_string(), "number must be greater than 5; got 3");
    }

    #[test]
    fn test_each_index() {
        let v = array::<char>().each_index(number::<usize>().is_less_than(2));
        assert!(v.validate(&['a', 'b']).is_ok());
        assert_eq!(
            v.validate(&['a', 'b', 'c']).unwrap_err().to_string(),
            "number must be less than 2; got 2"
        );
    }

    #[test]
    fn test_whole_sequence_check() {
        let v = array::<i32>().is(|items| {
            if items.windows(2).all(|w| w[0] <= w[1]) {
                Ok(())
            } else {
                Err("must be sorted".into())
            }
        });
        assert!(v.validate(&[1, 2, 2]).is_ok());
        assert!(v.validate(&[2, 1]).is_err());
    }

    #[test]
    fn test_untyped_and_type_name() {
        let v = array::<i32>();
        assert_eq!(v.type_name(), "alloc::vec::Vec<i32>");
        assert!(v.validate_untyped(&vec![1], &ValidationOptions::new()).is_ok());
        assert!(
            v.validate_untyped(&vec![1_i64], &ValidationOptions::new())
                .unwrap_err()
                .is_type_error()
        );
    }
}
