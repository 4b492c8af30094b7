//! Associative container validator

use std::any::{Any, type_name};
use std::collections::HashMap;

use crate::checks::IterationChecks;
use crate::foundation::{
    Error, Result, Validate, ValidationError, ValidationOptions, downcast,
};

/// Builder and evaluator for `HashMap<K, V>`.
///
/// Key and value checks visit entries in the map's iteration order, which is
/// unspecified; in fail-fast mode the reported entry may vary between runs
/// when several entries fail.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use ensure::prelude::*;
///
/// let v = map::<String, i32>()
///     .each_key(string().is_not_empty())
///     .each_value(number::<i32>().is_positive());
///
/// let good = HashMap::from([("a".to_string(), 1)]);
/// let bad = HashMap::from([("a".to_string(), 0)]);
/// assert!(v.validate(&good).is_ok());
/// assert!(v.validate(&bad).is_err());
/// ```
pub struct MapValidator<K, V> {
    checks: IterationChecks<K, V, HashMap<K, V>>,
}

/// Creates an empty validator for `HashMap<K, V>`.
#[must_use]
pub fn map<K, V>() -> MapValidator<K, V>
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    MapValidator::new()
}

impl<K, V> MapValidator<K, V>
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    /// Creates an empty validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            checks: IterationChecks::for_map(),
        }
    }

    /// Adds a custom check on the whole map.
    #[must_use = "builder methods must be chained or built"]
    pub fn is<F>(mut self, check: F) -> Self
    where
        F: Fn(&HashMap<K, V>) -> std::result::Result<(), ValidationError>
            + Send
            + Sync
            + 'static,
    {
        self.checks.append(move |map, _| check(map).map_err(Error::from));
        self
    }

    /// Map must be empty.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_empty(mut self) -> Self {
        self.checks.length().add_is_empty();
        self
    }

    /// Map must not be empty.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_not_empty(mut self) -> Self {
        self.checks.length().add_is_not_empty();
        self
    }

    /// Map must hold exactly `count` entries.
    #[must_use = "builder methods must be chained or built"]
    pub fn has_count(mut self, count: usize) -> Self {
        self.checks.length().add_has_length(count);
        self
    }

    /// Map must hold more than `count` entries.
    #[must_use = "builder methods must be chained or built"]
    pub fn has_more_than(mut self, count: usize) -> Self {
        self.checks.length().add_is_longer_than(count);
        self
    }

    /// Map must hold fewer than `count` entries.
    #[must_use = "builder methods must be chained or built"]
    pub fn has_fewer_than(mut self, count: usize) -> Self {
        self.checks.length().add_is_shorter_than(count);
        self
    }

    /// The entry count must satisfy `validator`.
    #[must_use = "builder methods must be chained or built"]
    pub fn has_length_where<W>(mut self, validator: W) -> Self
    where
        W: Validate<Input = usize> + 'static,
    {
        self.checks.length().add_has_length_where(validator);
        self
    }

    /// Every key must satisfy `validator`.
    ///
    /// The validator's input only needs to be borrowable from `K`, so a
    /// string validator works on `String` keys.
    #[must_use = "builder methods must be chained or built"]
    pub fn each_key<W>(mut self, validator: W) -> Self
    where
        W: Validate + 'static,
        K: std::borrow::Borrow<W::Input>,
    {
        self.checks.add_key_validator(validator);
        self
    }

    /// Every value must satisfy `validator`.
    #[must_use = "builder methods must be chained or built"]
    pub fn each_value<W>(mut self, validator: W) -> Self
    where
        W: Validate + 'static,
        V: std::borrow::Borrow<W::Input>,
    {
        self.checks.add_value_validator(validator);
        self
    }
}

impl<K, V> Default for MapValidator<K, V>
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> std::fmt::Debug for MapValidator<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapValidator")
            .field("type", &type_name::<HashMap<K, V>>())
            .field("checks", &self.checks)
            .finish()
    }
}

impl<K, V> Validate for MapValidator<K, V>
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    type Input = HashMap<K, V>;

    fn type_name(&self) -> &'static str {
        type_name::<HashMap<K, V>>()
    }

    fn validate_with(&self, input: &HashMap<K, V>, options: &ValidationOptions) -> Result {
        self.checks.evaluate(input, options)
    }

    fn validate_untyped(&self, value: &dyn Any, options: &ValidationOptions) -> Result {
        let map = downcast::<HashMap<K, V>>(value, self.type_name())?;
        self.validate_with(map, options)
    }
}
