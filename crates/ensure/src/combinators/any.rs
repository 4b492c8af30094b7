//! ANY combinator: at least one alternative must pass
//!
//! Members are tried in declaration order and the first success wins, in
//! either evaluation mode. When every member fails, [`AnyOptions`] decides
//! what the caller sees: the errors of the members listed as pass-through,
//! or a single generic message.

use std::any::Any;
use std::borrow::Cow;

use smallvec::SmallVec;

use crate::foundation::{
    AnyOptions, Error, Result, Validate, ValidationErrors, ValidationOptions,
};

/// A boxed member of an [`AnyOf`].
pub type Alternative<T> = Box<dyn Validate<Input = T>>;

/// Passes if any member validator passes.
///
/// # Examples
///
/// ```
/// use ensure::prelude::*;
///
/// let code = any_of(string().has_length(3).matches(patterns::ALPHA))
///     .or(string().matches(patterns::NUMBERS))
///     .pass_through_errors_from([0]);
///
/// assert!(code.validate("abc").is_ok());
/// assert!(code.validate("12345").is_ok());
/// assert_eq!(
///     code.validate("ab").unwrap_err().to_string(),
///     "length must equal 3; got 2"
/// );
/// ```
pub struct AnyOf<T: ?Sized> {
    members: Vec<Alternative<T>>,
    type_name: &'static str,
    options: AnyOptions,
}

/// Starts an [`AnyOf`] with `first` as member 0.
#[must_use]
pub fn any_of<V>(first: V) -> AnyOf<V::Input>
where
    V: Validate + 'static,
    V::Input: 'static,
{
    let first: Alternative<V::Input> = Box::new(first);
    AnyOf::from_boxed(vec![first])
}

impl<T: ?Sized + 'static> AnyOf<T> {
    /// Builds an `AnyOf` from already boxed members.
    ///
    /// # Panics
    ///
    /// Panics if `members` is empty or if the members do not all report the
    /// same [`type_name`](Validate::type_name).
    #[must_use]
    pub fn from_boxed(members: Vec<Alternative<T>>) -> Self {
        let Some(first) = members.first() else {
            panic!("AnyOf requires at least one validator");
        };
        let type_name = first.type_name();
        for (index, member) in members.iter().enumerate().skip(1) {
            check_member_type(type_name, index, member.type_name());
        }

        Self {
            members,
            type_name,
            options: AnyOptions::default(),
        }
    }

    /// Appends another alternative.
    ///
    /// # Panics
    ///
    /// Panics if `validator` reports a different type name than member 0.
    #[must_use = "builder methods must be chained or built"]
    pub fn or<V>(mut self, validator: V) -> Self
    where
        V: Validate<Input = T> + 'static,
    {
        check_member_type(self.type_name, self.members.len(), validator.type_name());
        self.members.push(Box::new(validator));
        self
    }

    /// Replaces the generic failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.options = self.options.with_default_error(message);
        self
    }

    /// Replaces the failure policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_options(mut self, options: AnyOptions) -> Self {
        self.options = options;
        self
    }

    /// Surfaces the errors of the members at `indices` when all fail.
    #[must_use = "builder methods must be chained or built"]
    pub fn pass_through_errors_from(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.options = self.options.pass_through_errors_from(indices);
        self
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; an `AnyOf` has at least one member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The failure policy.
    pub fn options(&self) -> &AnyOptions {
        &self.options
    }

    fn evaluate<F>(&self, options: &ValidationOptions, mut run: F) -> Result
    where
        F: FnMut(&dyn Validate<Input = T>) -> Result,
    {
        let mut kept: SmallVec<[Error; 2]> = SmallVec::new();
        for (index, member) in self.members.iter().enumerate() {
            match run(member.as_ref()) {
                Ok(()) => return Ok(()),
                Err(e) if self.options.passes_through(index) => kept.push(e),
                Err(_) => {}
            }
        }

        if kept.is_empty() {
            tracing::debug!(
                type_name = self.type_name,
                members = self.members.len(),
                "no alternative passed; reporting default error"
            );
            let error = Error::validation(self.options.default_error().to_owned());
            return if options.collect_all_errors() {
                Err(Error::Aggregate(ValidationErrors::from_iter([error])))
            } else {
                Err(error)
            };
        }

        if options.collect_all_errors() {
            Err(Error::Aggregate(kept.into_iter().collect()))
        } else {
            Err(kept.swap_remove(0))
        }
    }
}

#[track_caller]
fn check_member_type(expected: &str, index: usize, actual: &str) {
    assert!(
        expected == actual,
        r#"AnyOf member {index} validates "{actual}" but member 0 validates "{expected}""#
    );
}

impl<T: ?Sized> std::fmt::Debug for AnyOf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyOf")
            .field("type_name", &self.type_name)
            .field("members", &self.members.len())
            .field("options", &self.options)
            .finish()
    }
}

impl<T: ?Sized + 'static> Validate for AnyOf<T> {
    type Input = T;

    fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn validate_with(&self, input: &T, options: &ValidationOptions) -> Result {
        self.evaluate(options, |member| member.validate_with(input, options))
    }

    fn validate_untyped(&self, value: &dyn Any, options: &ValidationOptions) -> Result {
        self.evaluate(options, |member| member.validate_untyped(value, options))
    }
}
