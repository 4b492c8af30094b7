//! Record validator: delegates to per-field and per-accessor validators
//!
//! Bindings are registered with accessor closures instead of names looked up
//! at runtime, so a binding whose accessor output does not fit its validator
//! is rejected by the compiler. What the compiler cannot see (two bindings
//! sharing a name, a display name for a binding that does not exist) panics
//! while the validator is being built.
//!
//! # Evaluation order
//!
//! 1. Checks attached with [`RecordValidator::is`]
//! 2. Field bindings, in registration order
//! 3. Accessor bindings, in registration order
//!
//! Failures from a binding are prefixed with `"{display name}: "`.

use std::any::{Any, type_name};
use std::borrow::{Borrow, Cow};

use crate::checks::{Check, CheckList};
use crate::foundation::{
    Error, Result, Validate, ValidationError, ValidationErrors, ValidationOptions, downcast,
};

// ============================================================================
// BINDINGS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BindingKind {
    Field,
    Getter,
}

struct Binding<R> {
    name: Cow<'static, str>,
    display: Option<Cow<'static, str>>,
    kind: BindingKind,
    check: Check<R>,
}

impl<R> Binding<R> {
    fn display_name(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.name)
    }

    fn evaluate(&self, record: &R, options: &ValidationOptions) -> Result {
        (self.check)(record, options).map_err(|e| e.with_context(self.display_name()))
    }
}

impl<R> std::fmt::Debug for Binding<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("name", &self.name)
            .field("display", &self.display)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// RECORD VALIDATOR
// ============================================================================

/// Builder and evaluator for a record type `R`.
///
/// # Examples
///
/// ```
/// use ensure::prelude::*;
///
/// struct User {
///     name: String,
///     age: u8,
/// }
///
/// impl User {
///     fn initials(&self) -> String {
///         self.name.chars().take(1).collect()
///     }
/// }
///
/// let v = record::<User>()
///     .field("name", |u| &u.name, string().is_not_empty())
///     .field("age", |u| &u.age, number::<u8>().is_greater_than_or_equal_to(18))
///     .getter("initials", User::initials, string().matches(patterns::ALPHA))
///     .alias("age", "Age");
///
/// let user = User { name: "Bob".into(), age: 12 };
/// assert_eq!(
///     v.validate(&user).unwrap_err().to_string(),
///     "Age: number must be greater than or equal to 18; got 12"
/// );
/// ```
pub struct RecordValidator<R> {
    checks: CheckList<R>,
    fields: Vec<Binding<R>>,
    getters: Vec<Binding<R>>,
}

/// Creates an empty validator for `R`.
#[must_use]
pub fn record<R: 'static>() -> RecordValidator<R> {
    RecordValidator::new()
}

impl<R: 'static> RecordValidator<R> {
    /// Creates an empty validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            checks: CheckList::new(),
            fields: Vec::new(),
            getters: Vec::new(),
        }
    }

    /// Adds a check on the whole record.
    ///
    /// Failures are reported as-is, without a name prefix.
    #[must_use = "builder methods must be chained or built"]
    pub fn is<F>(mut self, check: F) -> Self
    where
        F: Fn(&R) -> std::result::Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.checks.append(move |r, _| check(r).map_err(Error::from));
        self
    }

    /// Binds `validator` to a field reached through `accessor`.
    ///
    /// # Panics
    ///
    /// Panics if a binding named `name` already exists.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<V, A, F>(self, name: impl Into<Cow<'static, str>>, accessor: F, validator: V) -> Self
    where
        V: Validate + 'static,
        A: Borrow<V::Input> + ?Sized,
        F: Fn(&R) -> &A + Send + Sync + 'static,
    {
        self.bind(
            name.into(),
            BindingKind::Field,
            Box::new(move |record: &R, options: &ValidationOptions| {
                validator.validate_with(accessor(record).borrow(), options)
            }),
        )
    }

    /// Binds `validator` to the value returned by a by-reference accessor.
    ///
    /// # Panics
    ///
    /// Panics if a binding named `name` already exists.
    #[must_use = "builder methods must be chained or built"]
    pub fn getter<V, O, F>(self, name: impl Into<Cow<'static, str>>, accessor: F, validator: V) -> Self
    where
        V: Validate + 'static,
        O: Borrow<V::Input>,
        F: Fn(&R) -> O + Send + Sync + 'static,
    {
        self.bind(
            name.into(),
            BindingKind::Getter,
            Box::new(move |record: &R, options: &ValidationOptions| {
                validator.validate_with(accessor(record).borrow(), options)
            }),
        )
    }

    /// Binds `validator` to the value returned by a by-value accessor.
    ///
    /// The record is cloned for every call, so the accessor may consume it.
    ///
    /// # Panics
    ///
    /// Panics if a binding named `name` already exists.
    #[must_use = "builder methods must be chained or built"]
    pub fn getter_by_value<V, O, F>(
        self,
        name: impl Into<Cow<'static, str>>,
        accessor: F,
        validator: V,
    ) -> Self
    where
        R: Clone,
        V: Validate + 'static,
        O: Borrow<V::Input>,
        F: Fn(R) -> O + Send + Sync + 'static,
    {
        self.bind(
            name.into(),
            BindingKind::Getter,
            Box::new(move |record: &R, options: &ValidationOptions| {
                validator.validate_with(accessor(record.clone()).borrow(), options)
            }),
        )
    }

    /// Reports failures of the binding `name` as `display` instead.
    ///
    /// # Panics
    ///
    /// Panics if no binding named `name` exists.
    #[must_use = "builder methods must be chained or built"]
    pub fn alias(mut self, name: &str, display: impl Into<Cow<'static, str>>) -> Self {
        let Some(binding) = self
            .fields
            .iter_mut()
            .chain(self.getters.iter_mut())
            .find(|b| b.name == name)
        else {
            panic!(r#"cannot set display name for "{name}"; it is not bound to a validator"#);
        };
        binding.display = Some(display.into());
        self
    }

    /// Applies [`alias`](Self::alias) to every `(name, display)` pair.
    ///
    /// # Panics
    ///
    /// Panics if any `name` is not bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn display_names<I, N, D>(self, names: I) -> Self
    where
        I: IntoIterator<Item = (N, D)>,
        N: AsRef<str>,
        D: Into<Cow<'static, str>>,
    {
        names
            .into_iter()
            .fold(self, |v, (name, display)| v.alias(name.as_ref(), display))
    }

    /// Number of field and accessor bindings.
    pub fn binding_count(&self) -> usize {
        self.fields.len() + self.getters.len()
    }

    fn bind(mut self, name: Cow<'static, str>, kind: BindingKind, check: Check<R>) -> Self {
        assert!(
            !self
                .fields
                .iter()
                .chain(self.getters.iter())
                .any(|b| b.name == name),
            r#"binding "{name}" is already registered on {}"#,
            type_name::<R>()
        );
        let binding = Binding {
            name,
            display: None,
            kind,
            check,
        };
        match kind {
            BindingKind::Field => self.fields.push(binding),
            BindingKind::Getter => self.getters.push(binding),
        }
        self
    }

    fn bindings(&self) -> impl Iterator<Item = &Binding<R>> {
        self.fields.iter().chain(self.getters.iter())
    }
}

impl<R: 'static> Default for RecordValidator<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> std::fmt::Debug for RecordValidator<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordValidator")
            .field("type", &type_name::<R>())
            .field("checks", &self.checks)
            .field("fields", &self.fields)
            .field("getters", &self.getters)
            .finish()
    }
}

impl<R: 'static> Validate for RecordValidator<R> {
    type Input = R;

    fn type_name(&self) -> &'static str {
        type_name::<R>()
    }

    fn validate_with(&self, input: &R, options: &ValidationOptions) -> Result {
        tracing::trace!(
            record = type_name::<R>(),
            bindings = self.binding_count(),
            collect_all = options.collect_all_errors(),
            "validating record"
        );

        if !options.collect_all_errors() {
            self.checks.evaluate(input, options)?;
            return self
                .bindings()
                .try_for_each(|binding| binding.evaluate(input, options));
        }

        let mut errors = ValidationErrors::new();
        if let Err(e) = self.checks.evaluate(input, options) {
            errors.append(e);
        }
        for binding in self.bindings() {
            if let Err(e) = binding.evaluate(input, options) {
                errors.append(e);
            }
        }
        errors.into_result()
    }

    fn validate_untyped(&self, value: &dyn Any, options: &ValidationOptions) -> Result {
        let record = downcast::<R>(value, self.type_name())?;
        self.validate_with(record, options)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{array, number, string};
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone)]
    struct Account {
        owner: String,
        balance: i64,
        tags: Vec<String>,
    }

    impl Account {
        fn tag_count(&self) -> usize {
            self.tags.len()
        }

        fn into_owner(self) -> String {
            self.owner
        }
    }

    fn account() -> Account {
        Account {
            owner: "ann".into(),
            balance: -5,
            tags: vec![],
        }
    }

    fn validator() -> RecordValidator<Account> {
        record::<Account>()
            .field("owner", |a| &a.owner, string().is_longer_than(3))
            .field("balance", |a| &a.balance, number::<i64>().is_greater_than_or_equal_to(0))
            .field("tags", |a| &a.tags, array::<String>().is_not_empty())
            .getter("tag_count", Account::tag_count, number::<usize>().is_less_than(5))
    }

    #[test]
    fn test_fields_before_getters_in_registration_order() {
        let err = validator().validate(&account()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "owner: must have a length greater than 3; got 3"
        );
    }

    #[test]
    fn test_collect_all_reports_every_binding() {
        let err = validator()
            .validate_with(&account(), &ValidationOptions::collect_all())
            .unwrap_err();
        let messages: Vec<_> = err
            .into_aggregate()
            .validation_errors()
            .iter()
            .map(|e| e.message().to_string())
            .collect();
        assert_eq!(
            messages,
            vec![
                "owner: must have a length greater than 3; got 3",
                "balance: number must be greater than or equal to 0; got -5",
                "tags: must not be empty",
            ]
        );
    }

    #[test]
    fn test_own_checks_run_first_without_prefix() {
        let v = validator().is(|a| {
            if a.owner.is_empty() {
                Err("account needs an owner".into())
            } else {
                Ok(())
            }
        });
        let mut a = account();
        a.owner.clear();
        assert_eq!(v.validate(&a).unwrap_err().to_string(), "account needs an owner");
    }

    #[test]
    fn test_alias_and_display_names() {
        let v = validator()
            .display_names([("owner", "Owner"), ("balance", "Balance")])
            .alias("owner", "Account owner");
        let err = v.validate(&account()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Account owner: must have a length greater than 3; got 3"
        );
    }

    #[test]
    fn test_getter_by_value_clones_record() {
        let v = record::<Account>().getter_by_value(
            "owner",
            Account::into_owner,
            string().equals("ann"),
        );
        assert!(v.validate(&account()).is_ok());
    }

    #[test]
    fn test_zero_bindings_pass() {
        assert!(record::<Account>().validate(&account()).is_ok());
    }

    #[test]
    #[should_panic(expected = "is not bound to a validator")]
    fn test_alias_for_unknown_binding_panics() {
        let _ = validator().alias("missing", "Missing");
    }

    #[test]
    #[should_panic(expected = r#"binding "owner" is already registered"#)]
    fn test_duplicate_binding_panics() {
        let _ = validator().field("owner", |a| &a.owner, string());
    }

    #[test]
    fn test_untyped() {
        let opts = ValidationOptions::new();
        assert!(validator().validate_untyped(&"nope", &opts).unwrap_err().is_type_error());
        assert!(validator().validate_untyped(&account(), &opts).is_err());
    }
}
