//! String validator

use std::any::{Any, type_name};
use std::collections::HashSet;

use regex::Regex;

use crate::checks::LengthChecks;
use crate::foundation::{
    Error, Result, Validate, ValidationError, ValidationOptions, downcast,
};

/// Builder and evaluator for string values.
///
/// Validates `str`, so it accepts `&String` and `&str` alike. Length
/// constraints count Unicode scalar values, not bytes.
///
/// # Examples
///
/// ```
/// use ensure::prelude::*;
///
/// let v = string().starts_with("ab").is_longer_than(3);
/// assert!(v.validate("abcd").is_ok());
/// assert_eq!(v.validate("abc").unwrap_err().to_string(), "must have a length greater than 3; got 3");
/// ```
#[derive(Debug, Default)]
pub struct StringValidator {
    checks: LengthChecks<str>,
}

/// Creates an empty string validator.
#[must_use]
pub fn string() -> StringValidator {
    StringValidator::new()
}

impl StringValidator {
    /// Creates an empty string validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            checks: LengthChecks::new(),
        }
    }

    /// Adds a custom check.
    #[must_use = "builder methods must be chained or built"]
    pub fn is<F>(mut self, check: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.checks.append(move |s, _| check(s).map_err(Error::from));
        self
    }

    /// String must equal `same`.
    #[must_use = "builder methods must be chained or built"]
    pub fn equals(self, same: impl Into<String>) -> Self {
        let same = same.into();
        self.is(move |s| {
            if s == same {
                Ok(())
            } else {
                Err(format!(r#"string must equal "{same}""#).into())
            }
        })
    }

    /// String must not equal `diff`.
    #[must_use = "builder methods must be chained or built"]
    pub fn does_not_equal(self, diff: impl Into<String>) -> Self {
        let diff = diff.into();
        self.is(move |s| {
            if s == diff {
                Err(format!(r#"string must not equal "{diff}""#).into())
            } else {
                Ok(())
            }
        })
    }

    /// String must start with `prefix`.
    #[must_use = "builder methods must be chained or built"]
    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.is(move |s| {
            if s.starts_with(prefix.as_str()) {
                Ok(())
            } else {
                Err(format!(r#"string must start with "{prefix}""#).into())
            }
        })
    }

    /// String must not start with `prefix`.
    #[must_use = "builder methods must be chained or built"]
    pub fn does_not_start_with(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.is(move |s| {
            if s.starts_with(prefix.as_str()) {
                Err(format!(r#"string must not start with "{prefix}""#).into())
            } else {
                Ok(())
            }
        })
    }

    /// String must end with `suffix`.
    #[must_use = "builder methods must be chained or built"]
    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        self.is(move |s| {
            if s.ends_with(suffix.as_str()) {
                Ok(())
            } else {
                Err(format!(r#"string must end with "{suffix}""#).into())
            }
        })
    }

    /// String must not end with `suffix`.
    #[must_use = "builder methods must be chained or built"]
    pub fn does_not_end_with(self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        self.is(move |s| {
            if s.ends_with(suffix.as_str()) {
                Err(format!(r#"string must not end with "{suffix}""#).into())
            } else {
                Ok(())
            }
        })
    }

    /// String must contain `needle`.
    #[must_use = "builder methods must be chained or built"]
    pub fn contains(self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        self.is(move |s| {
            if s.contains(needle.as_str()) {
                Ok(())
            } else {
                Err(format!(r#"string must contain "{needle}""#).into())
            }
        })
    }

    /// String must not contain `needle`.
    #[must_use = "builder methods must be chained or built"]
    pub fn does_not_contain(self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        self.is(move |s| {
            if s.contains(needle.as_str()) {
                Err(format!(r#"string must not contain "{needle}""#).into())
            } else {
                Ok(())
            }
        })
    }

    /// String must be one of `values`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_one_of<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lookup: HashSet<String> = values.into_iter().map(Into::into).collect();
        self.is(move |s| {
            if lookup.contains(s) {
                Ok(())
            } else {
                Err("string must be one of the permitted values".into())
            }
        })
    }

    /// String must not be one of `values`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_not_one_of<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lookup: HashSet<String> = values.into_iter().map(Into::into).collect();
        self.is(move |s| {
            if lookup.contains(s) {
                Err("string must not be one of the prohibited values".into())
            } else {
                Ok(())
            }
        })
    }

    /// String must match `pattern`.
    ///
    /// See [`patterns`](crate::patterns) for common ones.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression.
    #[must_use = "builder methods must be chained or built"]
    pub fn matches(self, pattern: &str) -> Self {
        let regex = match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(e) => panic!("could not compile regex: {e}"),
        };
        self.matches_regex(regex)
    }

    /// String must match an already compiled expression.
    #[must_use = "builder methods must be chained or built"]
    pub fn matches_regex(self, regex: Regex) -> Self {
        self.is(move |s| {
            if regex.is_match(s) {
                Ok(())
            } else {
                Err("string does not match expected pattern".into())
            }
        })
    }

    /// String must be empty.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_empty(mut self) -> Self {
        self.checks.add_is_empty();
        self
    }

    /// String must not be empty.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_not_empty(mut self) -> Self {
        self.checks.add_is_not_empty();
        self
    }

    /// String must be exactly `len` characters long.
    #[must_use = "builder methods must be chained or built"]
    pub fn has_length(mut self, len: usize) -> Self {
        self.checks.add_has_length(len);
        self
    }

    /// String must be longer than `len` characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_longer_than(mut self, len: usize) -> Self {
        self.checks.add_is_longer_than(len);
        self
    }

    /// String must be shorter than `len` characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_shorter_than(mut self, len: usize) -> Self {
        self.checks.add_is_shorter_than(len);
        self
    }

    /// The character count must satisfy `validator`.
    #[must_use = "builder methods must be chained or built"]
    pub fn has_length_where<V>(mut self, validator: V) -> Self
    where
        V: Validate<Input = usize> + 'static,
    {
        self.checks.add_has_length_where(validator);
        self
    }
}

impl Validate for StringValidator {
    type Input = str;

    fn type_name(&self) -> &'static str {
        type_name::<String>()
    }

    fn validate_with(&self, input: &str, options: &ValidationOptions) -> Result {
        self.checks.evaluate(input, options)
    }

    fn validate_untyped(&self, value: &dyn Any, options: &ValidationOptions) -> Result {
        if let Some(s) = value.downcast_ref::<String>() {
            return self.validate_with(s, options);
        }
        let s = downcast::<&'static str>(value, self.type_name())?;
        self.validate_with(s, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn message(v: &StringValidator, input: &str) -> Option<String> {
        v.validate(input).err().map(|e| e.to_string())
    }

    #[rstest]
    #[case::equals_pass(string().equals("abc"), "abc", None)]
    #[case::equals_fail(string().equals("abc"), "abd", Some(r#"string must equal "abc""#))]
    #[case::not_equal(string().does_not_equal("abc"), "abc", Some(r#"string must not equal "abc""#))]
    #[case::starts(string().starts_with("ab"), "cab", Some(r#"string must start with "ab""#))]
    #[case::not_starts(string().does_not_start_with("ab"), "abc", Some(r#"string must not start with "ab""#))]
    #[case::ends(string().ends_with("bc"), "abc", None)]
    #[case::not_ends(string().does_not_end_with("bc"), "abc", Some(r#"string must not end with "bc""#))]
    #[case::contains(string().contains("b"), "xyz", Some(r#"string must contain "b""#))]
    #[case::not_contains(string().does_not_contain("b"), "abc", Some(r#"string must not contain "b""#))]
    #[case::one_of(string().is_one_of(["a", "b"]), "c", Some("string must be one of the permitted values"))]
    #[case::not_one_of(string().is_not_one_of(["a", "b"]), "a", Some("string must not be one of the prohibited values"))]
    #[case::matches(string().matches(patterns::ALPHA), "Bob 5", Some("string does not match expected pattern"))]
    #[case::empty(string().is_empty(), "x", Some("must be empty"))]
    #[case::not_empty(string().is_not_empty(), "", Some("must not be empty"))]
    #[case::length(string().has_length(3), "héé", None)]
    #[case::shorter(string().is_shorter_than(3), "abc", Some("must have a length less than 3; got 3"))]
    fn test_predicates(
        #[case] v: StringValidator,
        #[case] input: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(message(&v, input).as_deref(), expected);
    }

    #[test]
    fn test_custom_check() {
        let v = string().is(|s| {
            if s.chars().all(char::is_uppercase) {
                Ok(())
            } else {
                Err("must be upper case".into())
            }
        });
        assert!(v.validate("ABC").is_ok());
        assert_eq!(message(&v, "AbC").as_deref(), Some("must be upper case"));
    }

    #[test]
    #[should_panic(expected = "could not compile regex")]
    fn test_invalid_pattern_panics() {
        let _ = string().matches("(unclosed");
    }

    #[test]
    fn test_untyped_accepts_both_string_kinds() {
        let v = string().is_not_empty();
        let opts = ValidationOptions::new();

        assert!(v.validate_untyped(&String::from("x"), &opts).is_ok());
        assert!(v.validate_untyped(&"x", &opts).is_ok());
        assert!(v.validate_untyped(&5_i32, &opts).unwrap_err().is_type_error());
    }
}
