//! Numeric validator for every integer and float primitive

use std::any::{Any, type_name};
use std::fmt::{Debug, Display};

use crate::checks::CheckList;
use crate::foundation::{
    Error, Result, Validate, ValidationError, ValidationOptions, downcast,
};

// ============================================================================
// NUMBER TRAIT
// ============================================================================

/// Primitive numeric types accepted by [`NumberValidator`].
pub trait Number: Copy + PartialOrd + Display + Debug + Send + Sync + 'static {
    /// The additive identity.
    const ZERO: Self;

    /// Returns true if the value is an even whole number.
    fn is_even(self) -> bool;

    /// Returns true if the value is an odd whole number.
    fn is_odd(self) -> bool;
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl Number for $ty {
            const ZERO: Self = 0;

            #[inline]
            fn is_even(self) -> bool {
                self & 1 == 0
            }

            #[inline]
            fn is_odd(self) -> bool {
                self & 1 == 1
            }
        }
    )*};
}

// Parity of a float only exists for whole values. `%` is exact for floats,
// so this holds past the range of any integer type; NaN and infinities are
// neither even nor odd.
macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {$(
        impl Number for $ty {
            const ZERO: Self = 0.0;

            #[inline]
            fn is_even(self) -> bool {
                self % 2.0 == 0.0
            }

            #[inline]
            fn is_odd(self) -> bool {
                self.fract() == 0.0 && self % 2.0 != 0.0
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

// ============================================================================
// VALIDATOR
// ============================================================================

/// Builder and evaluator for a numeric type `N`.
///
/// # Examples
///
/// ```
/// use ensure::prelude::*;
///
/// let v = number::<i32>().is_in_range(1, 10);
/// assert!(v.validate(&1).is_ok());
/// assert!(v.validate(&9).is_ok());
/// assert_eq!(
///     v.validate(&10).unwrap_err().to_string(),
///     "number must be in the range [1, 10); got 10"
/// );
/// ```
#[derive(Debug, Default)]
pub struct NumberValidator<N> {
    checks: CheckList<N>,
}

/// Creates an empty validator for `N`.
#[must_use]
pub fn number<N: Number>() -> NumberValidator<N> {
    NumberValidator::new()
}

/// Creates an empty validator for lengths and counts.
#[must_use]
pub fn length() -> NumberValidator<usize> {
    NumberValidator::new()
}

impl<N: Number> NumberValidator<N> {
    /// Creates an empty validator.
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
        F: Fn(N) -> std::result::Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.checks.append(move |n, _| check(*n).map_err(Error::from));
        self
    }

    /// Same as [`is`](Self::is); reads better for some predicates.
    #[must_use = "builder methods must be chained or built"]
    pub fn has<F>(self, check: F) -> Self
    where
        F: Fn(N) -> std::result::Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.is(check)
    }

    /// Number must lie in `[min, max)`.
    ///
    /// # Panics
    ///
    /// Panics if `max` is less than `min`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_in_range(self, min: N, max: N) -> Self {
        if max < min {
            panic!("max cannot be less than min");
        }
        self.is(move |n| {
            if n < min || n >= max {
                Err(format!("number must be in the range [{min}, {max}); got {n}").into())
            } else {
                Ok(())
            }
        })
    }

    /// Number must equal `target`.
    #[must_use = "builder methods must be chained or built"]
    pub fn equals(self, target: N) -> Self {
        self.is(move |n| {
            if n == target {
                Ok(())
            } else {
                Err(format!("number must equal {target}; got {n}").into())
            }
        })
    }

    /// Number must not equal `target`.
    #[must_use = "builder methods must be chained or built"]
    pub fn does_not_equal(self, target: N) -> Self {
        self.is(move |n| {
            if n == target {
                Err(format!("number must not equal {target}; got {n}").into())
            } else {
                Ok(())
            }
        })
    }

    /// Number must be less than `target`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_less_than(self, target: N) -> Self {
        self.is(move |n| {
            if n < target {
                Ok(())
            } else {
                Err(format!("number must be less than {target}; got {n}").into())
            }
        })
    }

    /// Number must be at most `target`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_less_than_or_equal_to(self, target: N) -> Self {
        self.is(move |n| {
            if n <= target {
                Ok(())
            } else {
                Err(format!("number must be less than or equal to {target}; got {n}").into())
            }
        })
    }

    /// Number must be greater than `target`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_greater_than(self, target: N) -> Self {
        self.is(move |n| {
            if n > target {
                Ok(())
            } else {
                Err(format!("number must be greater than {target}; got {n}").into())
            }
        })
    }

    /// Number must be at least `target`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_greater_than_or_equal_to(self, target: N) -> Self {
        self.is(move |n| {
            if n >= target {
                Ok(())
            } else {
                Err(format!("number must be greater than or equal to {target}; got {n}").into())
            }
        })
    }

    /// Number must be even. Floats with a fractional part never are.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_even(self) -> Self {
        self.is(|n| {
            if n.is_even() {
                Ok(())
            } else {
                Err(format!("number must be even; got {n}").into())
            }
        })
    }

    /// Number must be odd. Floats with a fractional part never are.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_odd(self) -> Self {
        self.is(|n| {
            if n.is_odd() {
                Ok(())
            } else {
                Err(format!("number must be odd; got {n}").into())
            }
        })
    }

    /// Shorthand for `is_greater_than(0)`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_positive(self) -> Self {
        self.is_greater_than(N::ZERO)
    }

    /// Shorthand for `is_less_than(0)`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_negative(self) -> Self {
        self.is_less_than(N::ZERO)
    }

    /// Shorthand for `equals(0)`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_zero(self) -> Self {
        self.equals(N::ZERO)
    }

    /// Shorthand for `does_not_equal(0)`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_not_zero(self) -> Self {
        self.does_not_equal(N::ZERO)
    }

    /// Number must be one of `values`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_one_of(self, values: impl IntoIterator<Item = N>) -> Self {
        let values: Vec<N> = values.into_iter().collect();
        self.is(move |n| {
            if values.contains(&n) {
                Ok(())
            } else {
                Err("number must be one of the permitted values".into())
            }
        })
    }

    /// Number must not be one of `values`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_not_one_of(self, values: impl IntoIterator<Item = N>) -> Self {
        let values: Vec<N> = values.into_iter().collect();
        self.is(move |n| {
            if values.contains(&n) {
                Err("number must not be one of the prohibited values".into())
            } else {
                Ok(())
            }
        })
    }
}

impl<N: Number> Validate for NumberValidator<N> {
    type Input = N;

    fn type_name(&self) -> &'static str {
        type_name::<N>()
    }

    fn validate_with(&self, input: &N, options: &ValidationOptions) -> Result {
        self.checks.evaluate(input, options)
    }

    fn validate_untyped(&self, value: &dyn Any, options: &ValidationOptions) -> Result {
        let n = downcast::<N>(value, self.type_name())?;
        self.validate_with(n, options)
    }
}
