//! Length constraints layered onto a check list
//!
//! [`LengthChecks`] wraps a parent [`CheckList`] for any [`Measure`] value.
//! The first length constraint installs one derived entry into the parent;
//! every length constraint, first included, lands in a nested
//! `CheckList<usize>`. However many length constraints are registered, they
//! occupy a single slot of the parent and are evaluated together as a unit.

use std::collections::{BTreeMap, HashMap};

use crate::checks::list::{CheckList, Derived};
use crate::foundation::{Error, Result, Validate, ValidationOptions};

// ============================================================================
// MEASURE
// ============================================================================

/// Values with an element count.
pub trait Measure {
    /// Number of elements. Strings count Unicode scalar values.
    fn measure(&self) -> usize;
}

impl Measure for str {
    #[inline]
    fn measure(&self) -> usize {
        self.chars().count()
    }
}

impl Measure for String {
    #[inline]
    fn measure(&self) -> usize {
        self.as_str().measure()
    }
}

impl<T> Measure for [T] {
    #[inline]
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T> Measure for Vec<T> {
    #[inline]
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Measure for HashMap<K, V, S> {
    #[inline]
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<K, V> Measure for BTreeMap<K, V> {
    #[inline]
    fn measure(&self) -> usize {
        self.len()
    }
}

// ============================================================================
// LENGTH CHECKS
// ============================================================================

/// A parent check list plus lazily installed length constraints.
pub struct LengthChecks<T: ?Sized> {
    checks: CheckList<T>,
    lengths: CheckList<usize>,
}

impl<T: ?Sized + Measure> LengthChecks<T> {
    /// Creates empty parent and length lists.
    #[must_use]
    pub fn new() -> Self {
        Self {
            checks: CheckList::new(),
            lengths: CheckList::new(),
        }
    }

    /// Appends a check on the value itself.
    pub fn append<F>(&mut self, check: F)
    where
        F: Fn(&T, &ValidationOptions) -> Result + Send + Sync + 'static,
    {
        self.checks.append(check);
    }

    /// Appends a check on the value's length.
    pub fn add_length_check<F>(&mut self, check: F)
    where
        F: Fn(&usize, &ValidationOptions) -> Result + Send + Sync + 'static,
    {
        if self.lengths.is_empty() {
            tracing::trace!(slot = self.checks.len(), "installing length check");
            self.checks.install(Derived::Length);
        }
        self.lengths.append(check);
    }

    /// Length must be zero.
    pub fn add_is_empty(&mut self) {
        self.add_length_check(|len, _| {
            if *len == 0 {
                Ok(())
            } else {
                Err(Error::validation("must be empty"))
            }
        });
    }

    /// Length must not be zero.
    pub fn add_is_not_empty(&mut self) {
        self.add_length_check(|len, _| {
            if *len == 0 {
                Err(Error::validation("must not be empty"))
            } else {
                Ok(())
            }
        });
    }

    /// Length must equal `expected`.
    pub fn add_has_length(&mut self, expected: usize) {
        self.add_length_check(move |len, _| {
            if *len == expected {
                Ok(())
            } else {
                Err(Error::validation(format!(
                    "length must equal {expected}; got {len}"
                )))
            }
        });
    }

    /// Length must be strictly greater than `bound`.
    pub fn add_is_longer_than(&mut self, bound: usize) {
        self.add_length_check(move |len, _| {
            if *len > bound {
                Ok(())
            } else {
                Err(Error::validation(format!(
                    "must have a length greater than {bound}; got {len}"
                )))
            }
        });
    }

    /// Length must be strictly less than `bound`.
    pub fn add_is_shorter_than(&mut self, bound: usize) {
        self.add_length_check(move |len, _| {
            if *len < bound {
                Ok(())
            } else {
                Err(Error::validation(format!(
                    "must have a length less than {bound}; got {len}"
                )))
            }
        });
    }

    /// Length must satisfy an arbitrary `usize` validator.
    pub fn add_has_length_where<V>(&mut self, validator: V)
    where
        V: Validate<Input = usize> + 'static,
    {
        self.add_length_check(move |len, options| validator.validate_with(len, options));
    }

    /// Number of entries in the parent list.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if no check of any kind has been registered.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Number of registered length constraints.
    pub fn length_checks(&self) -> usize {
        self.lengths.len()
    }

    /// Runs the parent list, evaluating length constraints at their slot.
    pub fn evaluate(&self, value: &T, options: &ValidationOptions) -> Result {
        self.evaluate_with_iteration(value, options, &|_, _| Ok(()))
    }

    pub(crate) fn install_iteration(&mut self) {
        self.checks.install(Derived::Iteration);
    }

    pub(crate) fn evaluate_with_iteration(
        &self,
        value: &T,
        options: &ValidationOptions,
        iteration: &dyn Fn(&T, &ValidationOptions) -> Result,
    ) -> Result {
        self.checks
            .evaluate_with(value, options, &|kind, value, options| match kind {
                Derived::Length => self.lengths.evaluate(&value.measure(), options),
                Derived::Iteration => iteration(value, options),
            })
    }
}

impl<T: ?Sized + Measure> Default for LengthChecks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> std::fmt::Debug for LengthChecks<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LengthChecks")
            .field("checks", &self.checks)
            .field("lengths", &self.lengths)
            .finish()
    }
}
