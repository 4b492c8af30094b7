//! Evaluation and combinator options
//!
//! [`ValidationOptions`] is threaded by reference through every evaluation
//! call. [`AnyOptions`] configures how an [`AnyOf`](crate::combinators::AnyOf)
//! reports failure. Both deserialize with defaults so they can be loaded from
//! application configuration.

use std::borrow::Cow;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Message returned when no alternative of an `AnyOf` passes and no
/// pass-through error is available.
pub const DEFAULT_ANY_ERROR: &str = "none of the required validators passed";

// ============================================================================
// VALIDATION OPTIONS
// ============================================================================

/// Settings for a single validation call.
///
/// The default is fail-fast: evaluation stops at the first failing check and
/// returns that error alone.
///
/// # Examples
///
/// ```
/// use ensure::foundation::ValidationOptions;
///
/// let opts = ValidationOptions::new().with_collect_all_errors(true);
/// assert!(opts.collect_all_errors());
/// assert!(!ValidationOptions::default().collect_all_errors());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    collect_all_errors: bool,
}

impl ValidationOptions {
    /// Fail-fast options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            collect_all_errors: false,
        }
    }

    /// Options that run every check and aggregate all failures.
    #[must_use]
    pub const fn collect_all() -> Self {
        Self {
            collect_all_errors: true,
        }
    }

    /// Sets whether every check runs and all failures are aggregated.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_collect_all_errors(mut self, collect: bool) -> Self {
        self.collect_all_errors = collect;
        self
    }

    /// Returns true when every check must run and all errors be collected.
    #[must_use]
    pub const fn collect_all_errors(&self) -> bool {
        self.collect_all_errors
    }
}

/// Shorthand for [`ValidationOptions::new`].
#[must_use]
pub const fn options() -> ValidationOptions {
    ValidationOptions::new()
}

// ============================================================================
// ANY OPTIONS
// ============================================================================

/// Error-reporting policy of an `AnyOf` whose alternatives all failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnyOptions {
    default_error: Cow<'static, str>,
    pass_through: BTreeSet<usize>,
}

impl Default for AnyOptions {
    fn default() -> Self {
        Self {
            default_error: Cow::Borrowed(DEFAULT_ANY_ERROR),
            pass_through: BTreeSet::new(),
        }
    }
}

impl AnyOptions {
    /// Options with the default message and no pass-through indices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the generic failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default_error(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.default_error = message.into();
        self
    }

    /// Surfaces the errors of the alternatives at these indices.
    #[must_use = "builder methods must be chained or built"]
    pub fn pass_through_errors_from(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.pass_through.extend(indices);
        self
    }

    /// The generic failure message.
    pub fn default_error(&self) -> &str {
        &self.default_error
    }

    /// Returns true if errors from the alternative at `index` are surfaced.
    pub fn passes_through(&self, index: usize) -> bool {
        self.pass_through.contains(&index)
    }

    /// Pass-through indices in ascending order.
    pub fn pass_through_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.pass_through.iter().copied()
    }
}
