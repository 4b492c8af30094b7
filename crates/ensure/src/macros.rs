//! Convenience macros
//!
//! - [`any_of!`] builds an [`AnyOf`](crate::combinators::AnyOf) from a list

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// Builds an [`AnyOf`](crate::combinators::AnyOf) from one or more validators.
///
/// Pass-through indices can follow a `;`.
///
/// ```
/// use ensure::prelude::*;
///
/// let v = ensure::any_of![number::<i32>().is_zero(), number::<i32>().is_greater_than(100)];
/// assert!(v.validate(&0).is_ok());
/// assert!(v.validate(&50).is_err());
///
/// let v = ensure::any_of![string().is_empty(), string().matches(patterns::ALPHA); 1];
/// assert_eq!(
///     v.validate("Bob 5").unwrap_err().to_string(),
///     "string does not match expected pattern"
/// );
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::combinators::any_of($first)$(.or($rest))*
    };
    ($first:expr $(, $rest:expr)* ; $($index:expr),+ $(,)?) => {
        $crate::combinators::any_of($first)$(.or($rest))*.pass_through_errors_from([$($index),+])
    };
}
