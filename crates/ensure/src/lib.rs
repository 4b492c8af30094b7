//! # ensure
//!
//! Composable value validation: build a validator once from chained
//! constraints, then evaluate values against it in fail-fast or collect-all
//! mode.
//!
//! ## Quick Start
//!
//! ```
//! use ensure::prelude::*;
//!
//! struct Signup {
//!     username: String,
//!     age: u32,
//!     tags: Vec<String>,
//! }
//!
//! let signup = record::<Signup>()
//!     .field("username", |s| &s.username, string().is_longer_than(2).matches(patterns::ALPHANUM))
//!     .field("age", |s| &s.age, number::<u32>().is_in_range(13, 130))
//!     .field("tags", |s| &s.tags, array::<String>().has_fewer_than(5).each(string().is_not_empty()))
//!     .alias("username", "Username");
//!
//! let input = Signup { username: "x!".into(), age: 9, tags: vec![] };
//!
//! // Fail-fast reports the first problem.
//! assert_eq!(
//!     signup.validate(&input).unwrap_err().to_string(),
//!     "Username: must have a length greater than 2; got 2"
//! );
//!
//! // Collect-all reports every problem.
//! let err = signup.validate_with(&input, &ValidationOptions::collect_all()).unwrap_err();
//! assert_eq!(err.into_aggregate().validation_errors().len(), 3);
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait, errors and options
//! - [`checks`]: ordered check lists and the length/iteration extensions
//! - [`validators`]: per-kind builders
//! - [`combinators`]: [`AnyOf`](combinators::AnyOf)
//! - [`patterns`]: regular expressions for string matching

// `Error` is returned by value from every check.
#![allow(clippy::result_large_err)]
#![allow(clippy::type_complexity)]

#[macro_use]
mod macros;

pub mod checks;
pub mod combinators;
pub mod foundation;
pub mod patterns;
pub mod prelude;
pub mod validators;

pub use foundation::{Error, Result};
