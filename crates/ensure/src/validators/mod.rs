//! Per-kind validator builders
//!
//! Every builder starts empty, gains constraints through chained methods and
//! implements [`Validate`](crate::foundation::Validate) once built.
//!
//! - [`string`] for `str`
//! - [`number`] and [`length`] for numeric primitives
//! - [`boolean`] for `bool`
//! - [`array`] for `[T]` / `Vec<T>`
//! - [`map`] for `HashMap<K, V>`
//! - [`required`] and [`optional`] for `Option<T>`
//! - [`record`] for structs

pub mod array;
pub mod boolean;
pub mod map;
pub mod nullable;
pub mod number;
pub mod record;
pub mod string;

pub use array::{ArrayValidator, array};
pub use boolean::{BooleanValidator, boolean};
pub use map::{MapValidator, map};
pub use nullable::{Nullable, REQUIRED_MISSING_MESSAGE, optional, required};
pub use number::{Number, NumberValidator, length, number};
pub use record::{RecordValidator, record};
pub use string::{StringValidator, string};
