//! Validators composed from other validators

pub mod any;

pub use any::{Alternative, AnyOf, any_of};
