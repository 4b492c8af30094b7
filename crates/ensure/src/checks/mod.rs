//! Check lists and the length/iteration extensions built on them

pub mod iteration;
pub mod length;
pub mod list;

pub use iteration::{IterationChecks, PairView, map_pairs, slice_pairs};
pub use length::{LengthChecks, Measure};
pub use list::{Check, CheckList};
