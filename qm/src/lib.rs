//! Quine-McCluskey Toolkit - Prime implicant computation by grouped pairwise merging
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(missing_docs)]

pub mod engine;
pub mod group;

pub use engine::{minimize, Minimizer};
pub use group::{GroupEntry, GroupTable};
