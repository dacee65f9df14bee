//! Quine-McCluskey Toolkit - Boolean expressions in sum-of-products form
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(missing_docs)]

pub mod assign;
pub mod error;
pub mod function;
pub mod parse;
pub mod term;
pub mod trit;

pub use assign::{Assignment, Assignments};
pub use error::Error;
pub use function::Function;
pub use parse::{parse_expression, ParsedExpr};
pub use term::{merge_adjacent, Term};
pub use trit::Trit;

/// Upper bound on the number of declared variables.
///
/// The expression grammar names variables with single uppercase letters, so no function can
/// declare more than 26 of them. This also keeps brute-force enumeration over all `2^width`
/// assignments tractable as a ground-truth check.
pub const MAX_VARS: usize = 26;
