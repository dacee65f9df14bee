//! Error values shared by expression parsing and minimization.
use std::fmt;

/// Failure reported by expression parsing or term manipulation.
///
/// None of these are recoverable mid-run: parsing either yields a usable function or the run
/// is aborted, and the contract violations ([`WidthMismatch`][Self::WidthMismatch],
/// [`InvalidMerge`][Self::InvalidMerge]) indicate caller bugs rather than bad user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// No input was given to the expression parser.
    EmptyExpression,
    /// The input line does not match the `Name(A,B,...)=TERM+TERM+...` grammar.
    MalformedExpression(String),
    /// A term literal could not be parsed into digits.
    MalformedLiteral(String),
    /// A term literal references a variable that was not declared.
    UndeclaredVariable(char),
    /// Two terms, or a term and an assignment, have different widths.
    WidthMismatch {
        /// Width of the left operand.
        expected: usize,
        /// Width of the right operand.
        found: usize,
    },
    /// Two terms with a Hamming distance other than 1 were passed to
    /// [`merge_adjacent`][crate::merge_adjacent].
    InvalidMerge {
        /// The actual Hamming distance of the two operands.
        distance: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "expression is empty"),
            Self::MalformedExpression(expr) => {
                write!(f, "expression {expr:?} does not match the expected form")
            }
            Self::MalformedLiteral(literal) => {
                write!(f, "term literal {literal:?} could not be parsed")
            }
            Self::UndeclaredVariable(var) => {
                write!(f, "term uses undeclared variable {var}")
            }
            Self::WidthMismatch { expected, found } => {
                write!(f, "operand widths differ ({expected} vs {found})")
            }
            Self::InvalidMerge { distance } => {
                write!(f, "terms at hamming distance {distance} cannot be merged")
            }
        }
    }
}

impl std::error::Error for Error {}
