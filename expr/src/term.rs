//! Fixed-width tri-state terms, the product part of a sum-of-products expression.
use std::fmt;

use crate::{assign::Assignment, assign::Assignments, error::Error, trit::Trit};

/// Character marking the following variable as negated in a term literal.
pub const INVERTER: char = '^';

/// A product term over a fixed set of variables.
///
/// Each digit constrains one variable, most-significant-first in declared order; a
/// [`DontCare`][Trit::DontCare] digit leaves its variable unconstrained. The width is fixed at
/// construction and never changes.
///
/// The derived `PartialEq`/`Eq`/`Hash` compare digit sequences. For terms of equal width this
/// coincides with the semantic equality checked by [`semantically_eq`][Self::semantically_eq],
/// which remains the ground truth definition.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Term {
    digits: Box<[Trit]>,
}

impl Term {
    /// Builds a term leaving every variable unconstrained.
    pub fn dont_care(width: usize) -> Self {
        Self {
            digits: vec![Trit::DontCare; width].into_boxed_slice(),
        }
    }

    /// Builds a term from an explicit digit sequence.
    pub fn from_digits(digits: Vec<Trit>) -> Self {
        Self {
            digits: digits.into_boxed_slice(),
        }
    }

    /// Parses a term literal such as `A^BC` against the declared variable string.
    ///
    /// Every uppercase letter constrains the digit at its position within `variables`, to `0`
    /// when immediately preceded by [`INVERTER`] and to `1` otherwise. Variables the literal
    /// never mentions stay don't-care. The resulting width is `variables.len()`.
    pub fn from_literal(literal: &str, variables: &str) -> Result<Self, Error> {
        if literal.is_empty() {
            return Err(Error::MalformedLiteral(literal.to_owned()));
        }
        let mut term = Self::dont_care(variables.chars().count());
        let mut invert = false;
        for ch in literal.chars() {
            if ch == INVERTER {
                if invert {
                    return Err(Error::MalformedLiteral(literal.to_owned()));
                }
                invert = true;
                continue;
            }
            if !ch.is_ascii_uppercase() {
                return Err(Error::MalformedLiteral(literal.to_owned()));
            }
            let Some(pos) = variables.chars().position(|var| var == ch) else {
                return Err(Error::UndeclaredVariable(ch));
            };
            term.digits[pos] = Trit::from(!invert);
            invert = false;
        }
        if invert {
            return Err(Error::MalformedLiteral(literal.to_owned()));
        }
        Ok(term)
    }

    /// Builds the fully specified term matching exactly the given assignment.
    pub fn from_assignment(assignment: &Assignment) -> Self {
        Self {
            digits: (0..assignment.width())
                .map(|pos| Trit::from(assignment.bit(pos)))
                .collect(),
        }
    }

    /// Returns the number of variables this term ranges over.
    pub fn width(&self) -> usize {
        self.digits.len()
    }

    /// Returns the digit sequence, most-significant-first.
    pub fn digits(&self) -> &[Trit] {
        &self.digits
    }

    /// Returns the digit at the given declared variable position.
    pub fn digit(&self, pos: usize) -> Trit {
        self.digits[pos]
    }

    /// Counts the digits fixed to the given value. Don't-care digits are never counted.
    pub fn weight_of(&self, value: bool) -> usize {
        self.digits
            .iter()
            .filter(|digit| digit.definite() == Some(value))
            .count()
    }

    /// Counts the digits fixed to `1`, the bucket key used when grouping terms.
    pub fn weight(&self) -> usize {
        self.weight_of(true)
    }

    /// Counts the digit positions where the two terms differ.
    ///
    /// A definite digit paired with a don't-care counts as a difference. Returns `None` when
    /// the widths differ.
    pub fn hamming_distance(&self, other: &Self) -> Option<usize> {
        if self.width() != other.width() {
            return None;
        }
        Some(
            self.digits
                .iter()
                .zip(other.digits.iter())
                .filter(|(a, b)| a != b)
                .count(),
        )
    }

    /// Returns whether the term matches the given assignment.
    ///
    /// Every definite digit must equal the corresponding assignment bit; don't-care digits
    /// always match. Fails with [`Error::WidthMismatch`] when the widths differ.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, Error> {
        if self.width() != assignment.width() {
            return Err(Error::WidthMismatch {
                expected: self.width(),
                found: assignment.width(),
            });
        }
        Ok(self.matches_assignment(assignment))
    }

    pub(crate) fn matches_assignment(&self, assignment: &Assignment) -> bool {
        debug_assert_eq!(self.width(), assignment.width());
        self.digits
            .iter()
            .enumerate()
            .all(|(pos, digit)| digit.matches(assignment.bit(pos)))
    }

    /// Ground-truth equality: both terms accept exactly the same assignments.
    ///
    /// This compares the two terms over all `2^width` assignments. For terms of equal width
    /// this agrees with `==`, which compares digit sequences directly; terms of different
    /// widths are never semantically equal.
    pub fn semantically_eq(&self, other: &Self) -> bool {
        if self.width() != other.width() {
            return false;
        }
        Assignments::new(self.width())
            .all(|assignment| self.matches_assignment(&assignment) == other.matches_assignment(&assignment))
    }

    /// Renders the term as a literal string over the given declared variables.
    ///
    /// Yields the empty string for a term with no definite digits (the constant-true term).
    pub fn literal_string(&self, variables: &str) -> String {
        let mut out = String::new();
        for (digit, var) in self.digits.iter().zip(variables.chars()) {
            match digit.definite() {
                Some(true) => out.push(var),
                Some(false) => {
                    out.push(INVERTER);
                    out.push(var);
                }
                None => {}
            }
        }
        out
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits.iter() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Merges two terms whose Hamming distance is exactly 1.
///
/// The result is a copy of `a` with the single differing digit replaced by a don't-care; it
/// accepts precisely the assignments accepted by `a` or `b` and nothing else. Fails with
/// [`Error::WidthMismatch`] on differing widths and [`Error::InvalidMerge`] for any other
/// distance.
pub fn merge_adjacent(a: &Term, b: &Term) -> Result<Term, Error> {
    let Some(distance) = a.hamming_distance(b) else {
        return Err(Error::WidthMismatch {
            expected: a.width(),
            found: b.width(),
        });
    };
    if distance != 1 {
        return Err(Error::InvalidMerge { distance });
    }
    let mut merged = a.clone();
    for (pos, digit) in merged.digits.iter_mut().enumerate() {
        if *digit != b.digits[pos] {
            *digit = Trit::DontCare;
        }
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(literal: &str, variables: &str) -> Term {
        Term::from_literal(literal, variables).unwrap()
    }

    #[test]
    fn literal_parsing() {
        assert_eq!(term("AB", "AB").to_string(), "11");
        assert_eq!(term("A^B", "AB").to_string(), "10");
        assert_eq!(term("^AB", "AB").to_string(), "01");
        assert_eq!(term("A", "ABC").to_string(), "1XX");
        assert_eq!(term("^C", "ABC").to_string(), "XX0");
    }

    #[test]
    fn literal_respects_declared_order() {
        // With B declared first, B constrains the most significant digit.
        assert_eq!(term("^B", "BA").to_string(), "0X");
        assert_eq!(term("A", "BA").to_string(), "X1");
    }

    #[test]
    fn malformed_literals() {
        for literal in ["", "^", "A^", "^^A", "aB", "A+B"] {
            assert_eq!(
                Term::from_literal(literal, "AB"),
                Err(Error::MalformedLiteral(literal.to_owned())),
                "literal {literal:?}"
            );
        }
        assert_eq!(Term::from_literal("C", "AB"), Err(Error::UndeclaredVariable('C')));
    }

    #[test]
    fn weights() {
        let t = term("A^BC", "ABC");
        assert_eq!(t.weight_of(true), 2);
        assert_eq!(t.weight_of(false), 1);
        assert_eq!(term("A", "ABC").weight(), 1);
        assert_eq!(Term::dont_care(3).weight_of(true), 0);
        assert_eq!(Term::dont_care(3).weight_of(false), 0);
    }

    #[test]
    fn hamming_distance() {
        let ab = term("AB", "AB");
        assert_eq!(ab.hamming_distance(&ab), Some(0));
        assert_eq!(ab.hamming_distance(&term("A^B", "AB")), Some(1));
        assert_eq!(ab.hamming_distance(&term("^A^B", "AB")), Some(2));
        // A definite digit against a don't-care counts as a difference.
        assert_eq!(ab.hamming_distance(&term("A", "AB")), Some(1));
        assert_eq!(ab.hamming_distance(&term("A", "A")), None);
    }

    #[test]
    fn evaluation() {
        let t = term("A", "AB");
        let accepted: Vec<u64> = Assignments::new(2)
            .filter(|a| t.evaluate(a).unwrap())
            .map(|a| a.value())
            .collect();
        assert_eq!(accepted, [0b10, 0b11]);

        let narrow = Assignment::new(1, 0);
        assert_eq!(
            t.evaluate(&narrow),
            Err(Error::WidthMismatch { expected: 2, found: 1 })
        );
    }

    #[test]
    fn assignment_round_trip() {
        for assignment in Assignments::new(3) {
            let t = Term::from_assignment(&assignment);
            assert_eq!(t.weight(), assignment.value().count_ones() as usize);
            for probe in Assignments::new(3) {
                assert_eq!(t.evaluate(&probe).unwrap(), probe == assignment);
            }
        }
    }

    #[test]
    fn merge_at_distance_one() {
        let merged = merge_adjacent(&term("AB", "AB"), &term("A^B", "AB")).unwrap();
        assert_eq!(merged.to_string(), "1X");
        // Merging is commutative in its result.
        let flipped = merge_adjacent(&term("A^B", "AB"), &term("AB", "AB")).unwrap();
        assert_eq!(merged, flipped);
    }

    #[test]
    fn merge_rejects_other_distances() {
        let a = term("A^B", "AB");
        let b = term("^AB", "AB");
        assert_eq!(merge_adjacent(&a, &b), Err(Error::InvalidMerge { distance: 2 }));
        assert_eq!(merge_adjacent(&a, &a), Err(Error::InvalidMerge { distance: 0 }));
        assert_eq!(
            merge_adjacent(&a, &term("A", "A")),
            Err(Error::WidthMismatch { expected: 2, found: 1 })
        );
    }

    #[test]
    fn semantic_equality() {
        let a = term("A", "AB");
        assert!(a.semantically_eq(&a));
        assert!(a.semantically_eq(&term("A", "AB")));
        assert!(!a.semantically_eq(&term("B", "AB")));
        assert!(!a.semantically_eq(&term("A", "A")));

        // Structural equality implies semantic equality and vice versa at equal width.
        for lhs in ["AB", "A", "^B", "^A^B"] {
            for rhs in ["AB", "A", "^B", "^A^B"] {
                let (lhs, rhs) = (term(lhs, "AB"), term(rhs, "AB"));
                assert_eq!(lhs == rhs, lhs.semantically_eq(&rhs));
            }
        }
    }

    #[test]
    fn literal_rendering() {
        assert_eq!(term("A^B", "AB").literal_string("AB"), "A^B");
        assert_eq!(term("B", "AB").literal_string("AB"), "B");
        assert_eq!(Term::dont_care(2).literal_string("AB"), "");
    }
}
