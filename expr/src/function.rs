//! Ordered sums of terms and their evaluation.
use std::{fmt, ops};

use crate::{assign::Assignment, assign::Assignments, error::Error, term::Term};

/// A Boolean function in sum-of-products form: the OR over an ordered sequence of terms.
///
/// Term order is insertion order. It has no logical significance but is preserved for
/// display. All terms of a function are expected to share one width; the minimization entry
/// point rejects functions violating this.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Function {
    terms: Vec<Term>,
}

impl Function {
    /// Builds the empty function, which accepts no assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a term, keeping insertion order.
    pub fn push(&mut self, term: Term) {
        self.terms.push(term);
    }

    /// Appends every term of another function, flattening it into this one.
    pub fn extend_from(&mut self, other: &Function) {
        self.terms.extend(other.terms.iter().cloned());
    }

    /// Iterates over the terms in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Returns the number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns whether the function has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the width shared by the function's terms, or 0 when empty.
    pub fn term_width(&self) -> usize {
        match self.terms.first() {
            Some(term) => term.width(),
            None => 0,
        }
    }

    /// Evaluates the function as the OR over all terms.
    ///
    /// Fails with [`Error::WidthMismatch`] when any term's width differs from the
    /// assignment's.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, Error> {
        let mut result = false;
        for term in self.terms.iter() {
            result = result || term.evaluate(assignment)?;
        }
        Ok(result)
    }

    /// Ground-truth equality: both functions accept exactly the same assignments.
    pub fn semantically_eq(&self, other: &Function) -> Result<bool, Error> {
        let width = self.term_width();
        for assignment in Assignments::new(width) {
            if self.evaluate(&assignment)? != other.evaluate(&assignment)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Expands the function into standard sum-of-products form.
    ///
    /// Every assignment the function accepts becomes one fully specified minterm, in
    /// increasing assignment order and without duplicates. This is the level-0 input the
    /// merge engine requires.
    pub fn expand_minterms(&self) -> Result<Function, Error> {
        let width = self.term_width();
        let mut expanded = Function::new();
        for assignment in Assignments::new(width) {
            if self.evaluate(&assignment)? {
                expanded.push(Term::from_assignment(&assignment));
            }
        }
        log::debug!(
            "expanded {} terms into {} minterms over {} variables",
            self.len(),
            expanded.len(),
            width
        );
        Ok(expanded)
    }
}

impl FromIterator<Term> for Function {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self {
            terms: Vec::from_iter(iter),
        }
    }
}

impl From<Term> for Function {
    fn from(term: Term) -> Self {
        Self { terms: vec![term] }
    }
}

impl<'a> IntoIterator for &'a Function {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl ops::Add for Term {
    type Output = Function;

    fn add(self, rhs: Term) -> Function {
        Function {
            terms: vec![self, rhs],
        }
    }
}

impl ops::Add<Term> for Function {
    type Output = Function;

    fn add(mut self, rhs: Term) -> Function {
        self.push(rhs);
        self
    }
}

impl ops::Add for Function {
    type Output = Function;

    fn add(mut self, rhs: Function) -> Function {
        self.extend_from(&rhs);
        self
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, term) in self.terms.iter().enumerate() {
            if index != 0 {
                write!(f, " + ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(literal: &str, variables: &str) -> Term {
        Term::from_literal(literal, variables).unwrap()
    }

    #[test]
    fn evaluates_as_or() {
        let f = term("AB", "AB") + term("^A^B", "AB");
        let accepted: Vec<u64> = Assignments::new(2)
            .filter(|a| f.evaluate(a).unwrap())
            .map(|a| a.value())
            .collect();
        assert_eq!(accepted, [0b00, 0b11]);
        assert!(Function::new().is_empty());
        assert_eq!(Function::new().term_width(), 0);
    }

    #[test]
    fn composition_does_not_mutate_operands() {
        let a = Function::from(term("A", "AB"));
        let b = Function::from(term("B", "AB"));
        let sum = a.clone() + b.clone();
        assert_eq!(sum.len(), 2);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert_eq!(sum.to_string(), "1X + X1");
    }

    #[test]
    fn minterm_expansion() {
        let f = Function::from(term("A", "AB"));
        let expanded = f.expand_minterms().unwrap();
        assert_eq!(expanded.to_string(), "10 + 11");
        assert!(f.semantically_eq(&expanded).unwrap());

        // Overlapping terms do not produce duplicate minterms.
        let overlapping = term("A", "AB") + term("AB", "AB");
        assert_eq!(overlapping.expand_minterms().unwrap().len(), 2);
    }

    #[test]
    fn mismatched_width_is_rejected() {
        let mut f = Function::from(term("A", "AB"));
        f.push(term("A", "A"));
        assert_eq!(
            f.evaluate(&Assignment::new(2, 0)),
            Err(Error::WidthMismatch { expected: 1, found: 2 })
        );
    }
}
