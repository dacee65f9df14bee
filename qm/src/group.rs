//! Weight-keyed grouping tables for one merge level.
use std::{fmt, hash::BuildHasherDefault};

use hashbrown::HashSet;
use qmtk_expr::Term;
use zwohash::ZwoHasher;

type TermSet = HashSet<Term, BuildHasherDefault<ZwoHasher>>;

/// One term stored in a [`GroupTable`], together with its transient combined marker.
///
/// The marker is set when the term is consumed into a merge. It lives next to the term in the
/// table rather than inside [`Term`] itself, so terms stay free of per-run bookkeeping.
#[derive(Clone, Debug)]
pub struct GroupEntry {
    /// The stored term.
    pub term: Term,
    /// Whether the term was consumed into a merge at this level.
    pub combined: bool,
}

/// A partition of equal-width terms into buckets keyed by weight.
///
/// The weight of a term is its count of definite-1 digits, so a table for width `w` has
/// buckets `0..=w`. Only terms in adjacent buckets can be at Hamming distance 1, which is
/// what lets the merge engine scope its candidate pairs.
pub struct GroupTable {
    width: usize,
    buckets: Vec<Vec<GroupEntry>>,
    seen: TermSet,
}

impl GroupTable {
    /// Builds an empty table for terms of the given width.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            buckets: vec![Vec::new(); width + 1],
            seen: TermSet::default(),
        }
    }

    /// Returns the term width this table was built for.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Inserts a term into the bucket for its weight.
    ///
    /// Structural duplicates are dropped; returns whether the term was actually stored.
    pub fn insert(&mut self, term: Term) -> bool {
        assert_eq!(term.width(), self.width);
        if !self.seen.insert(term.clone()) {
            return false;
        }
        let weight = term.weight();
        self.buckets[weight].push(GroupEntry {
            term,
            combined: false,
        });
        true
    }

    /// Returns the entries bucketed under the given weight, in insertion order.
    pub fn bucket(&self, weight: usize) -> &[GroupEntry] {
        &self.buckets[weight]
    }

    /// Sets the combined marker on one entry.
    pub fn mark_combined(&mut self, weight: usize, index: usize) {
        self.buckets[weight][index].combined = true;
    }

    /// Returns whether the table holds no terms at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.is_empty())
    }

    /// Returns the total number of stored terms.
    pub fn term_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.len()).sum()
    }

    /// Iterates over `(weight, entries)` pairs for every bucket, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[GroupEntry])> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(weight, bucket)| (weight, bucket.as_slice()))
    }
}

impl fmt::Display for GroupTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (weight, bucket) in self.iter() {
            if bucket.is_empty() {
                continue;
            }
            write!(f, "weight {weight}:")?;
            for entry in bucket {
                write!(f, " {}{}", entry.term, if entry.combined { "*" } else { "" })?;
            }
            writeln!(f)?;
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
    fn buckets_by_weight() {
        let mut table = GroupTable::new(3);
        assert!(table.insert(term("^A^B^C", "ABC")));
        assert!(table.insert(term("A^BC", "ABC")));
        assert!(table.insert(term("AB", "ABC")));
        assert_eq!(table.bucket(0).len(), 1);
        assert_eq!(table.bucket(1).len(), 0);
        assert_eq!(table.bucket(2).len(), 2);
        assert_eq!(table.bucket(3).len(), 0);
        assert_eq!(table.term_count(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn deduplicates_structurally() {
        let mut table = GroupTable::new(2);
        assert!(table.insert(term("AB", "AB")));
        assert!(!table.insert(term("AB", "AB")));
        assert_eq!(table.term_count(), 1);
    }

    #[test]
    fn combined_markers() {
        let mut table = GroupTable::new(2);
        table.insert(term("AB", "AB"));
        assert!(!table.bucket(2)[0].combined);
        table.mark_combined(2, 0);
        assert!(table.bucket(2)[0].combined);
    }

    #[test]
    fn display_marks_combined_terms() {
        let mut table = GroupTable::new(2);
        table.insert(term("A^B", "AB"));
        table.insert(term("AB", "AB"));
        table.mark_combined(1, 0);
        assert_eq!(table.to_string(), "weight 1: 10*\nweight 2: 11\n");
    }
}
