//! Concrete input vectors and exhaustive enumeration over them.
use std::fmt;

use crate::MAX_VARS;

/// One concrete assignment of input bits for a function of a fixed width.
///
/// Bit positions are indexed most-significant-first, matching the declared variable order: the
/// first declared variable is position 0 and corresponds to the highest value bit of
/// [`value`][Self::value].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Assignment {
    width: usize,
    bits: u64,
}

impl Assignment {
    /// Builds the assignment for a given numeric input vector.
    pub fn new(width: usize, value: u64) -> Self {
        assert!(width <= MAX_VARS);
        debug_assert!(value >> width == 0);
        Self { width, bits: value }
    }

    /// Returns the number of input bits.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the assignment as a number, with the first declared variable as the highest
    /// value bit.
    pub fn value(&self) -> u64 {
        self.bits
    }

    /// Returns the bit for the variable at the given declared position.
    pub fn bit(&self, pos: usize) -> bool {
        assert!(pos < self.width);
        self.bits >> (self.width - 1 - pos) & 1 != 0
    }
}

impl fmt::Debug for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in 0..self.width {
            write!(f, "{}", self.bit(pos) as u8)?;
        }
        Ok(())
    }
}

/// Lazy enumeration of all `2^width` assignments in increasing numeric order.
///
/// The enumeration is restartable by cloning it before use.
#[derive(Clone)]
pub struct Assignments {
    width: usize,
    next: u64,
    end: u64,
}

impl Assignments {
    /// Enumerates every assignment of the given width, starting from all zeros.
    pub fn new(width: usize) -> Self {
        assert!(width <= MAX_VARS);
        Self {
            width,
            next: 0,
            end: 1 << width,
        }
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Assignment> {
        if self.next == self.end {
            return None;
        }
        let assignment = Assignment::new(self.width, self.next);
        self.next += 1;
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments {}
