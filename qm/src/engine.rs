//! The merge engine: iterative weight-grouped merging down to prime implicants.
use qmtk_expr::{merge_adjacent, Error, Function};

use crate::group::GroupTable;

/// Quine-McCluskey minimizer for one function.
///
/// Construction expands the input into standard sum-of-products form and buckets its minterms
/// into the level-0 [`GroupTable`]. [`compress`][Self::compress] then repeatedly merges
/// weight-adjacent term pairs at Hamming distance 1, building one fresh table per level,
/// until a full pass produces no new term. Terms never consumed into a merge are the prime
/// implicants.
pub struct Minimizer {
    sop: Function,
    levels: Vec<GroupTable>,
}

impl Minimizer {
    /// Prepares a minimization run for the given function.
    ///
    /// The input is read, never mutated. Fails with [`Error::EmptyExpression`] for a function
    /// without terms and with [`Error::WidthMismatch`] when its terms disagree on width.
    pub fn new(function: &Function) -> Result<Self, Error> {
        if function.is_empty() {
            return Err(Error::EmptyExpression);
        }
        let width = function.term_width();
        for term in function {
            if term.width() != width {
                return Err(Error::WidthMismatch {
                    expected: width,
                    found: term.width(),
                });
            }
        }

        let sop = function.expand_minterms()?;
        let mut level0 = GroupTable::new(width);
        for term in &sop {
            level0.insert(term.clone());
        }
        log::debug!("level 0: {} minterms", level0.term_count());

        Ok(Self {
            sop,
            levels: vec![level0],
        })
    }

    /// Returns the expanded standard sum-of-products form of the input.
    pub fn sop(&self) -> &Function {
        &self.sop
    }

    /// Returns the term width of the function being minimized.
    pub fn width(&self) -> usize {
        self.levels[0].width()
    }

    /// Runs the merge loop to its fixpoint.
    ///
    /// Each pass scans every pair of adjacent weight buckets of the newest level, merges every
    /// cross-bucket pair at Hamming distance 1, marks both sources combined and collects the
    /// deduplicated results into the next level's table. A pass yielding no merges ends the
    /// loop; its empty table is discarded. Calling this again after the fixpoint is a no-op.
    pub fn compress(&mut self) {
        loop {
            let level = self.levels.len() - 1;
            let width = self.levels[level].width();
            let mut next = GroupTable::new(width);

            for low in 0..width {
                let high = low + 1;
                let left_len = self.levels[level].bucket(low).len();
                let right_len = self.levels[level].bucket(high).len();
                for i in 0..left_len {
                    for j in 0..right_len {
                        let table = &self.levels[level];
                        let merged = merge_adjacent(
                            &table.bucket(low)[i].term,
                            &table.bucket(high)[j].term,
                        );
                        // Anything but a distance-1 pair is skipped, not an error.
                        if let Ok(merged) = merged {
                            self.levels[level].mark_combined(low, i);
                            self.levels[level].mark_combined(high, j);
                            next.insert(merged);
                        }
                    }
                }
            }

            if next.is_empty() {
                break;
            }
            log::debug!("level {}: {} merged terms", level + 1, next.term_count());
            self.levels.push(next);
        }
    }

    /// Collects every term never marked combined across all retained levels.
    ///
    /// The order is deterministic: level-ascending, then weight-ascending, then insertion
    /// order within a bucket. Only meaningful after [`compress`][Self::compress]; before it,
    /// this simply returns all minterms.
    pub fn prime_implicants(&self) -> Function {
        self.levels
            .iter()
            .flat_map(|table| table.iter())
            .flat_map(|(_, bucket)| bucket)
            .filter(|entry| !entry.combined)
            .map(|entry| entry.term.clone())
            .collect()
    }

    /// Returns the full level-by-level table history for diagnostic display.
    pub fn levels(&self) -> &[GroupTable] {
        &self.levels
    }
}

/// Convenience entry point: expands, compresses and collects in one call.
pub fn minimize(function: &Function) -> Result<Function, Error> {
    let mut minimizer = Minimizer::new(function)?;
    minimizer.compress();
    Ok(minimizer.prime_implicants())
}
