//! Core trait definitions for traced DP recurrences.
//!
//! To plug a recurrence into [`TraceEngine`](crate::engine::TraceEngine),
//! implement [`Recurrence`] for a (usually zero-sized) struct.
//!
//! The engine owns the fill order and the bookkeeping:
//! - it allocates the `(m + 1) x (n + 1)` matrix and backpointer table with a
//!   zero border,
//! - visits every interior cell once in row-major order, comparing the two
//!   characters and asking the recurrence for a [`Decision`],
//! - writes the decision into both tables and records a step,
//! - finally asks the recurrence to walk back and produce a [`Traceback`].
//!
//! A recurrence therefore only decides *what* a cell is worth and *how* the
//! answer is read back out of the filled table.

use crate::grid::{Backpointers, Matrix};
use crate::step::{Coord, Deps, Rule, Traceback};

/// Which table is being filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Longest common subsequence.
    #[default]
    Subsequence,
    /// Longest common substring (contiguous run).
    Substring,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Subsequence => "subsequence",
            Mode::Substring => "substring",
        }
    }
}

/// Outcome of evaluating one interior cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub rule: Rule,
    pub value: u32,
    /// Cells whose values justified `value`, in a fixed order.
    pub deps: Deps,
}

/// A DP recurrence whose table fill can be traced cell by cell.
pub trait Recurrence {
    /// Bookkeeping carried across the pass, e.g. a running maximum.
    ///
    /// A fresh `Default` value is created for every build.
    type Tracker: Clone + Default + std::fmt::Debug;

    /// Mode this recurrence implements.
    const MODE: Mode;

    /// Evaluate interior cell `(i, j)` (both >= 1).
    ///
    /// `matched` is the (possibly case-folded) comparison of `s1[i - 1]` and
    /// `s2[j - 1]`. Implementations may only read the three predecessor
    /// cells `(i - 1, j - 1)`, `(i - 1, j)` and `(i, j - 1)`, which the
    /// engine guarantees are already final.
    fn evaluate(
        &self,
        matrix: &Matrix,
        cell: Coord,
        matched: bool,
        tracker: &mut Self::Tracker,
    ) -> Decision;

    /// Read the answer back out of the filled tables.
    ///
    /// `s1` is the first sequence exactly as supplied (not case-folded).
    fn traceback(
        &self,
        s1: &[char],
        matrix: &Matrix,
        backpointers: &Backpointers,
        tracker: &Self::Tracker,
    ) -> Traceback;
}
