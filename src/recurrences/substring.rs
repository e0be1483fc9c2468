//! Longest Common Substring as a traced recurrence.
//!
//! ```text
//! M[i][j] = M[i-1][j-1] + 1     if s1[i-1] == s2[j-1]
//!         = 0                   otherwise
//! ```
//!
//! A run cannot survive a mismatch, so mismatching cells carry no
//! backpointer and no dependencies. The best run is located through a
//! running maximum recorded during the fill: its value and the row where it
//! was first reached. The traceback scans only that row, taking the leftmost
//! column holding the maximum, and walks the diagonal back while values stay
//! positive.

use crate::grid::{Backpointers, Matrix};
use crate::step::{Coord, Deps, Rule, Traceback};
use crate::traits::{Decision, Mode, Recurrence};

/// Longest-common-substring recurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Substring;

/// Running maximum over all cells evaluated so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTracker {
    /// Longest run seen.
    pub max_len: u32,
    /// Row where `max_len` was first reached; 0 while `max_len == 0`.
    pub max_row: usize,
}

impl Recurrence for Substring {
    type Tracker = RunTracker;

    const MODE: Mode = Mode::Substring;

    fn evaluate(
        &self,
        matrix: &Matrix,
        (i, j): Coord,
        matched: bool,
        tracker: &mut Self::Tracker,
    ) -> Decision {
        if !matched {
            return Decision {
                rule: Rule::SubstringMismatch,
                value: 0,
                deps: Deps::none(),
            };
        }

        let value = matrix[(i - 1, j - 1)] + 1;
        // Strictly greater: the first row to reach a length keeps it.
        if value > tracker.max_len {
            tracker.max_len = value;
            tracker.max_row = i;
        }
        Decision {
            rule: Rule::Match,
            value,
            deps: Deps::one((i - 1, j - 1)),
        }
    }

    fn traceback(
        &self,
        s1: &[char],
        matrix: &Matrix,
        _backpointers: &Backpointers,
        tracker: &Self::Tracker,
    ) -> Traceback {
        if tracker.max_len == 0 {
            return Traceback::default();
        }

        let row = tracker.max_row;
        let Some(col) = matrix.row(row).iter().position(|&v| v == tracker.max_len) else {
            return Traceback::default();
        };

        let mut path = Vec::with_capacity(tracker.max_len as usize);
        let (mut i, mut j) = (row, col);
        while i > 0 && j > 0 && matrix[(i, j)] > 0 {
            path.push((i, j));
            i -= 1;
            j -= 1;
        }

        let start = row - tracker.max_len as usize;
        Traceback {
            result: s1[start..row].to_vec(),
            path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::step::Direction;

    #[test]
    fn mismatch_resets_without_deps() {
        let mut m = Grid::filled(3, 3, 0u32);
        m[(1, 1)] = 1;
        let mut tracker = RunTracker::default();
        let d = Substring.evaluate(&m, (2, 2), false, &mut tracker);
        assert_eq!(d.rule, Rule::SubstringMismatch);
        assert_eq!(d.value, 0);
        assert!(d.deps.is_empty());
        assert_eq!(tracker, RunTracker::default());
    }

    #[test]
    fn tracker_keeps_first_row_on_tie() {
        let m = Grid::filled(4, 4, 0u32);
        let mut tracker = RunTracker::default();
        Substring.evaluate(&m, (1, 3), true, &mut tracker);
        Substring.evaluate(&m, (2, 1), true, &mut tracker);
        assert_eq!(tracker.max_len, 1);
        assert_eq!(tracker.max_row, 1);
    }

    #[test]
    fn traceback_picks_leftmost_column_in_row() {
        // s1 = "ab", s2 = "abab": row 2 holds [0, 0, 2, 0, 2].
        let mut m = Grid::filled(3, 5, 0u32);
        for (c, v) in [((1, 1), 1), ((1, 3), 1), ((2, 2), 2), ((2, 4), 2)] {
            m[c] = v;
        }
        let b = Grid::filled(3, 5, Direction::None);
        let tracker = RunTracker {
            max_len: 2,
            max_row: 2,
        };
        let tb = Substring.traceback(&['a', 'b'], &m, &b, &tracker);
        assert_eq!(tb.result_string(), "ab");
        assert_eq!(tb.path, vec![(2, 2), (1, 1)]);
    }
}
