//! Longest Common Subsequence as a traced recurrence.
//!
//! ```text
//! M[i][j] = M[i-1][j-1] + 1                 if s1[i-1] == s2[j-1]
//!         = max(M[i-1][j], M[i][j-1])       otherwise
//! ```
//!
//! On a mismatch the backpointer points up whenever the upper neighbour is at
//! least as large as the left one, so ties always resolve toward `Up`. The
//! traceback follows backpointers from `(m, n)` until either index hits zero.

use crate::grid::{Backpointers, Matrix};
use crate::step::{Coord, Deps, Direction, Rule, Traceback};
use crate::traits::{Decision, Mode, Recurrence};

/// LCS recurrence. Carries no state across cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct Subsequence;

impl Recurrence for Subsequence {
    type Tracker = ();

    const MODE: Mode = Mode::Subsequence;

    fn evaluate(
        &self,
        matrix: &Matrix,
        (i, j): Coord,
        matched: bool,
        _tracker: &mut Self::Tracker,
    ) -> Decision {
        if matched {
            return Decision {
                rule: Rule::Match,
                value: matrix[(i - 1, j - 1)] + 1,
                deps: Deps::one((i - 1, j - 1)),
            };
        }

        let up = matrix[(i - 1, j)];
        let left = matrix[(i, j - 1)];
        let deps = Deps::two((i - 1, j), (i, j - 1));
        if up >= left {
            Decision {
                rule: Rule::MismatchUp,
                value: up,
                deps,
            }
        } else {
            Decision {
                rule: Rule::MismatchLeft,
                value: left,
                deps,
            }
        }
    }

    fn traceback(
        &self,
        s1: &[char],
        matrix: &Matrix,
        backpointers: &Backpointers,
        _tracker: &Self::Tracker,
    ) -> Traceback {
        let mut i = matrix.rows().saturating_sub(1);
        let mut j = matrix.cols().saturating_sub(1);
        let mut result = Vec::new();
        let mut path = Vec::with_capacity(i + j);

        while i > 0 && j > 0 {
            path.push((i, j));
            match backpointers[(i, j)] {
                Direction::Diagonal => {
                    result.push(s1[i - 1]);
                    i -= 1;
                    j -= 1;
                }
                Direction::Up => i -= 1,
                Direction::Left => j -= 1,
                // Every interior cell gets a direction in this mode.
                Direction::None => break,
            }
        }

        // Collected back to front.
        result.reverse();
        Traceback { result, path }
    }
}
