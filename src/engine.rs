//! Generic traced DP engine.
//!
//! This module implements the single fill pass shared by every
//! [`Recurrence`]:
//! 1. allocate the matrix and backpointer table with a zero border and emit
//!    [`Step::Init`],
//! 2. evaluate each interior cell in row-major order, writing both tables and
//!    emitting one [`Step::CellEval`] per cell,
//! 3. ask the recurrence for the traceback and emit [`Step::Traceback`].
//!
//! The whole table is computed before anything is returned; the resulting
//! [`Trace`] is immutable.

use crate::grid::{Backpointers, Grid, Matrix};
use crate::step::{CellEval, Direction, Step, Traceback};
use crate::traits::{Mode, Recurrence};
use crate::utils::chars_equal;

/// Counters kept for display alongside the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Stats {
    /// Character comparisons performed (`m * n`).
    pub comparisons: u64,
    /// Interior cells written (`m * n`).
    pub cell_writes: u64,
    /// Comparisons that matched.
    pub matches: u64,
    /// Comparisons that did not match.
    pub mismatches: u64,
}

/// Everything one build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    mode: Mode,
    case_sensitive: bool,
    matrix: Matrix,
    backpointers: Backpointers,
    steps: Vec<Step>,
    stats: Stats,
    outcome: Traceback,
}

impl Trace {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Final DP values, `(m + 1) x (n + 1)`.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Backpointer per cell, same shape as [`matrix`](Self::matrix).
    pub fn backpointers(&self) -> &Backpointers {
        &self.backpointers
    }

    /// `Init`, then `m * n` cell evaluations, then `Traceback`.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Result sequence and traceback path (the payload of the last step).
    pub fn outcome(&self) -> &Traceback {
        &self.outcome
    }

    /// Result as a `String`.
    pub fn result(&self) -> String {
        self.outcome.result_string()
    }

    /// Number of `CellEval` steps.
    pub fn cell_eval_count(&self) -> usize {
        self.steps.len().saturating_sub(2)
    }
}

/// Traced DP engine for a recurrence `R` over two fixed inputs.
///
/// Typical usage:
/// ```
/// use lcs_trace::{recurrences::Subsequence, TraceEngine};
///
/// let engine = TraceEngine::new(Subsequence, "ABCBDAB", "BDCABA", true);
/// let trace = engine.run();
/// assert_eq!(trace.outcome().len(), 4);
/// assert_eq!(trace.cell_eval_count(), 7 * 6);
/// ```
pub struct TraceEngine<R: Recurrence> {
    recurrence: R,
    s1: Vec<char>,
    s2: Vec<char>,
    case_sensitive: bool,
}

impl<R: Recurrence> TraceEngine<R> {
    pub fn new(recurrence: R, s1: &str, s2: &str, case_sensitive: bool) -> Self {
        Self {
            recurrence,
            s1: s1.chars().collect(),
            s2: s2.chars().collect(),
            case_sensitive,
        }
    }

    /// Run the fill pass and the traceback.
    ///
    /// Deterministic: the same engine always returns an equal [`Trace`].
    pub fn run(&self) -> Trace {
        let m = self.s1.len();
        let n = self.s2.len();

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("trace_build", mode = R::MODE.as_str(), m, n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut matrix: Matrix = Grid::filled(m + 1, n + 1, 0);
        let mut backpointers: Backpointers = Grid::filled(m + 1, n + 1, Direction::None);
        let mut steps = Vec::with_capacity(m * n + 2);
        let mut stats = Stats::default();
        let mut tracker = R::Tracker::default();

        steps.push(Step::Init {
            rows: m + 1,
            cols: n + 1,
        });

        for i in 1..=m {
            #[cfg(feature = "tracing")]
            let row_span = tracing::trace_span!("row", i);
            #[cfg(feature = "tracing")]
            let _row_enter = row_span.enter();

            let row_char = self.s1[i - 1];
            for j in 1..=n {
                let col_char = self.s2[j - 1];
                let matched = chars_equal(row_char, col_char, self.case_sensitive);
                stats.comparisons += 1;
                if matched {
                    stats.matches += 1;
                } else {
                    stats.mismatches += 1;
                }

                let decision = self
                    .recurrence
                    .evaluate(&matrix, (i, j), matched, &mut tracker);
                matrix[(i, j)] = decision.value;
                backpointers[(i, j)] = decision.rule.direction();
                stats.cell_writes += 1;

                steps.push(Step::CellEval(CellEval {
                    row: i,
                    col: j,
                    row_char,
                    col_char,
                    rule: decision.rule,
                    value: decision.value,
                    deps: decision.deps,
                }));
            }
        }

        let outcome = self
            .recurrence
            .traceback(&self.s1, &matrix, &backpointers, &tracker);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            result_len = outcome.len(),
            path_len = outcome.path.len(),
            comparisons = stats.comparisons,
            ?tracker,
            "traceback complete"
        );

        steps.push(Step::Traceback(outcome.clone()));

        Trace {
            mode: R::MODE,
            case_sensitive: self.case_sensitive,
            matrix,
            backpointers,
            steps,
            stats,
            outcome,
        }
    }
}
