//! Traced Longest-Common-Subsequence / Longest-Common-Substring tables.
//!
//! This crate fills the classic `(m + 1) x (n + 1)` dynamic-programming table
//! for two character sequences and records every decision it makes along the
//! way, so the computation can be replayed one cell at a time.
//!
//! ## Core idea
//! 1. A [`Recurrence`] decides the value, rule and dependencies of one cell,
//!    and how the answer is read back out of the filled table.
//! 2. [`TraceEngine`] drives the fill in row-major order and emits an
//!    `Init` step, one `CellEval` step per interior cell and a final
//!    `Traceback` step.
//! 3. [`replay`] turns any prefix of the steps back into a drawable frame,
//!    and can rebuild the full matrix and backpointer table from steps alone.
//!
//! Building is pure and deterministic: equal inputs give equal traces.
//!
//! ## Quick start
//! ```
//! use lcs_trace::build;
//!
//! let trace = build("ABCBDAB", "BDCABA", true, false);
//! assert_eq!(trace.outcome().len(), 4);
//! assert_eq!(trace.steps().len(), 7 * 6 + 2);
//!
//! let substring = build("ABCBDAB", "BDCABA", true, true);
//! assert_eq!(substring.result(), "AB");
//! ```
//!
//! ## Built-in recurrences
//! The `recurrences` module provides:
//! - Longest Common Subsequence (ties between up and left resolve up)
//! - Longest Common Substring (leftmost best cell in the first best row)

pub mod builder;
pub mod engine;
pub mod error;
pub mod grid;
pub mod recurrences;
pub mod replay;
pub mod step;
pub mod traits;
pub mod utils;

pub use crate::builder::{build, TraceBuilder, DEFAULT_LENGTH_LIMIT};
pub use crate::engine::{Stats, Trace, TraceEngine};
pub use crate::error::{Operand, Result, TraceError};
pub use crate::grid::{Backpointers, Grid, Matrix};
pub use crate::replay::{reconstruct, Frame, Replay};
pub use crate::step::{CellEval, Coord, Deps, Direction, Rule, Step, Traceback};
pub use crate::traits::{Decision, Mode, Recurrence};
