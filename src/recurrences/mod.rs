//! Built-in recurrences for the trace engine.
//!
//! - [`subsequence`] : Longest Common Subsequence, ties resolved toward `Up`.
//! - [`substring`]   : Longest Common Substring with a running-maximum traceback.

pub mod subsequence;
pub mod substring;

pub use subsequence::Subsequence;
pub use substring::{RunTracker, Substring};
