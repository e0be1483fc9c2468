use crate::error::{Operand, Result, TraceError};
use crate::recurrences::{Subsequence, Substring};
use crate::traits::Mode;
use crate::{Trace, TraceEngine};

/// Input length above which callers are expected to ask for confirmation.
pub const DEFAULT_LENGTH_LIMIT: usize = 100;

/// Configures and runs a traced build.
///
/// ```
/// use lcs_trace::{Mode, TraceBuilder};
///
/// let trace = TraceBuilder::new()
///     .case_sensitive(false)
///     .mode(Mode::Substring)
///     .build("xxABCyy", "abc");
/// assert_eq!(trace.result(), "ABC");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceBuilder {
    case_sensitive: bool,
    mode: Mode,
    length_limit: Option<usize>,
}

impl Default for TraceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceBuilder {
    pub fn new() -> Self {
        Self {
            case_sensitive: true,
            mode: Mode::Subsequence,
            length_limit: Some(DEFAULT_LENGTH_LIMIT),
        }
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for `mode(Mode::Substring)` / `mode(Mode::Subsequence)`.
    pub fn substring(self, substring_mode: bool) -> Self {
        self.mode(if substring_mode {
            Mode::Substring
        } else {
            Mode::Subsequence
        })
    }

    /// Limit enforced by [`check`](Self::check); `None` disables it.
    pub fn length_limit(mut self, limit: Option<usize>) -> Self {
        self.length_limit = limit;
        self
    }

    pub fn current_mode(&self) -> Mode {
        self.mode
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Boundary guard: reject inputs longer than the configured limit.
    ///
    /// Lengths are counted in characters, not bytes.
    pub fn check(&self, s1: &str, s2: &str) -> Result<()> {
        let Some(limit) = self.length_limit else {
            return Ok(());
        };
        for (operand, s) in [(Operand::First, s1), (Operand::Second, s2)] {
            let len = s.chars().count();
            if len > limit {
                #[cfg(feature = "tracing")]
                tracing::warn!(%operand, len, limit, "input above length limit");
                return Err(TraceError::InputTooLong {
                    operand,
                    len,
                    limit,
                });
            }
        }
        Ok(())
    }

    /// Build the trace. Never fails; cost is O(m * n) time and space.
    pub fn build(&self, s1: &str, s2: &str) -> Trace {
        match self.mode {
            Mode::Subsequence => TraceEngine::new(Subsequence, s1, s2, self.case_sensitive).run(),
            Mode::Substring => TraceEngine::new(Substring, s1, s2, self.case_sensitive).run(),
        }
    }

    /// [`check`](Self::check), then [`build`](Self::build).
    pub fn build_checked(&self, s1: &str, s2: &str) -> Result<Trace> {
        self.check(s1, s2)?;
        Ok(self.build(s1, s2))
    }
}

/// Build a trace with the given flags.
///
/// This is the plain entry point: no length guard is applied.
pub fn build(s1: &str, s2: &str, case_sensitive: bool, substring_mode: bool) -> Trace {
    TraceBuilder::new()
        .case_sensitive(case_sensitive)
        .substring(substring_mode)
        .build(s1, s2)
}
