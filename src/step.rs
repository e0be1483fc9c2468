//! The step records emitted while filling a DP table.
//!
//! A build produces `Init`, then one `CellEval` per interior cell in
//! row-major order, then a single `Traceback`. Every `CellEval` carries
//! enough information (value + rule) to restore both the matrix cell and its
//! backpointer, so the list is a complete audit trail of the computation.

/// A DP cell coordinate `(row, col)`; row indexes the first sequence.
pub type Coord = (usize, usize);

/// Which neighbour produced a cell's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Border cell, or a substring-mode mismatch.
    #[default]
    None,
    /// From `(i - 1, j - 1)`.
    Diagonal,
    /// From `(i - 1, j)`.
    Up,
    /// From `(i, j - 1)`.
    Left,
}

impl Direction {
    /// Coordinate of the predecessor cell, if any.
    pub fn predecessor(self, (i, j): Coord) -> Option<Coord> {
        match self {
            Direction::None => None,
            Direction::Diagonal if i > 0 && j > 0 => Some((i - 1, j - 1)),
            Direction::Up if i > 0 => Some((i - 1, j)),
            Direction::Left if j > 0 => Some((i, j - 1)),
            _ => None,
        }
    }
}

/// The recurrence branch applied at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Characters matched; extend the diagonal.
    Match,
    /// Mismatch, value carried down from the row above (ties land here).
    MismatchUp,
    /// Mismatch, value carried across from the column to the left.
    MismatchLeft,
    /// Mismatch in substring mode; the run resets to zero.
    SubstringMismatch,
}

impl Rule {
    /// Backpointer recorded for this rule.
    pub fn direction(self) -> Direction {
        match self {
            Rule::Match => Direction::Diagonal,
            Rule::MismatchUp => Direction::Up,
            Rule::MismatchLeft => Direction::Left,
            Rule::SubstringMismatch => Direction::None,
        }
    }
}

/// Fixed-capacity, ordered list of the cells consulted for one evaluation.
///
/// Holds 0, 1 or 2 coordinates depending on the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deps {
    len: u8,
    coords: [Coord; 2],
}

impl Deps {
    pub const fn none() -> Self {
        Self {
            len: 0,
            coords: [(0, 0); 2],
        }
    }

    pub const fn one(a: Coord) -> Self {
        Self {
            len: 1,
            coords: [a, (0, 0)],
        }
    }

    pub const fn two(a: Coord, b: Coord) -> Self {
        Self {
            len: 2,
            coords: [a, b],
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Coord] {
        &self.coords[..self.len as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coord> + '_ {
        self.as_slice().iter()
    }
}

impl Default for Deps {
    fn default() -> Self {
        Self::none()
    }
}

/// One interior cell decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellEval {
    /// Row, `1..=m`.
    pub row: usize,
    /// Column, `1..=n`.
    pub col: usize,
    /// `s1[row - 1]` as written by the caller (before case folding).
    pub row_char: char,
    /// `s2[col - 1]` as written by the caller.
    pub col_char: char,
    pub rule: Rule,
    pub value: u32,
    pub deps: Deps,
}

impl CellEval {
    #[inline]
    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.rule.direction()
    }
}

/// Final outcome of a build: the reconstructed sequence and the cells walked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Traceback {
    /// Result characters, left to right, taken from the first sequence.
    pub result: Vec<char>,
    /// Cells visited, in walk order (terminal cell first).
    pub path: Vec<Coord>,
}

impl Traceback {
    /// Result length.
    #[inline]
    pub fn len(&self) -> usize {
        self.result.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    /// Result as an owned `String`.
    pub fn result_string(&self) -> String {
        self.result.iter().collect()
    }
}

/// One replayable step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Table allocated with a zero border.
    Init { rows: usize, cols: usize },
    CellEval(CellEval),
    Traceback(Traceback),
}

impl Step {
    pub fn as_cell_eval(&self) -> Option<&CellEval> {
        match self {
            Step::CellEval(eval) => Some(eval),
            _ => None,
        }
    }

    pub fn as_traceback(&self) -> Option<&Traceback> {
        match self {
            Step::Traceback(tb) => Some(tb),
            _ => None,
        }
    }

    /// Short label for logs and tables.
    pub fn kind(&self) -> &'static str {
        match self {
            Step::Init { .. } => "init",
            Step::CellEval(_) => "cell-eval",
            Step::Traceback(_) => "traceback",
        }
    }
}
