//! Read-only replay of a step list.
//!
//! A [`Frame`] is what a grid view needs to draw the table as it stood after
//! step `k`: the cells written so far, their backpointers, the cell just
//! evaluated with its dependencies, and (after the final step) the traceback
//! path and result.
//!
//! Frames are always rebuilt from step 0, so `frame_at(k)` is the same
//! whether the cursor got there moving forward, backward or by a jump.

use crate::error::{Result, TraceError};
use crate::grid::{Backpointers, Grid, Matrix};
use crate::step::{CellEval, Coord, Deps, Direction, Step, Traceback};

/// The table as it stands after a prefix of the steps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    /// `None` until a cell is written; the border becomes `Some(0)` on `Init`.
    pub values: Grid<Option<u32>>,
    pub directions: Backpointers,
    /// Cell evaluated by the latest step, if that step was a `CellEval`.
    pub focus: Option<Coord>,
    /// Dependencies of `focus`.
    pub deps: Deps,
    /// Set once the `Traceback` step has been applied.
    pub traceback: Option<Traceback>,
}

impl Frame {
    fn apply(&mut self, step: &Step) {
        self.focus = None;
        self.deps = Deps::none();
        match step {
            Step::Init { rows, cols } => {
                self.values = Grid::filled(*rows, *cols, None);
                self.directions = Grid::filled(*rows, *cols, Direction::None);
                for r in 0..*rows {
                    self.values[(r, 0)] = Some(0);
                }
                for c in 0..*cols {
                    self.values[(0, c)] = Some(0);
                }
                self.traceback = None;
            }
            Step::CellEval(eval) => self.write(eval),
            Step::Traceback(tb) => self.traceback = Some(tb.clone()),
        }
    }

    fn write(&mut self, eval: &CellEval) {
        let at = eval.coord();
        if self.values.get(at).is_none() {
            // Cell outside the table: a step list without its `Init`.
            return;
        }
        self.values[at] = Some(eval.value);
        self.directions[at] = eval.direction();
        self.focus = Some(at);
        self.deps = eval.deps;
    }

    /// True if `coord` lies on the traceback path.
    pub fn on_path(&self, coord: Coord) -> bool {
        self.traceback
            .as_ref()
            .is_some_and(|tb| tb.path.contains(&coord))
    }

    /// Number of cells written so far, border included.
    pub fn filled(&self) -> usize {
        self.values.cells().filter(|(_, v)| v.is_some()).count()
    }
}

/// Cursor over a precomputed step list.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    steps: &'a [Step],
    position: usize,
}

impl<'a> Replay<'a> {
    /// Cursor placed on step 0.
    pub fn new(steps: &'a [Step]) -> Self {
        Self { steps, position: 0 }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// True when the cursor sits on the last step.
    pub fn at_end(&self) -> bool {
        self.position + 1 >= self.steps.len()
    }

    pub fn current(&self) -> Option<&'a Step> {
        self.steps.get(self.position)
    }

    /// Move to step `k`.
    pub fn seek(&mut self, k: usize) -> Result<&'a Step> {
        let step = self.steps.get(k).ok_or(TraceError::StepOutOfRange {
            requested: k,
            len: self.steps.len(),
        })?;
        self.position = k;
        Ok(step)
    }

    /// Advance one step; `None` at the end.
    pub fn forward(&mut self) -> Option<&'a Step> {
        if self.at_end() {
            return None;
        }
        self.position += 1;
        self.current()
    }

    /// Go back one step; `None` at the start.
    pub fn back(&mut self) -> Option<&'a Step> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        self.current()
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Frame after applying steps `0..=k`.
    pub fn frame_at(&self, k: usize) -> Result<Frame> {
        if k >= self.steps.len() {
            return Err(TraceError::StepOutOfRange {
                requested: k,
                len: self.steps.len(),
            });
        }
        let mut frame = Frame::default();
        for step in &self.steps[..=k] {
            frame.apply(step);
        }
        Ok(frame)
    }

    /// Frame at the cursor; an empty frame for an empty step list.
    pub fn frame(&self) -> Frame {
        self.frame_at(self.position).unwrap_or_default()
    }
}

/// Rebuild the matrix and backpointer table from steps alone.
///
/// Returns `None` if the list does not start with `Init`.
pub fn reconstruct(steps: &[Step]) -> Option<(Matrix, Backpointers)> {
    let Some(Step::Init { rows, cols }) = steps.first() else {
        return None;
    };
    let mut matrix: Matrix = Grid::filled(*rows, *cols, 0);
    let mut backpointers: Backpointers = Grid::filled(*rows, *cols, Direction::None);
    for eval in steps.iter().filter_map(Step::as_cell_eval) {
        let at = eval.coord();
        if matrix.get(at).is_none() {
            return None;
        }
        matrix[at] = eval.value;
        backpointers[at] = eval.direction();
    }
    Some((matrix, backpointers))
}
