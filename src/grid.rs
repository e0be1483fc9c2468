//! Dense row-major tables used by the trace engine.
//!
//! A `Grid<T>` backs both the DP matrix (`Grid<u32>`) and the backpointer
//! table (`Grid<Direction>`). Both always have `(m + 1) x (n + 1)` cells,
//! where row 0 and column 0 form the zero border.

use std::ops::{Index, IndexMut};

use crate::step::{Coord, Direction};

/// DP values, `(m + 1) x (n + 1)`.
pub type Matrix = Grid<u32>;

/// Predecessor markers, same shape as [`Matrix`].
pub type Backpointers = Grid<Direction>;

/// Row-major table of `rows x cols` cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a table with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    /// Number of rows (`m + 1` for a DP table).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`n + 1` for a DP table).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the table holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounds-checked access.
    #[inline]
    pub fn get(&self, (row, col): Coord) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Borrow one full row.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row {row} out of range ({} rows)", self.rows);
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate rows top to bottom; always yields `rows()` slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Iterate `((row, col), &value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, v)| ((idx / cols, idx % cols), v))
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }
}

impl<T> Grid<T> {
    #[inline]
    fn offset(&self, (row, col): Coord) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of range for a {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

/// # Panics
/// Panics if the coordinate lies outside the grid.
impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, at: Coord) -> &T {
        &self.cells[self.offset(at)]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, at: Coord) -> &mut T {
        let idx = self.offset(at);
        &mut self.cells[idx]
    }
}
