//! Square, non-wrapping 2D grid stored as a flat row-major buffer.
//!
//! Cell `(row, col)` lives at flat index `row * side + col`. The side
//! length is fixed at construction; no operation resizes a grid.

use crate::error::SimError;
use crate::kind::{Kind, Satisfaction};
use smallvec::SmallVec;
use std::fmt;
use std::ops::Index;

/// All 8 Moore offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Occupancy grid: one [`Kind`] per cell.
pub type World = Grid<Kind>;

/// Per-cell satisfaction verdicts, parallel to a [`World`].
pub type StateGrid = Grid<Satisfaction>;

/// A square `side × side` matrix of cells.
///
/// Edges absorb: cells on the border simply have fewer neighbours
/// (corners have 3, edges have 5).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    side: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    ///
    /// Returns `Err(SimError::InvalidConfiguration)` if `side` is 0.
    pub fn filled(side: usize, value: T) -> Result<Self, SimError> {
        let len = checked_cell_count(side)?;
        Ok(Self {
            side,
            cells: vec![value; len],
        })
    }

    /// Build a grid from nested rows.
    ///
    /// The number of rows sets the side length; every row must have
    /// exactly that many cells.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, SimError> {
        let side = rows.len();
        checked_cell_count(side)?;
        let mut cells = Vec::with_capacity(side * side);
        for row in rows {
            if row.len() != side {
                return Err(SimError::DimensionMismatch {
                    expected: side,
                    actual: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self { side, cells })
    }
}

impl<T> Grid<T> {
    /// Wrap an existing row-major buffer of `side * side` cells.
    pub fn from_cells(side: usize, cells: Vec<T>) -> Result<Self, SimError> {
        let len = checked_cell_count(side)?;
        if cells.len() != len {
            return Err(SimError::DimensionMismatch {
                expected: len,
                actual: cells.len(),
            });
        }
        Ok(Self { side, cells })
    }

    /// Side length `n` of the `n × n` grid.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells (`side * side`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects a zero side length.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Mutable row-major view. The slice cannot change the grid's size,
    /// so reordering through it (e.g. shuffling) keeps the grid square.
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Consume the grid and return its row-major buffer.
    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }

    /// Flat index of `(row, col)`, or `None` if out of bounds.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.side && col < self.side).then(|| row * self.side + col)
    }

    /// `(row, col)` of a flat index, or `None` if out of bounds.
    pub fn coords_of(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.cells.len()).then(|| (index / self.side, index % self.side))
    }

    /// Bounds-checked read.
    pub fn get(&self, row: usize, col: usize) -> Result<&T, SimError> {
        let i = self.checked_index(row, col)?;
        Ok(&self.cells[i])
    }

    /// Bounds-checked write.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), SimError> {
        let i = self.checked_index(row, col)?;
        self.cells[i] = value;
        Ok(())
    }

    /// Build a same-sized grid by mapping each `(flat_index, cell)`.
    pub fn map_indexed<U>(&self, mut f: impl FnMut(usize, &T) -> U) -> Grid<U> {
        Grid {
            side: self.side,
            cells: self.cells.iter().enumerate().map(|(i, c)| f(i, c)).collect(),
        }
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.side)
    }

    /// Flat indices of the in-bounds Moore neighbours of `(row, col)`.
    ///
    /// Bounds are resolved before any cell is touched, so an
    /// out-of-range neighbour is never read. An out-of-range centre
    /// yields no neighbours.
    pub fn moore_neighbours(&self, row: usize, col: usize) -> SmallVec<[usize; 8]> {
        let mut out = SmallVec::new();
        if row >= self.side || col >= self.side {
            return out;
        }
        for (dr, dc) in OFFSETS_8 {
            let nr = resolve_axis(row, dr, self.side);
            let nc = resolve_axis(col, dc, self.side);
            if let (Some(nr), Some(nc)) = (nr, nc) {
                out.push(nr * self.side + nc);
            }
        }
        out
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, SimError> {
        self.index_of(row, col).ok_or(SimError::IndexOutOfBounds {
            row,
            col,
            side: self.side,
        })
    }
}

impl<T: PartialEq> Grid<T> {
    /// Number of cells equal to `value`.
    pub fn count(&self, value: &T) -> usize {
        self.cells.iter().filter(|c| *c == value).count()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    /// Panics on out-of-bounds access; use [`Grid::get`] for a checked read.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.side && col < self.side,
            "cell ({row}, {col}) out of bounds for side {}",
            self.side
        );
        &self.cells[row * self.side + col]
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// Apply `delta` to `val` and return it only if it stays in `[0, len)`.
fn resolve_axis(val: usize, delta: isize, len: usize) -> Option<usize> {
    val.checked_add_signed(delta).filter(|&v| v < len)
}

fn checked_cell_count(side: usize) -> Result<usize, SimError> {
    if side == 0 {
        return Err(SimError::invalid("side length must be at least 1"));
    }
    side.checked_mul(side)
        .ok_or_else(|| SimError::invalid(format!("side length {side} overflows cell count")))
}
