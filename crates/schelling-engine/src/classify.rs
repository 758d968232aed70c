//! Per-cell satisfaction from Moore-neighbourhood similarity.

use schelling_core::{Kind, Satisfaction, StateGrid, World};

/// Fraction of occupied Moore neighbours of `(row, col)` that share its
/// kind.
///
/// Returns `None` for empty or out-of-range cells. An agent with no
/// occupied neighbours gets `Some(0.0)`: isolation counts as
/// dissimilarity rather than an undefined ratio.
pub fn neighbour_ratio(grid: &World, row: usize, col: usize) -> Option<f64> {
    let me = *grid.get(row, col).ok()?;
    if me.is_empty() {
        return None;
    }
    let cells = grid.cells();
    let mut same = 0u32;
    let mut occupied = 0u32;
    for nb in grid.moore_neighbours(row, col) {
        let k = cells[nb];
        if k != Kind::Empty {
            occupied += 1;
            if k == me {
                same += 1;
            }
        }
    }
    if occupied == 0 {
        return Some(0.0);
    }
    Some(f64::from(same) / f64::from(occupied))
}

/// Classify every cell of `grid` against `threshold`.
///
/// Empty cells are [`Satisfaction::NotApplicable`]; an agent is
/// [`Satisfaction::Satisfied`] when its [`neighbour_ratio`] is at least
/// `threshold`. Thresholds outside `[0, 1]` are accepted as-is.
pub fn classify(grid: &World, threshold: f64) -> StateGrid {
    let side = grid.side();
    grid.map_indexed(|i, _| match neighbour_ratio(grid, i / side, i % side) {
        None => Satisfaction::NotApplicable,
        Some(ratio) if ratio >= threshold => Satisfaction::Satisfied,
        Some(_) => Satisfaction::Unsatisfied,
    })
}
