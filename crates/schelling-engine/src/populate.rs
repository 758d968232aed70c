//! Initial population of a world from target proportions.

use crate::shuffle::shuffle_grid;
use rand::Rng;
use schelling_core::{Grid, Kind, SimError, World};
use tracing::{debug, warn};

/// Target proportions of each cell kind.
///
/// Entries are non-negative and need not sum to 1; counts are taken
/// against their own sum. `vacancy` is the share explicitly reserved for
/// empty cells; with `vacancy == 0` every cell not lost to floor
/// truncation is populated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distribution {
    /// Proportion of [`Kind::KindA`].
    pub kind_a: f64,
    /// Proportion of [`Kind::KindB`].
    pub kind_b: f64,
    /// Proportion of [`Kind::Empty`].
    pub vacancy: f64,
}

impl Distribution {
    /// Two populated proportions and no reserved vacancy share.
    pub fn new(kind_a: f64, kind_b: f64) -> Self {
        Self::with_vacancy(kind_a, kind_b, 0.0)
    }

    /// Two populated proportions plus an explicit empty share.
    pub fn with_vacancy(kind_a: f64, kind_b: f64, vacancy: f64) -> Self {
        Self {
            kind_a,
            kind_b,
            vacancy,
        }
    }

    /// Check that every entry is finite and non-negative and that at
    /// least one populated kind has a positive share.
    pub fn validate(&self) -> Result<(), SimError> {
        for (name, v) in [
            ("kind_a", self.kind_a),
            ("kind_b", self.kind_b),
            ("vacancy", self.vacancy),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(SimError::invalid(format!(
                    "distribution {name} must be finite and >= 0, got {v}"
                )));
            }
        }
        if self.kind_a == 0.0 && self.kind_b == 0.0 {
            return Err(SimError::invalid(
                "distribution must give a positive share to at least one populated kind",
            ));
        }
        Ok(())
    }

    /// Target `(kind_a, kind_b)` counts for `cell_count` cells, floored.
    ///
    /// Assumes [`validate`](Self::validate) passed.
    pub fn counts(&self, cell_count: usize) -> (usize, usize) {
        let total = self.kind_a + self.kind_b + self.vacancy;
        let n = cell_count as f64;
        let a = (self.kind_a / total * n).floor() as usize;
        let b = (self.kind_b / total * n).floor() as usize;
        // Float rounding must never push the populated total past capacity.
        let a = a.min(cell_count);
        let b = b.min(cell_count - a);
        (a, b)
    }
}

impl Default for Distribution {
    /// A quarter of each kind, half empty.
    fn default() -> Self {
        Self::with_vacancy(0.25, 0.25, 0.50)
    }
}

/// Side length of the largest square that fits in `cell_count` cells.
///
/// Non-square counts are truncated (901 → 30) with a warning.
pub fn side_for_cell_count(cell_count: usize) -> usize {
    let side = cell_count.isqrt();
    if side * side != cell_count {
        warn!(
            cell_count,
            side,
            used = side * side,
            "cell count is not a perfect square; truncating"
        );
    }
    side
}

/// Build a `side_length × side_length` world populated per `distribution`
/// and spatially shuffled.
///
/// Cells are filled row-major (all KindA, then KindB, then Empty) and
/// then shuffled, so the realized counts match
/// [`Distribution::counts`] exactly.
pub fn initialize<R: Rng + ?Sized>(
    side_length: usize,
    distribution: &Distribution,
    rng: &mut R,
) -> Result<World, SimError> {
    distribution.validate()?;
    let mut world = Grid::filled(side_length, Kind::Empty)?;
    let (count_a, count_b) = distribution.counts(world.len());

    let cells = world.cells_mut();
    cells[..count_a].fill(Kind::KindA);
    cells[count_a..count_a + count_b].fill(Kind::KindB);

    shuffle_grid(&mut world, rng);
    debug!(side_length, count_a, count_b, "world populated");
    Ok(world)
}
