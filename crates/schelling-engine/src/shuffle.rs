//! Uniform in-place permutation (Fisher–Yates).
//!
//! Randomness is injected so runs replay exactly under a seeded RNG.

use rand::Rng;
use schelling_core::Grid;

/// Shuffle `items` in place with a uniform random permutation.
///
/// Walks `i` from `len - 1` down to `1` and swaps with `j` drawn from
/// `[0, i]` inclusive. Including `i` itself is what makes every
/// permutation equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle every cell of `grid` as one row-major sequence.
pub fn shuffle_grid<T, R: Rng + ?Sized>(grid: &mut Grid<T>, rng: &mut R) {
    shuffle(grid.cells_mut(), rng);
}
