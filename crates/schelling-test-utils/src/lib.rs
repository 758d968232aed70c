//! Test utilities and fixtures for Schelling engine development.
//!
//! Provides hand-built worlds with known neighbour counts and small
//! helpers for asserting grid invariants.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{parse_world, three_by_three, three_by_three_states, uniform_world};

use schelling_core::{Kind, Satisfaction, StateGrid, World};

/// `(kind_a, kind_b, empty)` counts of a world.
pub fn kind_counts(world: &World) -> (usize, usize, usize) {
    (
        world.count(&Kind::KindA),
        world.count(&Kind::KindB),
        world.count(&Kind::Empty),
    )
}

/// Number of cells in `states` equal to `state`.
pub fn state_count(states: &StateGrid, state: Satisfaction) -> usize {
    states.count(&state)
}

/// Assert that `states` marks exactly the empty cells of `world` as
/// [`Satisfaction::NotApplicable`].
pub fn assert_states_match_world(states: &StateGrid, world: &World) {
    assert_eq!(states.side(), world.side(), "side length mismatch");
    for (i, (s, k)) in states.cells().iter().zip(world.cells()).enumerate() {
        assert_eq!(
            *s == Satisfaction::NotApplicable,
            k.is_empty(),
            "cell {i}: state {s:?} disagrees with kind {k:?}"
        );
    }
}
