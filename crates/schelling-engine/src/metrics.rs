//! Per-tick reports and grid tallies.

use schelling_core::{Kind, Satisfaction, StateGrid, World};

/// Result of one [`Simulation::tick`](crate::Simulation::tick).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Tick number after this tick completed (first tick is 1).
    pub tick: u64,
    /// Agents that were unsatisfied at the start of the tick.
    pub unsatisfied: usize,
    /// Empty cells at the start of the tick.
    pub vacancies: usize,
    /// Agents relocated during the tick.
    pub moved: usize,
}

impl TickReport {
    /// No agent wanted to move.
    pub fn is_stable(&self) -> bool {
        self.unsatisfied == 0
    }
}

/// Cell counts per kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Census {
    /// Cells holding [`Kind::KindA`].
    pub kind_a: usize,
    /// Cells holding [`Kind::KindB`].
    pub kind_b: usize,
    /// Empty cells.
    pub empty: usize,
}

impl Census {
    /// Count every cell of `world`.
    pub fn of(world: &World) -> Self {
        let mut c = Self::default();
        for k in world.cells() {
            match k {
                Kind::KindA => c.kind_a += 1,
                Kind::KindB => c.kind_b += 1,
                Kind::Empty => c.empty += 1,
            }
        }
        c
    }

    /// Total cells counted.
    pub fn total(&self) -> usize {
        self.kind_a + self.kind_b + self.empty
    }

    /// Occupied cells.
    pub fn populated(&self) -> usize {
        self.kind_a + self.kind_b
    }
}

/// Cell counts per satisfaction state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SatisfactionSummary {
    /// Satisfied agents.
    pub satisfied: usize,
    /// Unsatisfied agents.
    pub unsatisfied: usize,
    /// Empty cells.
    pub not_applicable: usize,
}

impl SatisfactionSummary {
    /// Count every cell of `states`.
    pub fn of(states: &StateGrid) -> Self {
        let mut s = Self::default();
        for st in states.cells() {
            match st {
                Satisfaction::Satisfied => s.satisfied += 1,
                Satisfaction::Unsatisfied => s.unsatisfied += 1,
                Satisfaction::NotApplicable => s.not_applicable += 1,
            }
        }
        s
    }

    /// Fraction of agents that are satisfied, or `None` with no agents.
    pub fn satisfied_fraction(&self) -> Option<f64> {
        let agents = self.satisfied + self.unsatisfied;
        (agents > 0).then(|| self.satisfied as f64 / agents as f64)
    }
}
