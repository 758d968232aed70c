//! Caller-owned simulation state.
//!
//! [`Simulation`] holds the world, the threshold, and the run's seeded
//! RNG. Each [`tick()`](Simulation::tick) classifies the current world
//! and applies one migration step.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`, and [`world()`](Simulation::world)
//! hands out a shared borrow, so a renderer can never observe a world
//! while a tick is rewriting it. Nothing is retained between calls
//! except the world itself and the RNG state.

use crate::classify::classify;
use crate::config::SimConfig;
use crate::metrics::{Census, TickReport};
use crate::migrate::step;
use crate::populate::initialize;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use schelling_core::{SimError, StateGrid, World};
use tracing::{debug, info};

// Compile-time assertion: Simulation can be moved to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

/// Outcome of [`Simulation::run_until_stable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks executed by this call.
    pub ticks: u64,
    /// Whether the last tick found no unsatisfied agents.
    pub stable: bool,
    /// Report of the last tick executed, if any.
    pub last: Option<TickReport>,
}

/// One Schelling run: a world plus the RNG and threshold that drive it.
///
/// # Example
///
/// ```
/// use schelling_engine::{SimConfig, Simulation};
///
/// let mut sim = Simulation::new(SimConfig::default().with_seed(7)).unwrap();
/// let report = sim.tick().unwrap();
/// assert_eq!(report.tick, 1);
/// assert!(report.moved <= report.unsatisfied);
/// ```
#[derive(Debug)]
pub struct Simulation {
    world: World,
    threshold: f64,
    rng: ChaCha8Rng,
    tick: u64,
    stable_logged: bool,
}

impl Simulation {
    /// Validate `config`, seed the RNG, and populate a fresh world.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let world = initialize(config.side_length, &config.distribution, &mut rng)?;
        info!(
            side_length = config.side_length,
            threshold = config.threshold,
            seed = config.seed,
            "simulation created"
        );
        Ok(Self {
            world,
            threshold: config.threshold,
            rng,
            tick: 0,
            stable_logged: false,
        })
    }

    /// Run an existing world under `threshold`, with RNG seeded by `seed`.
    pub fn from_world(world: World, threshold: f64, seed: u64) -> Result<Self, SimError> {
        if !threshold.is_finite() {
            return Err(SimError::invalid(format!(
                "threshold must be finite, got {threshold}"
            )));
        }
        Ok(Self {
            world,
            threshold,
            rng: ChaCha8Rng::seed_from_u64(seed),
            tick: 0,
            stable_logged: false,
        })
    }

    /// Advance by one generation: classify, then migrate.
    pub fn tick(&mut self) -> Result<TickReport, SimError> {
        let states = classify(&self.world, self.threshold);
        let outcome = step(&states, &mut self.world, &mut self.rng)?;
        self.tick += 1;

        let report = TickReport {
            tick: self.tick,
            unsatisfied: outcome.unsatisfied,
            vacancies: outcome.vacancies,
            moved: outcome.moved,
        };
        debug!(
            tick = report.tick,
            unsatisfied = report.unsatisfied,
            moved = report.moved,
            "tick complete"
        );
        if report.is_stable() && !self.stable_logged {
            info!(tick = report.tick, "no unsatisfied agents remain");
            self.stable_logged = true;
        }
        Ok(report)
    }

    /// Tick until a tick finds nobody unsatisfied or `max_ticks` ticks
    /// have run.
    pub fn run_until_stable(&mut self, max_ticks: u64) -> Result<RunSummary, SimError> {
        let mut last = None;
        for n in 1..=max_ticks {
            let report = self.tick()?;
            last = Some(report);
            if report.is_stable() {
                return Ok(RunSummary {
                    ticks: n,
                    stable: true,
                    last,
                });
            }
        }
        debug!(max_ticks, "tick budget exhausted before stabilising");
        Ok(RunSummary {
            ticks: max_ticks,
            stable: false,
            last,
        })
    }

    /// Current occupancy, read-only.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Classification of the current world, for renderers and stop checks.
    pub fn states(&self) -> StateGrid {
        classify(&self.world, self.threshold)
    }

    /// Kind counts of the current world.
    pub fn census(&self) -> Census {
        Census::of(&self.world)
    }

    /// Similarity threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Ticks executed so far.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Consume the simulation and return its world.
    pub fn into_world(self) -> World {
        self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schelling_core::Kind;
    use schelling_test_utils::{kind_counts, three_by_three, uniform_world};

    #[test]
    fn new_rejects_invalid_config() {
        let config = SimConfig {
            side_length: 0,
            ..SimConfig::default()
        };
        assert!(matches!(
            Simulation::new(config),
            Err(SimError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn from_world_rejects_nan_threshold() {
        assert!(Simulation::from_world(three_by_three(), f64::NAN, 0).is_err());
    }

    #[test]
    fn new_populates_default_world() {
        let sim = Simulation::new(SimConfig::default()).unwrap();
        let census = sim.census();
        assert_eq!(census.kind_a, 225);
        assert_eq!(census.kind_b, 225);
        assert_eq!(census.empty, 450);
        assert_eq!(sim.tick_count(), 0);
    }

    #[test]
    fn tick_numbers_increase() {
        let mut sim = Simulation::from_world(three_by_three(), 0.5, 1).unwrap();
        assert_eq!(sim.tick().unwrap().tick, 1);
        assert_eq!(sim.tick().unwrap().tick, 2);
        assert_eq!(sim.tick_count(), 2);
    }

    #[test]
    fn same_seed_same_history() {
        let config = SimConfig::from_cell_count(400).with_seed(99);
        let mut a = Simulation::new(config.clone()).unwrap();
        let mut b = Simulation::new(config).unwrap();
        for _ in 0..10 {
            assert_eq!(a.tick().unwrap(), b.tick().unwrap());
        }
        assert_eq!(a.world(), b.world());
    }

    #[test]
    fn stable_world_stops_immediately() {
        let mut sim = Simulation::from_world(uniform_world(4, Kind::KindB), 0.9, 0).unwrap();
        let summary = sim.run_until_stable(100).unwrap();
        assert!(summary.stable);
        assert_eq!(summary.ticks, 1);
        assert_eq!(summary.last.unwrap().moved, 0);
    }

    #[test]
    fn zero_budget_runs_nothing() {
        let mut sim = Simulation::from_world(three_by_three(), 0.5, 0).unwrap();
        let summary = sim.run_until_stable(0).unwrap();
        assert_eq!(summary.ticks, 0);
        assert!(!summary.stable);
        assert!(summary.last.is_none());
        assert_eq!(sim.world(), &three_by_three());
    }

    #[test]
    fn run_conserves_counts() {
        let mut sim = Simulation::new(SimConfig::from_cell_count(625).with_seed(3)).unwrap();
        let before = kind_counts(sim.world());
        sim.run_until_stable(50).unwrap();
        assert_eq!(kind_counts(sim.world()), before);
    }
}
