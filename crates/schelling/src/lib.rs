//! Schelling: a residential segregation simulation engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Schelling sub-crates. Adding `schelling` as a single dependency is
//! enough for most callers.
//!
//! # Quick start
//!
//! ```rust
//! use schelling::prelude::*;
//!
//! let config = SimConfig::from_cell_count(900).with_threshold(0.7).with_seed(42);
//! let mut sim = Simulation::new(config).unwrap();
//!
//! // A render loop would call `tick()` on its own schedule and draw
//! // `sim.world()` afterwards.
//! for _ in 0..10 {
//!     let report = sim.tick().unwrap();
//!     if report.is_stable() {
//!         break;
//!     }
//! }
//! let world = sim.world();
//! assert_eq!(world.side(), 30);
//! assert_eq!(sim.census().total(), 900);
//! ```
//!
//! # Lower-level use
//!
//! The three operations are also free functions, for callers that keep
//! their own world and RNG:
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use schelling::prelude::*;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let mut world = initialize(20, &Distribution::default(), &mut rng).unwrap();
//! let states = classify(&world, 0.5);
//! let outcome = step(&states, &mut world, &mut rng).unwrap();
//! assert_eq!(outcome.moved, outcome.unsatisfied.min(outcome.vacancies));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `schelling-core` | `Kind`, `Satisfaction`, `Grid`, `SimError` |
//! | [`engine`] | `schelling-engine` | Population, classification, migration, `Simulation` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: cell kinds, satisfaction states, grids, errors (`schelling-core`).
pub use schelling_core as types;

/// Population, classification, migration, and orchestration (`schelling-engine`).
pub use schelling_engine as engine;

/// Common imports for typical usage.
///
/// ```rust
/// use schelling::prelude::*;
/// ```
pub mod prelude {
    pub use schelling_core::{Grid, Kind, Satisfaction, SimError, StateGrid, World};
    pub use schelling_engine::{
        classify, initialize, shuffle, shuffle_grid, step, Census, Distribution, RunSummary,
        SatisfactionSummary, SimConfig, Simulation, StepOutcome, TickReport,
    };
}
