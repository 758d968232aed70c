//! Simulation engine for the Schelling segregation model.
//!
//! Builds a randomly populated [`World`](schelling_core::World), classifies
//! each agent as satisfied or not from its Moore neighbourhood, and moves
//! unsatisfied agents into vacancies one tick at a time.
//!
//! # Tick (each call to [`Simulation::tick`])
//!
//! 1. [`classify`] — World → StateGrid
//! 2. [`step`] — StateGrid + World → World (in place)
//!
//! The free functions are usable on their own; [`Simulation`] bundles
//! the world, threshold, and a seeded RNG for callers that just want to
//! advance and render.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod classify;
pub mod config;
pub mod metrics;
pub mod migrate;
pub mod populate;
pub mod shuffle;
pub mod world;

pub use classify::{classify, neighbour_ratio};
pub use config::SimConfig;
pub use metrics::{Census, SatisfactionSummary, TickReport};
pub use migrate::{indices_with, step, StepOutcome};
pub use populate::{initialize, side_for_cell_count, Distribution};
pub use shuffle::{shuffle, shuffle_grid};
pub use world::{RunSummary, Simulation};
