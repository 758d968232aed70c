//! Simulation configuration and validation.
//!
//! [`SimConfig`] is the builder-input for [`Simulation::new`](crate::Simulation::new).
//! Pacing (how often to tick) belongs to the caller's loop and is not
//! configured here.

use crate::populate::{side_for_cell_count, Distribution};
use schelling_core::SimError;

/// Default number of locations in a world (a 30 × 30 grid).
pub const DEFAULT_CELL_COUNT: usize = 900;

/// Default similarity threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Everything needed to build and run one simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Side length of the square world. Must be at least 1.
    pub side_length: usize,
    /// Target proportions of each kind.
    pub distribution: Distribution,
    /// Minimum fraction of same-kind occupied neighbours for an agent
    /// to be satisfied. Values outside `[0, 1]` are allowed; NaN and
    /// infinities are not.
    pub threshold: f64,
    /// Seed for the run's RNG. Same seed, same run.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            side_length: side_for_cell_count(DEFAULT_CELL_COUNT),
            distribution: Distribution::default(),
            threshold: DEFAULT_THRESHOLD,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Default configuration sized from a raw location count.
    ///
    /// The side is the integer square root, so non-square counts are
    /// truncated.
    pub fn from_cell_count(cell_count: usize) -> Self {
        Self {
            side_length: side_for_cell_count(cell_count),
            ..Self::default()
        }
    }

    /// Set the threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the distribution.
    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfiguration`] if:
    /// - `side_length` is 0
    /// - `distribution` fails [`Distribution::validate`]
    /// - `threshold` is NaN or infinite
    pub fn validate(&self) -> Result<(), SimError> {
        if self.side_length == 0 {
            return Err(SimError::invalid("side_length must be at least 1"));
        }
        self.distribution.validate()?;
        if !self.threshold.is_finite() {
            return Err(SimError::invalid(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = SimConfig::default();
        assert_eq!(c.side_length, 30);
        assert_eq!(c.threshold, 0.7);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn from_cell_count_truncates() {
        assert_eq!(SimConfig::from_cell_count(10_000).side_length, 100);
        assert_eq!(SimConfig::from_cell_count(99).side_length, 9);
    }

    #[test]
    fn validate_rejects_zero_side() {
        let c = SimConfig {
            side_length: 0,
            ..SimConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(SimError::InvalidConfiguration { .. })
        ));
        assert!(SimConfig::from_cell_count(0).validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_threshold() {
        assert!(SimConfig::default()
            .with_threshold(f64::NAN)
            .validate()
            .is_err());
        assert!(SimConfig::default()
            .with_threshold(f64::INFINITY)
            .validate()
            .is_err());
        assert!(SimConfig::default().with_threshold(1.5).validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_distribution() {
        let c = SimConfig::default().with_distribution(Distribution::new(0.0, 0.0));
        assert!(c.validate().is_err());
    }
}
