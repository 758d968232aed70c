//! Error types for the Schelling segregation engine.
//!
//! Every public operation either completes fully or returns one of these
//! without mutating its inputs.

use std::error::Error;
use std::fmt;

/// Errors from grid construction, population, and migration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// Side length, distribution, or threshold is unusable.
    InvalidConfiguration {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// Two grids (or a grid and its backing data) disagree on size.
    DimensionMismatch {
        /// The size the operation required.
        expected: usize,
        /// The size it was given.
        actual: usize,
    },
    /// A `(row, col)` lookup fell outside `[0, side)`.
    IndexOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the grid that was queried.
        side: usize,
    },
}

impl SimError {
    /// Shorthand for [`SimError::InvalidConfiguration`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            Self::IndexOutOfBounds { row, col, side } => {
                write!(f, "cell ({row}, {col}) out of bounds for side {side}")
            }
        }
    }
}

impl Error for SimError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let e = SimError::IndexOutOfBounds {
            row: 3,
            col: 7,
            side: 3,
        };
        assert_eq!(e.to_string(), "cell (3, 7) out of bounds for side 3");

        let e = SimError::DimensionMismatch {
            expected: 9,
            actual: 16,
        };
        assert_eq!(e.to_string(), "dimension mismatch: expected 9, got 16");

        let e = SimError::invalid("side length must be at least 1");
        assert!(e.to_string().starts_with("invalid configuration:"));
    }
}
