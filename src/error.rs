//! Error types for u-aco.
//!
//! Every error here is raised before a solve allocates any pheromone
//! state. Sampling degeneracies during a run are handled locally and
//! never surface as errors.

use thiserror::Error;

/// Result type alias for u-aco operations.
pub type Result<T> = std::result::Result<T, AcoError>;

/// Errors reported by matrix validation and the solver entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// The distance matrix has no rows.
    #[error("distance matrix is empty")]
    Empty,

    /// A tour needs at least two distinct cities.
    #[error("at least 2 cities are required, got {n}")]
    TooFewCities {
        /// Number of cities supplied.
        n: usize,
    },

    /// A row (or the flat buffer) does not have the expected length.
    #[error("distance matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        /// Offending row, or `0` for a flat buffer.
        row: usize,
        /// Expected number of entries.
        expected: usize,
        /// Actual number of entries.
        found: usize,
    },

    /// A diagonal entry is not zero.
    #[error("diagonal entry ({index}, {index}) must be 0, got {value}")]
    NonZeroDiagonal {
        /// City index.
        index: usize,
        /// Value found on the diagonal.
        value: f64,
    },

    /// An off-diagonal entry is zero or negative, so `1/d` is undefined.
    #[error("distance ({from}, {to}) must be positive, got {value}")]
    NonPositiveDistance {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
        /// Offending value.
        value: f64,
    },

    /// An entry is NaN or infinite.
    #[error("distance ({from}, {to}) is not finite")]
    NonFiniteDistance {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
    },

    /// The solver configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
