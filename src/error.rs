//! Error types for grid construction and bulk loading.
//!
//! Hot-path operations (queries, ingestion, morphology, ray tracing) never
//! fail; out-of-bounds work is silently skipped. Errors exist only where bad
//! parameters would otherwise poison every later answer: initialization and
//! direct state replacement.

use thiserror::Error;

/// Precondition violations caught at grid construction or bulk load.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Resolution must be a positive finite number of meters per cell.
    #[error("resolution must be positive and finite, got {0}")]
    InvalidResolution(f32),

    /// Every axis must span at least one cell.
    #[error("grid dimension along axis {axis} must be non-zero")]
    ZeroDimension {
        /// Axis with the zero extent.
        axis: usize,
    },

    /// Inflation ratio must be a non-negative finite scalar.
    #[error("inflation ratio must be non-negative and finite, got {0}")]
    InvalidInflationRatio(f32),

    /// The requested dimensions multiply out beyond the addressable range.
    #[error("grid dimensions {dimensions:?} overflow the addressable cell count")]
    CellCountOverflow {
        /// Requested per-axis dimensions.
        dimensions: Vec<usize>,
    },

    /// A bulk-loaded cell buffer does not match the declared dimensions.
    #[error("cell buffer holds {got} values but dimensions {dimensions:?} require {expected}")]
    CellCountMismatch {
        /// Declared per-axis dimensions.
        dimensions: Vec<usize>,
        /// Cell count those dimensions require.
        expected: usize,
        /// Cell count actually supplied.
        got: usize,
    },
}
