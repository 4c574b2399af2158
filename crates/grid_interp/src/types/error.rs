//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Fatal errors that abort an interpolation call
//! - `ShapeMismatch`: The length invariants an input set can violate
//! - `ConfigError`: Errors from building or parsing an `InterpolationConfig`

use thiserror::Error;

/// Length invariant violated by the inputs of an interpolation call.
///
/// Every variant carries the lengths that were actually supplied so the
/// caller can see which buffer is off.
///
/// # Examples
/// ```
/// use grid_interp::types::ShapeMismatch;
///
/// let err = ShapeMismatch::AxisLengths { x_len: 3, y_len: 2 };
/// assert!(err.to_string().starts_with("Y-grid size does not match X-grid size"));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeMismatch {
    /// The Y-axis length differs from the X-axis length.
    #[error("Y-grid size does not match X-grid size ({y_len} != {x_len})")]
    AxisLengths {
        /// Length of the X-axis
        x_len: usize,
        /// Length of the Y-axis
        y_len: usize,
    },

    /// The value grid does not hold exactly one value per axis pair.
    #[error("Z-grid size does not match X-grid × Y-grid ({z_len} != {nx} × {ny})")]
    GridSize {
        /// Length of the value grid
        z_len: usize,
        /// Length of the X-axis
        nx: usize,
        /// Length of the Y-axis
        ny: usize,
    },

    /// The query coordinate sequences differ in length.
    #[error("query X/Y length mismatch ({x_len} != {y_len})")]
    QueryLengths {
        /// Number of query X coordinates
        x_len: usize,
        /// Number of query Y coordinates
        y_len: usize,
    },
}

/// Fatal interpolation errors.
///
/// Any of these aborts the whole call before per-point evaluation starts, so
/// no partial result is ever produced.
///
/// # Variants
/// - `ShapeMismatch`: Input lengths are inconsistent
/// - `InsufficientData`: An axis is too short to form a grid cell
///
/// # Examples
/// ```
/// use grid_interp::types::{InterpolationError, ShapeMismatch};
///
/// let err: InterpolationError = ShapeMismatch::QueryLengths { x_len: 4, y_len: 3 }.into();
/// assert!(err.is_shape_mismatch());
/// assert!(format!("{}", err).contains("query X/Y length mismatch"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Input sequences have inconsistent lengths.
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(#[from] ShapeMismatch),

    /// Insufficient grid points along an axis.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },
}

impl InterpolationError {
    /// Returns `true` for any of the length invariant violations.
    #[inline]
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, InterpolationError::ShapeMismatch(_))
    }
}

/// Configuration errors for the interpolation engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Parallel chunk length must be at least one point.
    #[error("Invalid chunk length {0}: must be at least 1")]
    InvalidChunkLength(usize),

    /// Configuration text could not be parsed.
    #[error("Configuration parse error: {0}")]
    Parse(String),
}
