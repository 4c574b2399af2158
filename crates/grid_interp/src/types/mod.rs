//! Error and diagnostic types.
//!
//! This module provides:
//! - `error`: Fatal errors (`InterpolationError`, `ShapeMismatch`) and `ConfigError`
//! - `range`: Coordinate extents and the non-fatal `RangeWarning`
//!
//! # Re-exports
//!
//! - [`InterpolationError`], [`ShapeMismatch`], [`ConfigError`] from `error`
//! - [`Extent`], [`RangeWarning`] from `range`

pub mod error;
pub mod range;

pub use error::{ConfigError, InterpolationError, ShapeMismatch};
pub use range::{Extent, RangeWarning};
