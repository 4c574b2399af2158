//! Grid interpolation.
//!
//! ## Available Items
//!
//! - [`GridInterpolator`]: Bilinear interpolation over a rectangular, possibly
//!   irregular, grid with NaN for off-grid points
//! - [`interpolate_grid`]: One-shot batch evaluation with full input validation
//! - [`GridCell`], [`bracket_index`]: Bracketing-cell search on ascending axes
//!
//! ## Example
//!
//! ```
//! use grid_interp::math::interpolators::GridInterpolator;
//!
//! let xs = [0.0, 1.0, 2.0];
//! let ys = [0.0, 1.0, 2.0];
//! // z = x * y, x-major
//! let zs = [0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 0.0, 2.0, 4.0];
//!
//! let interp = GridInterpolator::new(&xs, &ys, &zs).unwrap();
//! let out = interp.interpolate(&[1.5, 0.5], &[1.5, 2.5]).unwrap();
//!
//! assert!((out.values[0] - 2.25).abs() < 1e-10);
//! assert!(out.values[1].is_nan());
//! assert!(out.has_warning());
//! ```

mod bilinear;
mod grid;

pub use bilinear::{
    interpolate_grid, interpolate_grid_with_config, GridInterpolator, InterpolationOutput,
};
pub use grid::{
    bracket_index, grid_offset, validate_grid_shape, validate_query_shape, GridCell,
    MIN_AXIS_POINTS,
};
