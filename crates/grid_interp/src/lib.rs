//! # grid_interp: Bilinear Interpolation of Gridded Fields
//!
//! Evaluates a scalar field known on a rectangular grid at arbitrary query
//! points. Each query is resolved to its bracketing grid cell by binary
//! search, and the local surface `c0 + c1*x + c2*y + c3*x*y` is obtained from
//! the cell's four corner values by a 4×4 QR solve.
//!
//! ## Behaviour at a Glance
//!
//! - Shape violations (axis lengths, grid size, query lengths) abort the call
//!   with [`InterpolationError::ShapeMismatch`] before any point is evaluated
//! - Query points outside the grid evaluate to NaN
//! - A coarse [`RangeWarning`] is returned (and logged through `tracing`) when
//!   the query extrema reach beyond the grid extrema
//! - Large batches are evaluated on the rayon pool; results are identical to
//!   the sequential path
//!
//! ## Usage Examples
//!
//! ```rust
//! use grid_interp::interpolate_grid;
//!
//! let xs = [0.0, 1.0];
//! let ys = [0.0, 1.0];
//! let zs = [0.0, 1.0, 1.0, 2.0]; // x-major: z(x, y) = x + y
//!
//! let out = interpolate_grid(&xs, &ys, &zs, &[0.5, 0.0], &[0.5, 0.0]).unwrap();
//! assert!((out.values[0] - 1.0).abs() < 1e-12);
//! assert!(out.values[1].abs() < 1e-12);
//! assert!(out.warning.is_none());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation for errors, diagnostics and
//!   [`InterpolationConfig`], plus TOML configuration loading

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod math;
pub mod parallel;
pub mod types;

pub use config::{InterpolationConfig, InterpolationConfigBuilder};
pub use math::interpolators::{
    interpolate_grid, interpolate_grid_with_config, GridInterpolator, InterpolationOutput,
};
pub use types::{InterpolationError, RangeWarning, ShapeMismatch};
