//! Bilinear interpolation of a gridded scalar field.

use tracing::{debug, trace, warn};

use super::grid::{
    bracket_index, validate_axis_points, validate_grid_shape, validate_query_shape, GridCell,
};
use crate::config::InterpolationConfig;
use crate::math::linalg::BilinearCoefficients;
use crate::parallel::map_pairs;
use crate::types::{Extent, InterpolationError, RangeWarning};

/// Result of evaluating a query batch.
///
/// `values` holds one entry per query point: the interpolated value, or NaN
/// for points outside the grid. `warning` is set when the query extrema
/// reach beyond the grid extrema.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationOutput {
    /// Interpolated values in query order
    pub values: Vec<f64>,
    /// Coarse range diagnostic for the whole batch
    pub warning: Option<RangeWarning>,
}

impl InterpolationOutput {
    /// Returns `true` if the range diagnostic tripped.
    #[inline]
    pub fn has_warning(&self) -> bool {
        self.warning.is_some()
    }

    /// Discard the diagnostic and keep the values.
    #[inline]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Bilinear interpolator over a rectangular grid.
///
/// Borrows the X-axis, Y-axis and value grid, validates their shape once,
/// and evaluates any number of query batches against them. Each query point
/// is resolved to its bracketing cell by binary search and the local surface
/// `c0 + c1*x + c2*y + c3*x*y` is fitted through the cell's corners with a
/// 4×4 QR solve.
///
/// # Grid Layout
///
/// The value grid is flat and x-major: `zs[i * ys.len() + j] = z(xs[i], ys[j])`.
/// Both axes must be ascending and, as in the host environment this kernel
/// serves, of equal length.
///
/// # Example
///
/// ```
/// use grid_interp::GridInterpolator;
///
/// let xs = [0.0, 1.0];
/// let ys = [0.0, 1.0];
/// let zs = [0.0, 1.0, 1.0, 2.0];
///
/// let interp = GridInterpolator::new(&xs, &ys, &zs).unwrap();
/// assert!((interp.interpolate_point(0.5, 0.5) - 1.0).abs() < 1e-12);
/// assert!(interp.interpolate_point(2.0, 0.5).is_nan());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GridInterpolator<'a> {
    xs: &'a [f64],
    ys: &'a [f64],
    zs: &'a [f64],
    x_range: Extent,
    y_range: Extent,
    config: InterpolationConfig,
}

impl<'a> GridInterpolator<'a> {
    /// Construct an interpolator from grid data.
    ///
    /// # Arguments
    ///
    /// * `xs` - Ascending X-axis coordinates
    /// * `ys` - Ascending Y-axis coordinates (same length as `xs`)
    /// * `zs` - Flat x-major value grid of length `xs.len() * ys.len()`
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::ShapeMismatch)` - Axis lengths differ or the
    ///   grid size is not `nx * ny`
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 points on an axis
    pub fn new(xs: &'a [f64], ys: &'a [f64], zs: &'a [f64]) -> Result<Self, InterpolationError> {
        validate_grid_shape(xs, ys, zs)?;
        validate_axis_points(xs)?;
        validate_axis_points(ys)?;

        // Both axes hold at least MIN_AXIS_POINTS coordinates here.
        let x_range = Extent::spanning(xs);
        let y_range = Extent::spanning(ys);

        Ok(Self {
            xs,
            ys,
            zs,
            x_range,
            y_range,
            config: InterpolationConfig::default(),
        })
    }

    /// Replace the engine configuration.
    #[inline]
    pub fn with_config(mut self, config: InterpolationConfig) -> Self {
        self.config = config;
        self
    }

    /// Evaluate a batch of query points.
    ///
    /// Query shape is validated and the range diagnostic computed before any
    /// point is evaluated. Points outside the grid come back as NaN.
    ///
    /// # Arguments
    ///
    /// * `qx` - Query X coordinates
    /// * `qy` - Query Y coordinates (same length as `qx`)
    ///
    /// # Returns
    ///
    /// * `Ok(InterpolationOutput)` - One value per query point plus the diagnostic
    /// * `Err(InterpolationError::ShapeMismatch)` - `qx` and `qy` differ in length
    pub fn interpolate(
        &self,
        qx: &[f64],
        qy: &[f64],
    ) -> Result<InterpolationOutput, InterpolationError> {
        validate_query_shape(qx, qy)?;

        let warning = self.range_check(qx, qy);
        if let Some(w) = &warning {
            if self.config.log_range_warning() {
                warn!(
                    query_x_min = w.query_x.min,
                    query_x_max = w.query_x.max,
                    query_y_min = w.query_y.min,
                    query_y_max = w.query_y.max,
                    grid_x_min = w.grid_x.min,
                    grid_x_max = w.grid_x.max,
                    grid_y_min = w.grid_y.min,
                    grid_y_max = w.grid_y.max,
                    "{}",
                    w
                );
            }
        }

        debug!(
            n_points = qx.len(),
            nx = self.xs.len(),
            ny = self.ys.len(),
            parallel = self.config.should_parallelize(qx.len()),
            "Evaluating query batch"
        );

        let values = map_pairs(qx, qy, &self.config, |x, y| self.interpolate_point(x, y));

        Ok(InterpolationOutput { values, warning })
    }

    /// Interpolate the field at a single point.
    ///
    /// Returns NaN if `x` or `y` lies outside the grid extent (NaN inputs
    /// included). A singular cell system also yields NaN or a non-finite value.
    pub fn interpolate_point(&self, x: f64, y: f64) -> f64 {
        match self.locate(x, y) {
            Some(cell) => self.cell_coefficients(cell).evaluate(x, y),
            None => {
                trace!(x, y, "Query point outside grid");
                f64::NAN
            }
        }
    }

    /// Find the cell bracketing `(x, y)`, or `None` if the point is off the grid.
    ///
    /// A coordinate equal to the first axis value resolves to the first cell.
    pub fn locate(&self, x: f64, y: f64) -> Option<GridCell> {
        if !self.x_range.contains(x) || !self.y_range.contains(y) {
            return None;
        }
        Some(GridCell {
            i: bracket_index(self.xs, x),
            j: bracket_index(self.ys, y),
        })
    }

    /// Fit the bilinear surface of `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` does not index a cell of this grid.
    pub fn cell_coefficients(&self, cell: GridCell) -> BilinearCoefficients {
        let GridCell { i, j } = cell;
        let [k00, k01, k10, k11] = cell.corner_offsets(self.ys.len());
        BilinearCoefficients::fit(
            [self.xs[i], self.xs[i + 1]],
            [self.ys[j], self.ys[j + 1]],
            [self.zs[k00], self.zs[k01], self.zs[k10], self.zs[k11]],
        )
    }

    /// Coarse range check of a query batch against the grid extent.
    ///
    /// Compares only the global extrema, so it reports that some point may be
    /// out of range without saying which. Empty batches never warn.
    pub fn range_check(&self, qx: &[f64], qy: &[f64]) -> Option<RangeWarning> {
        let query_x = Extent::of(qx)?;
        let query_y = Extent::of(qy)?;
        RangeWarning::check((query_x, query_y), (self.x_range, self.y_range))
    }

    /// Return the valid interpolation domain for x.
    #[inline]
    pub fn x_range(&self) -> Extent {
        self.x_range
    }

    /// Return the valid interpolation domain for y.
    #[inline]
    pub fn y_range(&self) -> Extent {
        self.y_range
    }

    /// Returns the x-axis coordinates.
    #[inline]
    pub fn xs(&self) -> &'a [f64] {
        self.xs
    }

    /// Returns the y-axis coordinates.
    #[inline]
    pub fn ys(&self) -> &'a [f64] {
        self.ys
    }

    /// Returns the flat value grid.
    #[inline]
    pub fn zs(&self) -> &'a [f64] {
        self.zs
    }

    /// Returns the engine configuration.
    #[inline]
    pub fn config(&self) -> &InterpolationConfig {
        &self.config
    }
}

/// Interpolate a gridded field at a batch of query points in one call.
///
/// Validation runs in a fixed order before any point is evaluated: axis
/// lengths, grid size, query lengths, then the minimum axis length. Any
/// failure aborts the call with no partial result.
///
/// # Example
///
/// ```
/// use grid_interp::interpolate_grid;
///
/// let out = interpolate_grid(
///     &[0.0, 1.0],
///     &[0.0, 1.0],
///     &[0.0, 1.0, 1.0, 2.0],
///     &[0.5, 2.0],
///     &[0.5, 0.5],
/// )
/// .unwrap();
///
/// assert!((out.values[0] - 1.0).abs() < 1e-12);
/// assert!(out.values[1].is_nan());
/// assert!(out.has_warning());
/// ```
pub fn interpolate_grid(
    xs: &[f64],
    ys: &[f64],
    zs: &[f64],
    qx: &[f64],
    qy: &[f64],
) -> Result<InterpolationOutput, InterpolationError> {
    interpolate_grid_with_config(xs, ys, zs, qx, qy, InterpolationConfig::default())
}

/// [`interpolate_grid`] with an explicit engine configuration.
pub fn interpolate_grid_with_config(
    xs: &[f64],
    ys: &[f64],
    zs: &[f64],
    qx: &[f64],
    qy: &[f64],
    config: InterpolationConfig,
) -> Result<InterpolationOutput, InterpolationError> {
    validate_grid_shape(xs, ys, zs)?;
    validate_query_shape(qx, qy)?;
    GridInterpolator::new(xs, ys, zs)?
        .with_config(config)
        .interpolate(qx, qy)
}
