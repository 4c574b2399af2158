//! Grid shape validation and bracketing-cell search.

use crate::types::{InterpolationError, ShapeMismatch};

/// Minimum number of coordinates an axis needs to form one cell.
pub const MIN_AXIS_POINTS: usize = 2;

/// Lower-left indices of a bracketing grid cell.
///
/// The cell spans `xs[i]..=xs[i + 1]` and `ys[j]..=ys[j + 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// X-axis index of the lower edge
    pub i: usize,
    /// Y-axis index of the lower edge
    pub j: usize,
}

impl GridCell {
    /// Flat value-grid offsets of the corners `(x0,y0), (x0,y1), (x1,y0), (x1,y1)`
    /// for an x-major grid with `ny` points along Y.
    #[inline]
    pub fn corner_offsets(&self, ny: usize) -> [usize; 4] {
        let lo = grid_offset(self.i, self.j, ny);
        let hi = grid_offset(self.i + 1, self.j, ny);
        [lo, lo + 1, hi, hi + 1]
    }
}

/// Offset of node `(xi, yi)` in an x-major value grid.
#[inline]
pub fn grid_offset(xi: usize, yi: usize, ny: usize) -> usize {
    xi * ny + yi
}

/// Lower index of the cell bracketing `q` on an ascending `axis`.
///
/// Uses a first-not-less-than search: the upper edge is the first coordinate
/// `>= q` and the lower edge its predecessor. A query equal to the first
/// coordinate has no predecessor and is clamped to the first cell, as is
/// anything below the axis. Anything past the end is clamped to the last
/// cell. Callers reject out-of-range points before they get here.
///
/// `axis` must hold at least [`MIN_AXIS_POINTS`] coordinates.
#[inline]
pub fn bracket_index(axis: &[f64], q: f64) -> usize {
    debug_assert!(axis.len() >= MIN_AXIS_POINTS);
    let upper = axis.partition_point(|&v| v < q);
    if upper == 0 {
        0
    } else if upper >= axis.len() {
        axis.len() - 2
    } else {
        upper - 1
    }
}

/// Check the axis and value-grid lengths against each other.
///
/// The axes must have equal length and the grid one value per axis pair.
pub fn validate_grid_shape(xs: &[f64], ys: &[f64], zs: &[f64]) -> Result<(), ShapeMismatch> {
    check_grid_lengths(xs.len(), ys.len(), zs.len())
}

/// Length-only form of [`validate_grid_shape`].
///
/// An `nx * ny` that overflows `usize` is reported as a grid size mismatch.
fn check_grid_lengths(nx: usize, ny: usize, z_len: usize) -> Result<(), ShapeMismatch> {
    if nx != ny {
        return Err(ShapeMismatch::AxisLengths {
            x_len: nx,
            y_len: ny,
        });
    }
    if nx.checked_mul(ny) != Some(z_len) {
        return Err(ShapeMismatch::GridSize { z_len, nx, ny });
    }
    Ok(())
}

/// Check that query X and Y coordinates pair up.
pub fn validate_query_shape(qx: &[f64], qy: &[f64]) -> Result<(), ShapeMismatch> {
    if qx.len() != qy.len() {
        return Err(ShapeMismatch::QueryLengths {
            x_len: qx.len(),
            y_len: qy.len(),
        });
    }
    Ok(())
}

/// Check that an axis can form at least one cell.
pub(crate) fn validate_axis_points(axis: &[f64]) -> Result<(), InterpolationError> {
    if axis.len() < MIN_AXIS_POINTS {
        return Err(InterpolationError::InsufficientData {
            got: axis.len(),
            need: MIN_AXIS_POINTS,
        });
    }
    Ok(())
}
