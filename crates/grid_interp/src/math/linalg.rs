//! Local bilinear surface fitting.
//!
//! A grid cell's four corner values determine the surface
//!
//! ```text
//! z(x, y) = c0 + c1*x + c2*y + c3*x*y
//! ```
//!
//! The coefficients are obtained by solving the 4×4 design system with a
//! column-pivoting Householder QR on stack-allocated `nalgebra` types, so no
//! heap allocation happens per query point.

use nalgebra::{Matrix4, Vector4};

/// Coefficients `[c0, c1, c2, c3]` of a bilinear surface.
///
/// # Example
///
/// ```
/// use grid_interp::math::BilinearCoefficients;
///
/// // z = x + y on the unit square
/// let c = BilinearCoefficients::fit([0.0, 1.0], [0.0, 1.0], [0.0, 1.0, 1.0, 2.0]);
/// assert!((c.evaluate(0.5, 0.5) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BilinearCoefficients {
    c: [f64; 4],
}

impl BilinearCoefficients {
    /// Fit the surface through the corners of a cell.
    ///
    /// # Arguments
    ///
    /// * `x` - `[x0, x1]` cell edges along X
    /// * `y` - `[y0, y1]` cell edges along Y
    /// * `z` - corner values `[z00, z01, z10, z11]` at
    ///   `(x0,y0), (x0,y1), (x1,y0), (x1,y1)`
    ///
    /// A degenerate cell (repeated coordinates) is not rejected. If the
    /// decomposition reports a singular system every coefficient is NaN;
    /// a nearly singular one yields whatever the solve produces.
    pub fn fit(x: [f64; 2], y: [f64; 2], z: [f64; 4]) -> Self {
        let design = design_matrix(x, y);
        let rhs = Vector4::from(z);

        let solution = design
            .col_piv_qr()
            .solve(&rhs)
            .unwrap_or_else(|| Vector4::repeat(f64::NAN));

        Self {
            c: [solution[0], solution[1], solution[2], solution[3]],
        }
    }

    /// Evaluate the surface at `(x, y)`.
    #[inline]
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        let [c0, c1, c2, c3] = self.c;
        c0 + c1 * x + c2 * y + c3 * x * y
    }

    /// Returns the coefficients as `[c0, c1, c2, c3]`.
    #[inline]
    pub fn as_array(&self) -> [f64; 4] {
        self.c
    }
}

/// Rows are `[1, xk, yk, xk*yk]` for the corners in
/// `(x0,y0), (x0,y1), (x1,y0), (x1,y1)` order.
#[inline]
#[rustfmt::skip]
fn design_matrix(x: [f64; 2], y: [f64; 2]) -> Matrix4<f64> {
    let [x0, x1] = x;
    let [y0, y1] = y;
    Matrix4::new(
        1.0, x0, y0, x0 * y0,
        1.0, x0, y1, x0 * y1,
        1.0, x1, y0, x1 * y0,
        1.0, x1, y1, x1 * y1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_design_matrix_layout() {
        let m = design_matrix([1.0, 2.0], [3.0, 5.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 2)], 5.0);
        assert_eq!(m[(2, 1)], 2.0);
        assert_eq!(m[(3, 3)], 10.0);
    }

    #[test]
    fn test_fit_recovers_coefficients() {
        // z = 1 + 2x - 3y + 0.5xy
        let f = |x: f64, y: f64| 1.0 + 2.0 * x - 3.0 * y + 0.5 * x * y;
        let (x0, x1, y0, y1) = (-1.0, 2.5, 0.5, 4.0);
        let c = BilinearCoefficients::fit(
            [x0, x1],
            [y0, y1],
            [f(x0, y0), f(x0, y1), f(x1, y0), f(x1, y1)],
        );

        let [c0, c1, c2, c3] = c.as_array();
        assert_relative_eq!(c0, 1.0, epsilon = 1e-10);
        assert_relative_eq!(c1, 2.0, epsilon = 1e-10);
        assert_relative_eq!(c2, -3.0, epsilon = 1e-10);
        assert_relative_eq!(c3, 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_fit_passes_through_corners() {
        let z = [3.0, -1.0, 7.5, 0.25];
        let c = BilinearCoefficients::fit([10.0, 11.0], [-2.0, -1.5], z);

        assert_relative_eq!(c.evaluate(10.0, -2.0), z[0], epsilon = 1e-9);
        assert_relative_eq!(c.evaluate(10.0, -1.5), z[1], epsilon = 1e-9);
        assert_relative_eq!(c.evaluate(11.0, -2.0), z[2], epsilon = 1e-9);
        assert_relative_eq!(c.evaluate(11.0, -1.5), z[3], epsilon = 1e-9);
    }

    #[test]
    fn test_centre_is_corner_average() {
        let z = [1.0, 2.0, 3.0, 6.0];
        let c = BilinearCoefficients::fit([0.0, 2.0], [0.0, 2.0], z);
        assert_relative_eq!(c.evaluate(1.0, 1.0), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_singular_cell_gives_nan_coefficients() {
        let c = BilinearCoefficients::fit([1.0, 1.0], [0.0, 1.0], [0.0, 1.0, 2.0, 3.0]);
        assert!(c.as_array().iter().all(|v| v.is_nan()));
        assert!(c.evaluate(1.0, 0.5).is_nan());
    }
}
