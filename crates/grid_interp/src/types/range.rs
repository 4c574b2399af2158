//! Coordinate extents and the call-level range diagnostic.

use std::fmt;

/// Closed interval `[min, max]` spanned by a coordinate sequence.
///
/// NaN entries are ignored when the extent is measured.
///
/// # Examples
/// ```
/// use grid_interp::types::Extent;
///
/// let ext = Extent::of(&[2.0, -1.0, 5.0]).unwrap();
/// assert_eq!(ext.min, -1.0);
/// assert_eq!(ext.max, 5.0);
/// assert!(ext.contains(0.0));
/// assert!(!ext.contains(5.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl Extent {
    /// Measure the extent of `values`. Returns `None` for an empty slice.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        Some(Self::spanning(values))
    }

    /// Measure the extent of a slice already known to be non-empty.
    ///
    /// An empty slice gives the inverted interval `[+inf, -inf]`, which
    /// contains nothing.
    pub(crate) fn spanning(values: &[f64]) -> Self {
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        Self { min, max }
    }

    /// Whether `v` lies in the closed interval. NaN is never contained.
    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Whether this extent reaches below `other.min` or above `other.max`.
    #[inline]
    pub fn exceeds(&self, other: &Extent) -> bool {
        self.min < other.min || self.max > other.max
    }
}

/// Advisory raised when the query extrema reach beyond the input grid.
///
/// The comparison is coarse: it looks at global minima and maxima only and
/// does not say which query points are affected. Points that really are out
/// of range still evaluate to NaN individually.
///
/// # Examples
/// ```
/// use grid_interp::types::{Extent, RangeWarning};
///
/// let grid = Extent { min: 0.0, max: 1.0 };
/// let query = Extent { min: 0.0, max: 2.0 };
/// let warning = RangeWarning::check((query, grid), (grid, grid)).unwrap();
/// assert_eq!(warning.to_string(), "query grid lies outside input grid range");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeWarning {
    /// Extent of the query X coordinates
    pub query_x: Extent,
    /// Extent of the query Y coordinates
    pub query_y: Extent,
    /// Extent of the input X-axis
    pub grid_x: Extent,
    /// Extent of the input Y-axis
    pub grid_y: Extent,
}

impl RangeWarning {
    /// Compare `(query_x, query_y)` against `(grid_x, grid_y)`.
    ///
    /// Returns a warning if either query axis exceeds its grid axis on
    /// either side.
    pub fn check(query: (Extent, Extent), grid: (Extent, Extent)) -> Option<Self> {
        let (query_x, query_y) = query;
        let (grid_x, grid_y) = grid;
        if query_x.exceeds(&grid_x) || query_y.exceeds(&grid_y) {
            Some(Self {
                query_x,
                query_y,
                grid_x,
                grid_y,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "query grid lies outside input grid range")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Extent {
        Extent { min: 0.0, max: 1.0 }
    }

    #[test]
    fn test_extent_empty() {
        assert!(Extent::of(&[]).is_none());
    }

    #[test]
    fn test_spanning_empty_contains_nothing() {
        let ext = Extent::spanning(&[]);
        assert!(!ext.contains(0.0));
        assert!(!ext.contains(f64::INFINITY));
    }

    #[test]
    fn test_extent_ignores_nan() {
        let ext = Extent::of(&[0.5, f64::NAN, -0.5]).unwrap();
        assert_eq!(ext, Extent { min: -0.5, max: 0.5 });
    }

    #[test]
    fn test_extent_contains_bounds() {
        let ext = unit();
        assert!(ext.contains(0.0));
        assert!(ext.contains(1.0));
        assert!(!ext.contains(-1e-12));
        assert!(!ext.contains(f64::NAN));
    }

    #[test]
    fn test_no_warning_inside() {
        let query = Extent { min: 0.25, max: 1.0 };
        assert!(RangeWarning::check((query, query), (unit(), unit())).is_none());
    }

    #[test]
    fn test_warning_each_side() {
        let below = Extent { min: -0.1, max: 0.5 };
        let above = Extent { min: 0.5, max: 1.1 };

        assert!(RangeWarning::check((below, unit()), (unit(), unit())).is_some());
        assert!(RangeWarning::check((above, unit()), (unit(), unit())).is_some());
        assert!(RangeWarning::check((unit(), below), (unit(), unit())).is_some());
        assert!(RangeWarning::check((unit(), above), (unit(), unit())).is_some());
    }

    #[test]
    fn test_warning_keeps_extents() {
        let query = Extent { min: -2.0, max: 0.5 };
        let warning = RangeWarning::check((query, unit()), (unit(), unit())).unwrap();
        assert_eq!(warning.query_x, query);
        assert_eq!(warning.grid_y, unit());
    }
}
