//! Numerical routines.
//!
//! - `interpolators`: Grid-cell search and batch bilinear interpolation
//! - `linalg`: Per-cell bilinear coefficient fitting

pub mod interpolators;
pub mod linalg;

pub use linalg::BilinearCoefficients;
