//! Rayon-based evaluation of query batches.
//!
//! Each query point reads only shared immutable grid data and writes a single
//! output slot, so the batch maps cleanly onto `par_iter` without locking.
//! Output order always matches input order.

use rayon::prelude::*;

use crate::config::InterpolationConfig;

/// Map `f` over paired coordinates, in parallel when the batch is large enough.
///
/// # Arguments
///
/// * `xs` - X coordinates (same length as `ys`)
/// * `ys` - Y coordinates
/// * `config` - Decides between the sequential and the rayon path
/// * `f` - Per-point function
///
/// # Returns
///
/// One value per coordinate pair, in input order.
pub fn map_pairs<F>(xs: &[f64], ys: &[f64], config: &InterpolationConfig, f: F) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64 + Sync + Send,
{
    debug_assert_eq!(xs.len(), ys.len());

    if config.should_parallelize(xs.len()) {
        xs.par_iter()
            .zip(ys.par_iter())
            .with_min_len(config.min_chunk_len())
            .map(|(&x, &y)| f(x, y))
            .collect()
    } else {
        xs.iter().zip(ys).map(|(&x, &y)| f(x, y)).collect()
    }
}
