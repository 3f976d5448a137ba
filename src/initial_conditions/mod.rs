mod piecewise_step;
mod sinusoidal;
mod wall_values;

pub use piecewise_step::*;
pub use sinusoidal::*;
pub use wall_values::*;

use crate::grid::Grid;
use rayon::prelude::*;

/// Seeds both field buffers before the first step.
/// Seeding must be idempotent.
pub trait InitialCondition: Send + Sync + std::fmt::Debug {
    /// Fill `current` with time level zero, zero `next`.
    fn seed(&self, grid: &Grid, current: &mut [f64], next: &mut [f64]);
}

/// Evaluate `f` at every grid coordinate, ghosts included.
/// `chunk_size` breaks the work into tasks for multi-threading.
pub fn par_set_values<F: Fn(f64) -> f64 + Sync>(
    grid: &Grid,
    values: &mut [f64],
    f: F,
    chunk_size: usize,
) {
    debug_assert_eq!(grid.len(), values.len());
    values
        .par_chunks_mut(chunk_size.max(1))
        .zip(grid.coords().par_chunks(chunk_size.max(1)))
        .for_each(|(value_chunk, x_chunk)| {
            for (value_mut, x) in value_chunk.iter_mut().zip(x_chunk) {
                *value_mut = f(*x);
            }
        });
}
