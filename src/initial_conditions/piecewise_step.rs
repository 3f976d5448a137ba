use crate::grid::Grid;
use crate::initial_conditions::*;

const CHUNK_SIZE: usize = 4096;

/// Three level step profile on `[0, 1)`:
/// 0.6 below 0.2, on `[0.4, 0.6)` and from 0.8 on, 0.4 on `[0.6, 0.8)`,
/// 0.2 on `[0.2, 0.4)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PiecewiseStep;

impl PiecewiseStep {
    pub const HIGH: f64 = 0.6;
    pub const MIDDLE: f64 = 0.4;
    pub const LOW: f64 = 0.2;

    pub fn value(&self, x: f64) -> f64 {
        if x < 0.2 || (0.4..0.6).contains(&x) || x >= 0.8 {
            Self::HIGH
        } else if (0.6..0.8).contains(&x) {
            Self::MIDDLE
        } else {
            Self::LOW
        }
    }
}

impl InitialCondition for PiecewiseStep {
    fn seed(&self, grid: &Grid, current: &mut [f64], next: &mut [f64]) {
        par_set_values(grid, current, |x| self.value(x), CHUNK_SIZE);
        next.fill(0.0);
    }
}
