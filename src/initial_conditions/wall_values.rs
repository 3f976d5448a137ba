use crate::grid::Grid;
use crate::initial_conditions::*;

/// Fluid at rest between a stationary wall and a moving lid.
/// The edge nodes take the wall velocities immediately.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZeroWithWallValues {
    pub lower: f64,
    pub upper: f64,
}

impl InitialCondition for ZeroWithWallValues {
    fn seed(&self, grid: &Grid, current: &mut [f64], next: &mut [f64]) {
        debug_assert_eq!(grid.len(), current.len());
        current.fill(0.0);
        next.fill(0.0);
        let last = current.len() - 1;
        current[0] = self.lower;
        current[last] = self.upper;
    }
}
