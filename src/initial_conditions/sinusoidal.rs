use crate::grid::Grid;
use crate::initial_conditions::*;

const CHUNK_SIZE: usize = 4096;

/// `base + amplitude * sin(x * harmonic * pi / extent)`, ghosts included.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sinusoidal {
    pub base: f64,
    pub amplitude: f64,
    pub harmonic: f64,
    pub extent: f64,
}

impl Sinusoidal {
    pub fn wave_number(&self) -> f64 {
        self.harmonic * std::f64::consts::PI / self.extent
    }

    pub fn value(&self, x: f64) -> f64 {
        self.base + self.amplitude * (x * self.wave_number()).sin()
    }
}

impl InitialCondition for Sinusoidal {
    fn seed(&self, grid: &Grid, current: &mut [f64], next: &mut [f64]) {
        par_set_values(grid, current, |x| self.value(x), CHUNK_SIZE);
        next.fill(0.0);
    }
}
