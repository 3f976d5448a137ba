use crate::domain::bc::BoundaryCondition;

/// Pins the first and last node to constants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirichletFixed {
    lower: f64,
    upper: f64,
}

impl DirichletFixed {
    pub fn new(lower: f64, upper: f64) -> Self {
        DirichletFixed { lower, upper }
    }
}

impl BoundaryCondition for DirichletFixed {
    fn halo(&self) -> usize {
        1
    }

    fn ghosts(&self) -> usize {
        0
    }

    fn apply(&self, next: &mut [f64]) {
        debug_assert!(next.len() >= self.min_len());
        let last = next.len() - 1;
        next[0] = self.lower;
        next[last] = self.upper;
    }
}
