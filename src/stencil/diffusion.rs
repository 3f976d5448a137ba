use crate::stencil::*;

/// Forward time, central space diffusion with a constant source.
///
/// `u[i] + S * (u[i+1] - 2u[i] + u[i-1]) + A * dt`
/// where `S = nu * dt / h^2` is the Von Neumann number.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExplicitDiffusion {
    stability_number: f64,
    source_increment: f64,
}

impl ExplicitDiffusion {
    pub fn new(stability_number: f64, source: f64, dt: f64) -> Self {
        ExplicitDiffusion {
            stability_number,
            source_increment: source * dt,
        }
    }
}

impl StencilRule for ExplicitDiffusion {
    fn footprint(&self) -> Footprint {
        Footprint::new(1, 1)
    }

    #[inline]
    fn apply(&self, input: &[f64], i: usize) -> f64 {
        let left = input[i - 1];
        let middle = input[i];
        let right = input[i + 1];
        middle
            + self.stability_number * (right - 2.0 * middle + left)
            + self.source_increment
    }
}
