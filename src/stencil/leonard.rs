use crate::stencil::*;

/// Leonard's third order upwind biased update of the Burgers flux.
///
/// Two upstream points and one downstream point, mirrored by the
/// sign of `u[i]`. Reads up to two nodes to either side.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LeonardUpwind {
    factor: f64,
}

impl LeonardUpwind {
    /// `factor = C * dt / h / 6`
    pub fn new(speed: f64, dt: f64, h: f64) -> Self {
        LeonardUpwind {
            factor: speed * dt / h / 6.0,
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl StencilRule for LeonardUpwind {
    fn footprint(&self) -> Footprint {
        Footprint::new(2, 2)
    }

    #[inline]
    fn apply(&self, input: &[f64], i: usize) -> f64 {
        let u = input[i];
        let f = |j: usize| burgers_flux(input[j]);
        if u > 0.0 {
            u - self.factor
                * (2.0 * f(i + 1) + 3.0 * f(i) - 6.0 * f(i - 1) + f(i - 2))
        } else {
            u - self.factor
                * (-f(i + 2) - 3.0 * f(i) + 6.0 * f(i + 1) - 2.0 * f(i - 1))
        }
    }
}
