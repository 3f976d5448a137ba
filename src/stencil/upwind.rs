use crate::stencil::*;

/// First order upwind update of the Burgers flux.
///
/// The local sign of `u` picks the one sided difference:
/// `(i, i-1)` when positive, `(i+1, i)` otherwise.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FirstOrderUpwind {
    factor: f64,
}

impl FirstOrderUpwind {
    /// `factor = C * dt / h / 2`
    pub fn new(speed: f64, dt: f64, h: f64) -> Self {
        FirstOrderUpwind {
            factor: speed * dt / h / 2.0,
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl StencilRule for FirstOrderUpwind {
    fn footprint(&self) -> Footprint {
        Footprint::new(1, 1)
    }

    #[inline]
    fn apply(&self, input: &[f64], i: usize) -> f64 {
        let u = input[i];
        if u > 0.0 {
            u - self.factor * (burgers_flux(u) - burgers_flux(input[i - 1]))
        } else {
            u - self.factor * (burgers_flux(input[i + 1]) - burgers_flux(u))
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn factor() {
        let s = FirstOrderUpwind::new(1.0, 0.05, 0.1);
        assert_approx_eq!(f64, s.factor(), 0.25);
    }

    #[test]
    fn picks_upwind_side() {
        let s = FirstOrderUpwind::new(2.0, 1.0, 1.0);
        assert_approx_eq!(f64, s.factor(), 1.0);

        // Positive, reads the left neighbour only
        let input = [0.0, 1.0, 100.0];
        assert_approx_eq!(f64, s.apply(&input, 1), 1.0 - 0.5);

        // Negative, reads the right neighbour only
        let input = [100.0, -1.0, 0.0];
        assert_approx_eq!(f64, s.apply(&input, 1), -1.0 - (0.0 - 0.5));

        // Zero takes the right hand branch
        let input = [5.0, 0.0, 1.0];
        assert_approx_eq!(f64, s.apply(&input, 1), -0.5);
    }

    #[test]
    fn constants_are_preserved() {
        let s = FirstOrderUpwind::new(1.0, 0.05, 0.1);
        for c in [-2.0, -0.1, 0.0, 0.3, 4.0] {
            let input = [c; 3];
            assert_eq!(s.apply(&input, 1), c);
        }
    }
}
