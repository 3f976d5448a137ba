//! Spatial update rules.
//!
//! A rule computes one node of the next time level from the previous
//! level only. Coefficients such as `C * dt / h` are bound when the
//! rule is built, so `apply` is a pure function of the input buffer.

mod diffusion;
mod leonard;
mod upwind;

pub use diffusion::*;
pub use leonard::*;
pub use upwind::*;

/// How far a stencil reads to each side of the updated node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Footprint {
    pub left: usize,
    pub right: usize,
}

impl Footprint {
    pub fn new(left: usize, right: usize) -> Self {
        Footprint { left, right }
    }

    pub fn reach(&self) -> usize {
        self.left.max(self.right)
    }
}

pub trait StencilRule: Send + Sync + std::fmt::Debug {
    /// Widest read over every branch of the rule.
    fn footprint(&self) -> Footprint;

    /// New value at `i`, reading only `input`.
    fn apply(&self, input: &[f64], i: usize) -> f64;
}

/// Burgers flux `u^2 / 2`.
#[inline]
pub fn burgers_flux(u: f64) -> f64 {
    u * u / 2.0
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn footprint_reach() {
        assert_eq!(Footprint::new(2, 1).reach(), 2);
        assert_eq!(Footprint::new(0, 3).reach(), 3);
        assert_eq!(Footprint::default().reach(), 0);
    }

    #[test]
    fn flux() {
        assert_eq!(burgers_flux(2.0), 2.0);
        assert_eq!(burgers_flux(-2.0), 2.0);
        assert_eq!(burgers_flux(0.0), 0.0);
    }
}
