use crate::domain::bc::BoundaryCondition;

/// Wraps a one node ghost layer for three point stencils.
///
/// Buffer index 1 is `x = 0` and `n - 2` is `x = L`, the same point
/// on a periodic domain.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PeriodicSingleGhost;

impl BoundaryCondition for PeriodicSingleGhost {
    fn halo(&self) -> usize {
        1
    }

    fn ghosts(&self) -> usize {
        1
    }

    fn min_len(&self) -> usize {
        4
    }

    fn apply(&self, next: &mut [f64]) {
        let n = next.len();
        debug_assert!(n >= self.min_len());
        next[0] = next[n - 3];
        next[1] = next[n - 2];
        next[n - 1] = next[2];
    }
}

/// Wraps a two node ghost layer for five point stencils.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PeriodicDoubleGhost;

impl BoundaryCondition for PeriodicDoubleGhost {
    fn halo(&self) -> usize {
        2
    }

    fn ghosts(&self) -> usize {
        2
    }

    fn min_len(&self) -> usize {
        6
    }

    fn apply(&self, next: &mut [f64]) {
        let n = next.len();
        debug_assert!(n >= self.min_len());
        next[0] = next[n - 4];
        next[1] = next[n - 3];
        next[n - 2] = next[2];
        next[n - 1] = next[3];
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use proptest::prelude::*;

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn single_ghost_mapping() {
        let mut v = ramp(8);
        PeriodicSingleGhost.apply(&mut v);
        assert_eq!(v, vec![5.0, 6.0, 2.0, 3.0, 4.0, 5.0, 6.0, 2.0]);
        assert_eq!(PeriodicSingleGhost.ghosts(), 1);
    }

    #[test]
    fn double_ghost_mapping() {
        let mut v = ramp(9);
        PeriodicDoubleGhost.apply(&mut v);
        assert_eq!(v, vec![5.0, 6.0, 2.0, 3.0, 4.0, 5.0, 6.0, 2.0, 3.0]);
        assert_eq!(PeriodicDoubleGhost.ghosts(), 2);
    }

    proptest! {
        #[test]
        fn constant_interior_stays_constant(
            c in -100.0f64..100.0,
            interior in 4usize..200,
            junk in -1e3f64..1e3,
        ) {
            let mut v = vec![c; interior + 2];
            v[0] = junk;
            v[interior + 1] = junk;
            PeriodicSingleGhost.apply(&mut v);
            prop_assert!(v.iter().all(|x| *x == c));

            let mut v = vec![c; interior + 4];
            v[0] = junk;
            v[1] = junk;
            v[interior + 2] = junk;
            v[interior + 3] = junk;
            PeriodicDoubleGhost.apply(&mut v);
            prop_assert!(v.iter().all(|x| *x == c));
        }
    }
}
