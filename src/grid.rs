use crate::error::*;

/// Largest buffer, ghosts included.
pub const MAX_LEN: usize = u32::MAX as usize;

/// Uniform 1D grid with `margin` ghost nodes on each side.
///
/// Coordinates run from `-margin * h` to `(nodes - 1 + margin) * h`,
/// so buffer index `margin` is `x = 0` and index `margin + nodes - 1`
/// is `x = extent`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    h: f64,
    nodes: usize,
    margin: usize,
    coords: Vec<f64>,
}

impl Grid {
    pub fn new(extent: f64, nodes: usize, margin: usize) -> Result<Self> {
        if nodes < 2 {
            return Err(Error::config(format!(
                "at least 2 nodes are required, found {nodes}"
            )));
        }
        if !extent.is_finite() || extent <= 0.0 {
            return Err(Error::config(format!(
                "domain extent must be positive, found {extent}"
            )));
        }

        let len = margin
            .checked_mul(2)
            .and_then(|ghosts| nodes.checked_add(ghosts))
            .filter(|len| *len <= MAX_LEN)
            .ok_or_else(|| {
                Error::config(format!(
                    "{nodes} nodes with {margin} ghost nodes per side exceed \
                     the largest supported grid of {MAX_LEN} nodes"
                ))
            })?;

        // Same count as arange(-margin * h, extent + margin * h, h),
        // the half step absorbs rounding in extent / h
        let h = extent / (nodes - 1) as f64;
        let start = -(margin as f64) * h;
        let stop = extent + (margin as f64 + 0.5) * h;
        let count = ((stop - start) / h).ceil();
        if count != len as f64 {
            return Err(Error::InvariantViolation(format!(
                "grid holds {count} nodes, {len} were requested"
            )));
        }
        let coords: Vec<f64> =
            (0..len).map(|j| start + j as f64 * h).collect();

        tracing::info!("Computed h = {h}");
        Ok(Grid {
            h,
            nodes,
            margin,
            coords,
        })
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn margin(&self) -> usize {
        self.margin
    }

    /// Physical node count, ghosts excluded.
    pub fn interior_nodes(&self) -> usize {
        self.nodes
    }

    /// Buffer length, ghosts included.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Buffer index range of the physical nodes.
    pub fn physical_range(&self) -> std::ops::Range<usize> {
        self.margin..self.margin + self.nodes
    }

    pub fn physical_coords(&self) -> &[f64] {
        &self.coords[self.physical_range()]
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    #[test]
    fn no_margin() {
        let g = Grid::new(1.0, 11, 0).unwrap();
        assert_eq!(g.len(), 11);
        assert_approx_eq!(f64, g.h(), 0.1);
        assert_approx_eq!(f64, g.coords()[0], 0.0);
        assert_approx_eq!(f64, g.coords()[10], 1.0, ulps = 2);
        assert_eq!(g.physical_range(), 0..11);
    }

    #[test]
    fn ghost_margins() {
        let g = Grid::new(1.0, 11, 1).unwrap();
        assert_eq!(g.len(), 13);
        assert_approx_eq!(f64, g.coords()[0], -0.1);
        assert_approx_eq!(f64, g.coords()[1], 0.0);
        assert_approx_eq!(f64, g.coords()[12], 1.1, epsilon = 1e-12);
        assert_eq!(g.physical_coords().len(), 11);

        let g = Grid::new(2.0, 5, 2).unwrap();
        assert_eq!(g.len(), 9);
        assert_approx_eq!(f64, g.coords()[0], -1.0);
        assert_approx_eq!(f64, g.coords()[2], 0.0);
        assert_approx_eq!(f64, g.coords()[8], 3.0);
        assert_eq!(g.physical_range(), 2..7);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(Grid::new(1.0, 1, 0), Err(Error::Config(_))));
        assert!(matches!(Grid::new(1.0, 0, 2), Err(Error::Config(_))));
        assert!(matches!(Grid::new(0.0, 10, 0), Err(Error::Config(_))));
        assert!(matches!(Grid::new(f64::NAN, 10, 0), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_oversized_grids() {
        assert!(matches!(
            Grid::new(1.0, usize::MAX, 1),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Grid::new(1.0, usize::MAX, 0),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Grid::new(1.0, MAX_LEN - 1, 1),
            Err(Error::Config(_))
        ));
    }

    proptest! {
        #[test]
        fn interior_count_matches_request(
            nodes in 2usize..5000,
            extent in 1e-3f64..1e3,
            margin in 0usize..3,
        ) {
            let g = Grid::new(extent, nodes, margin).unwrap();
            prop_assert_eq!(g.interior_nodes(), nodes);
            prop_assert_eq!(g.len(), nodes + 2 * margin);
            prop_assert_eq!(g.physical_coords().len(), nodes);
        }
    }
}
