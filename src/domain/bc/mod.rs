mod dirichlet;
mod periodic;

pub use dirichlet::*;
pub use periodic::*;

/// Fixes edge or ghost values of a freshly computed time level.
pub trait BoundaryCondition: Send + Sync + std::fmt::Debug {
    /// Nodes on each side this condition writes.
    /// The interior pass covers everything else.
    fn halo(&self) -> usize;

    /// Ghost nodes per side the grid must carry. Zero when the
    /// condition pins physical edge nodes instead.
    fn ghosts(&self) -> usize;

    /// Smallest buffer this condition can be applied to.
    fn min_len(&self) -> usize {
        2 * self.halo() + 1
    }

    fn apply(&self, next: &mut [f64]);
}
