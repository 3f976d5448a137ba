//! This module holds the field storage the engine marches,
//! and the boundary conditions that keep its edge and ghost nodes
//! up to date after every interior pass.

mod bc;
mod field;

pub use bc::*;
pub use field::*;
