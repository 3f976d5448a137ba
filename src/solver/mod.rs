mod engine;
mod registry;
mod simulation;

pub use engine::*;
pub use registry::*;
pub use simulation::*;
