pub mod build_info;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod grid;
pub mod image;
pub mod initial_conditions;
pub mod par_stencil;
pub mod reference;
pub mod solver;
pub mod stability;
pub mod stencil;

pub use error::{Error, Result};
