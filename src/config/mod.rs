//! Parameter files.
//!
//! Input files hold one `<value> ! <name>` pair per line.
//! They are read into a `ParameterTable`, then lifted into
//! the fixed `SchemeParameters` record the solver works from.

mod parameters;
mod table;

pub use parameters::*;
pub use table::*;
