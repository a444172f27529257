pub mod moves;
pub use moves::*;

#[allow(clippy::module_inception)]
pub mod table;
pub use table::*;
