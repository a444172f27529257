pub mod bet;
pub use bet::*;

pub mod denomination;
pub use denomination::*;

pub mod distribution;
pub use distribution::*;

pub mod holding;
pub use holding::*;
