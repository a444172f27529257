pub mod action;
pub use action::*;

pub mod game;
pub use game::*;

pub mod ledger;
pub use ledger::*;

pub mod player;
pub use player::*;

pub mod rules;
pub use rules::*;

pub mod stage;
pub use stage::*;
