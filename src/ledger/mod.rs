pub mod ledger;
pub use ledger::*;

pub mod moves;
pub use moves::*;

pub mod transcript;
pub use transcript::*;
