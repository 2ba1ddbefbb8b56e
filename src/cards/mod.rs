pub mod card;
pub use card::*;

pub mod catalog;
pub use catalog::*;

pub mod category;
pub use category::*;

pub mod hand;
pub use hand::*;

pub mod registry;
pub use registry::*;

pub mod suggestion;
pub use suggestion::*;
