pub mod change;
pub use change::*;

pub mod holder;
pub use holder::*;

pub mod knowledge;
pub use knowledge::*;

pub mod notebook;
pub use notebook::*;

pub mod report;
pub use report::*;

pub mod status;
pub use status::*;
