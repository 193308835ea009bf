pub mod inspect;
pub mod plan;

pub use inspect::*;
pub use plan::*;
