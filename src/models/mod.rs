pub mod gap;
pub mod item;

pub use gap::*;
pub use item::*;
