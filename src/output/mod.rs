// Output side effects: notice emission and report persistence

pub mod notices;
pub mod persist;

pub use notices::*;
pub use persist::*;
