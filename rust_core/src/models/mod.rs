//! Domain models shared by every engine.

pub mod bucket;
pub mod flight;

pub use bucket::*;
pub use flight::*;
