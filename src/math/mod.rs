//! Integer geometry helpers

pub mod region;

pub use region::Region;
