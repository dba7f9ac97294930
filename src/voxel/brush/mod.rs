//! Shape brushes for sculpting a voxel grid
//!
//! Each primitive walks a candidate set of cells, tests membership and
//! activates or deactivates the cell through the grid's bounds-checked
//! single-cell operations.

pub mod shape;
pub mod painter;

// Re-exports
pub use shape::Shape;
pub use painter::{PaintMode, PaintReport};
