//! Voxel data structures and operations

pub mod voxel;
pub mod grid;
pub mod brush;
pub mod optimize;

pub use voxel::{Color, Voxel};
pub use grid::{GridDims, Placement, VoxelGrid};
pub use brush::{PaintMode, PaintReport, Shape};
pub use optimize::ActivationMask;
