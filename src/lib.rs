//! voxsculpt - a voxel sculpting engine
//!
//! A dense grid of colored on/off cells, box/sphere/ellipsoid brushes,
//! interior culling and VECT/OFF export.

pub mod core;
pub mod math;
pub mod voxel;
pub mod export;
pub mod script;

pub use crate::core::Error;
pub use export::ExportFormat;
pub use voxel::{Color, Voxel, VoxelGrid};
