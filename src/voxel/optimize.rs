//! Interior culling: keep only the visible shell of the active set

use crate::core::error::Error;
use crate::core::types::Result;
use super::grid::{GridDims, VoxelGrid};

/// Snapshot of every cell's activation flag, laid out like the grid buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivationMask {
    dims: GridDims,
    bits: Vec<bool>,
}

/// Face neighbour offsets (6-connectivity)
const FACE_NEIGHBORS: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

impl ActivationMask {
    /// Mask of the given size with every flag set to `on`.
    ///
    /// Fails with [`Error::Allocation`] instead of aborting when the flag
    /// buffer cannot be reserved.
    pub fn filled(dims: GridDims, on: bool) -> Result<Self> {
        let GridDims { nx, ny, nz } = dims;
        let len = dims.cell_count().ok_or(Error::Allocation { nx, ny, nz })?;
        let mut bits = Vec::new();
        bits.try_reserve_exact(len)
            .map_err(|_| Error::Allocation { nx, ny, nz })?;
        bits.resize(len, on);
        Ok(Self { dims, bits })
    }

    /// Capture the activation flags of a grid
    pub fn capture(grid: &VoxelGrid) -> Result<Self> {
        let mut mask = Self::filled(grid.dims(), false)?;
        for (bit, voxel) in mask.bits.iter_mut().zip(grid.voxels()) {
            *bit = voxel.is_on;
        }
        Ok(mask)
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Activation flag of a cell; false outside the grid
    pub fn get(&self, x: i32, y: i32, z: i32) -> bool {
        self.dims.contains(x, y, z) && self.bits[self.dims.index(x, y, z)]
    }

    pub fn count_on(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Next activation state after one culling sweep.
    ///
    /// A strictly interior cell is switched off when all six face neighbours
    /// are on in `self`. Shell cells are never touched, diagonals are never
    /// read, and cells culled by this sweep do not influence each other.
    pub fn cull_interior(&self) -> Result<ActivationMask> {
        let mut next = Self::filled(self.dims, false)?;
        next.bits.copy_from_slice(&self.bits);
        let GridDims { nx, ny, nz } = self.dims;

        for z in 1..nz - 1 {
            for x in 1..nx - 1 {
                for y in 1..ny - 1 {
                    let enclosed = FACE_NEIGHBORS
                        .iter()
                        .all(|&(dx, dy, dz)| self.get(x + dx, y + dy, z + dz));
                    if enclosed {
                        next.bits[self.dims.index(x, y, z)] = false;
                    }
                }
            }
        }
        Ok(next)
    }
}

impl VoxelGrid {
    /// Snapshot of the current activation flags
    pub fn activation_mask(&self) -> Result<ActivationMask> {
        ActivationMask::capture(self)
    }

    /// Overwrite activation flags from a mask of the same shape; colors are kept
    pub fn apply_activation(&mut self, mask: &ActivationMask) {
        debug_assert_eq!(mask.dims, self.dims());
        for (voxel, &on) in self.voxels_mut().iter_mut().zip(&mask.bits) {
            voxel.is_on = on;
        }
    }

    /// Deactivate every interior voxel in a single sweep.
    ///
    /// Returns the number of cells switched off. The grid is left unchanged
    /// if the snapshot buffers cannot be allocated.
    pub fn optimize(&mut self) -> Result<usize> {
        let before = self.activation_mask()?;
        let after = before.cull_interior()?;
        let culled = before.count_on() - after.count_on();
        self.apply_activation(&after);
        log::debug!("optimize: culled {} interior voxels, {} remain", culled, after.count_on());
        Ok(culled)
    }
}
