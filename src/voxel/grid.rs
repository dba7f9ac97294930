//! Dense voxel grid with a current draw color

use std::fmt;

use crate::core::error::Error;
use crate::core::types::{IVec3, Result};
use crate::math::Region;
use super::voxel::{Color, Voxel};

/// Grid dimensions: rows (`nx`), columns (`ny`) and planes (`nz`).
///
/// Either all three are positive or all three are zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridDims {
    pub nx: i32,
    pub ny: i32,
    pub nz: i32,
}

impl GridDims {
    /// Degenerate 0x0x0 grid
    pub const EMPTY: GridDims = GridDims { nx: 0, ny: 0, nz: 0 };

    /// Dimensions as requested, collapsed to [`GridDims::EMPTY`] if any axis is non-positive
    pub fn new(nx: i32, ny: i32, nz: i32) -> Self {
        if nx <= 0 || ny <= 0 || nz <= 0 {
            Self::EMPTY
        } else {
            Self { nx, ny, nz }
        }
    }

    /// Check `0 <= x < nx && 0 <= y < ny && 0 <= z < nz`
    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && x < self.nx && y >= 0 && y < self.ny && z >= 0 && z < self.nz
    }

    /// Linear buffer index `(z*nx + x)*ny + y`. Caller guarantees the cell is in bounds.
    #[inline]
    pub fn index(&self, x: i32, y: i32, z: i32) -> usize {
        debug_assert!(self.contains(x, y, z));
        ((z as usize * self.nx as usize) + x as usize) * self.ny as usize + y as usize
    }

    /// Inverse of [`GridDims::index`]
    #[inline]
    pub fn coord(&self, index: usize) -> IVec3 {
        let ny = self.ny as usize;
        let row = index / ny;
        IVec3::new(
            (row % self.nx as usize) as i32,
            (index % ny) as i32,
            (row / self.nx as usize) as i32,
        )
    }

    /// Total number of cells, or None if it does not fit in `usize`
    pub fn cell_count(&self) -> Option<usize> {
        (self.nx as usize)
            .checked_mul(self.ny as usize)?
            .checked_mul(self.nz as usize)
    }

    /// Region covering every cell (empty for a degenerate grid)
    pub fn region(&self) -> Region {
        Region::new(IVec3::ZERO, IVec3::new(self.nx - 1, self.ny - 1, self.nz - 1))
    }
}

/// Outcome of a single-cell mutation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The cell was in bounds and has been updated
    Applied,
    /// The coordinate was outside the grid; nothing changed
    Clipped,
}

impl Placement {
    pub fn is_applied(self) -> bool {
        self == Placement::Applied
    }
}

/// Dense 3-D grid of voxels owning the current draw color.
///
/// Storage is a single contiguous buffer laid out plane-major, row-major,
/// column-minor. All access is coordinate based and bounds checked.
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    dims: GridDims,
    voxels: Vec<Voxel>,
    color: Color,
}

impl VoxelGrid {
    /// Allocate a grid of `nx * ny * nz` inactive voxels.
    ///
    /// A non-positive dimension collapses the grid to 0x0x0 (not an error).
    /// Fails with [`Error::Allocation`] if the buffer cannot be reserved.
    pub fn new(nx: i32, ny: i32, nz: i32) -> Result<Self> {
        let dims = GridDims::new(nx, ny, nz);
        if dims == GridDims::EMPTY {
            log::warn!("Grid dimensions {}x{}x{} are not all positive; using an empty grid", nx, ny, nz);
        }

        let len = dims.cell_count().ok_or(Error::Allocation { nx, ny, nz })?;
        let mut voxels = Vec::new();
        voxels
            .try_reserve_exact(len)
            .map_err(|_| Error::Allocation { nx, ny, nz })?;
        voxels.resize(len, Voxel::EMPTY);

        log::info!("Created {}x{}x{} voxel grid ({} cells)", dims.nx, dims.ny, dims.nz, len);

        Ok(Self {
            dims,
            voxels,
            color: Color::ZERO,
        })
    }

    /// Grid dimensions
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Check if the grid has no cells (degenerate dimensions)
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Set the draw color used by every subsequent activation. Not validated.
    pub fn set_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.color = Color::new(r, g, b, a);
    }

    /// Current draw color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Check if a coordinate addresses a cell of this grid
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        self.dims.contains(x, y, z)
    }

    /// Read a cell
    pub fn voxel(&self, x: i32, y: i32, z: i32) -> Option<Voxel> {
        if self.in_bounds(x, y, z) {
            Some(self.voxels[self.dims.index(x, y, z)])
        } else {
            None
        }
    }

    /// Activate a cell and paint it with the draw color
    pub fn put_voxel(&mut self, x: i32, y: i32, z: i32) -> Placement {
        if !self.in_bounds(x, y, z) {
            log::debug!("put_voxel: ({}, {}, {}) is outside the grid", x, y, z);
            return Placement::Clipped;
        }
        let index = self.dims.index(x, y, z);
        self.voxels[index] = Voxel::new(self.color);
        Placement::Applied
    }

    /// Deactivate a cell, keeping its stored color
    pub fn cut_voxel(&mut self, x: i32, y: i32, z: i32) -> Placement {
        if !self.in_bounds(x, y, z) {
            log::debug!("cut_voxel: ({}, {}, {}) is outside the grid", x, y, z);
            return Placement::Clipped;
        }
        let index = self.dims.index(x, y, z);
        self.voxels[index].is_on = false;
        Placement::Applied
    }

    /// Raw cell buffer in `(z, x, y)` scan order
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    pub(crate) fn voxels_mut(&mut self) -> &mut [Voxel] {
        &mut self.voxels
    }

    /// Number of active cells
    pub fn active_count(&self) -> usize {
        self.voxels.iter().filter(|v| v.is_on).count()
    }

    /// Active cells with their coordinates, in plane-major, row-major, column-minor order
    pub fn active_voxels(&self) -> impl Iterator<Item = (IVec3, Voxel)> + '_ {
        let dims = self.dims;
        self.voxels
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_on)
            .map(move |(i, v)| (dims.coord(i), *v))
    }
}

/// Plane-by-plane dump of the activation flags
impl fmt::Display for VoxelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let GridDims { nx, ny, nz } = self.dims;
        for z in 0..nz {
            writeln!(f, "Plane {}", z)?;
            for x in 0..nx {
                for y in 0..ny {
                    if y > 0 {
                        f.write_str(" ")?;
                    }
                    let on = self.voxels[self.dims.index(x, y, z)].is_on;
                    f.write_str(if on { "1" } else { "0" })?;
                }
                writeln!(f)?;
            }
            writeln!(f, "{}", "-".repeat(27))?;
        }
        Ok(())
    }
}
