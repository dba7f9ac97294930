//! OFF cube-mesh encoding
//!
//! Each active voxel is emitted as a unit cube: 8 vertices and 6 quads
//! colored with the voxel's RGBA.
//!
//! Vertex lines carry exactly three space-separated coordinates with no
//! trailing space; the sculptor this layout comes from wrote one after each
//! coordinate, which OFF readers ignore.

use std::io::{self, Write};

use glam::Vec3;

use crate::voxel::grid::VoxelGrid;

/// Cube corner offsets from the voxel anchor, in vertex order
pub const CORNER_OFFSETS: [Vec3; 8] = [
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
];

/// Quad faces as local corner indices
pub const FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [0, 4, 7, 3],
    [3, 7, 6, 2],
    [1, 2, 6, 5],
];

/// Mesh-space position of the cube for grid cell `(x, y, z)`: `(y, -x, -z)`
#[inline]
pub fn anchor(x: i32, y: i32, z: i32) -> Vec3 {
    Vec3::new(y as f32, -(x as f32), -(z as f32))
}

/// Write the active voxels of `grid` as an OFF cube mesh. Does not optimize.
///
/// Returns the number of cubes written.
pub fn encode<W: Write>(grid: &VoxelGrid, mut out: W) -> io::Result<usize> {
    let m = grid.active_count();

    writeln!(out, "OFF")?;
    writeln!(out, "{} {} 0", m * 8, m * 6)?;

    for (p, _) in grid.active_voxels() {
        let base = anchor(p.x, p.y, p.z);
        for offset in CORNER_OFFSETS {
            let v = base + offset;
            writeln!(out, "{:.1} {:.1} {:.1}", v.x, v.y, v.z)?;
        }
    }

    for (i, (_, voxel)) in grid.active_voxels().enumerate() {
        let first = i * 8;
        let c = voxel.color;
        for [a, b, cc, d] in FACES {
            writeln!(
                out,
                "4 {} {} {} {} {:.1} {:.1} {:.1} {:.1}",
                first + a,
                first + b,
                first + cc,
                first + d,
                c.r,
                c.g,
                c.b,
                c.a
            )?;
        }
    }
    Ok(m)
}
