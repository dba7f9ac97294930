//! VECT point-cloud encoding
//!
//! Every active voxel becomes a one-point polyline with its own color:
//!
//! ```text
//! VECT
//! N N N
//! 1 1 ... (N times)
//! 1 1 ... (N times)
//! z x y   (N lines)
//! r g b a (N lines)
//! ```
//!
//! Fields are separated by single spaces with no trailing whitespace. The
//! sculptor this format was first written for left a space after every `1`
//! on the count lines; readers treat both forms the same.

use std::io::{self, Write};

use crate::voxel::grid::VoxelGrid;

/// Write the active voxels of `grid` as VECT. Does not optimize.
///
/// Returns the number of points written.
pub fn encode<W: Write>(grid: &VoxelGrid, mut out: W) -> io::Result<usize> {
    let n = grid.active_count();

    writeln!(out, "VECT")?;
    writeln!(out, "{} {} {}", n, n, n)?;

    // vertex counts per polyline, then color counts per polyline
    for _ in 0..2 {
        for i in 0..n {
            let token: &[u8] = if i == 0 { b"1" } else { b" 1" };
            out.write_all(token)?;
        }
        writeln!(out)?;
    }

    for (p, _) in grid.active_voxels() {
        writeln!(out, "{} {} {}", p.z, p.x, p.y)?;
    }
    for (_, voxel) in grid.active_voxels() {
        let c = voxel.color;
        writeln!(out, "{:.1} {:.1} {:.1} {:.1}", c.r, c.g, c.b, c.a)?;
    }
    Ok(n)
}
