//! Shape painting on a voxel grid

use std::ops::AddAssign;

use crate::core::types::IVec3;
use crate::math::Region;
use crate::voxel::grid::{GridDims, Placement, VoxelGrid};
use super::shape::Shape;

/// How a shape is applied to the cells it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintMode {
    /// Activate with the current draw color
    #[default]
    Put,
    /// Deactivate, keeping stored colors
    Cut,
}

/// Tally of per-cell placements made by one paint operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaintReport {
    /// Cells that were updated
    pub applied: u64,
    /// Requested cells that fell outside the grid
    pub clipped: u64,
}

impl PaintReport {
    fn record(&mut self, placement: Placement) {
        match placement {
            Placement::Applied => self.applied += 1,
            Placement::Clipped => self.clipped += 1,
        }
    }
}

impl AddAssign for PaintReport {
    fn add_assign(&mut self, other: Self) {
        self.applied += other.applied;
        self.clipped += other.clipped;
    }
}

/// Cells a shape visits on a grid of the given size.
///
/// Free axes are restricted to the grid. Pinned ellipsoid axes keep their
/// center coordinate even when it lies outside, so those placements clip.
fn candidates(shape: &Shape, dims: GridDims) -> Region {
    let bounds = shape.bounds();
    let clipped = bounds.intersection(&dims.region());
    if dims.region().is_empty() {
        return clipped;
    }
    let pinned = shape.pinned_axes();
    let pick = |axis: usize, a: IVec3, b: IVec3| if pinned[axis] { a[axis] } else { b[axis] };
    Region::new(
        IVec3::new(
            pick(0, bounds.min, clipped.min),
            pick(1, bounds.min, clipped.min),
            pick(2, bounds.min, clipped.min),
        ),
        IVec3::new(
            pick(0, bounds.max, clipped.max),
            pick(1, bounds.max, clipped.max),
            pick(2, bounds.max, clipped.max),
        ),
    )
}

impl VoxelGrid {
    /// Apply a shape cell by cell. Each placement is bounds checked on its own.
    pub fn paint(&mut self, shape: &Shape, mode: PaintMode) -> PaintReport {
        let mut report = PaintReport::default();
        let visit = candidates(shape, self.dims());

        for p in visit.cells() {
            if !shape.contains(p) {
                continue;
            }
            let placement = match mode {
                PaintMode::Put => self.put_voxel(p.x, p.y, p.z),
                PaintMode::Cut => self.cut_voxel(p.x, p.y, p.z),
            };
            report.record(placement);
        }

        // The part of a box outside the grid is clipped wholesale.
        if let Shape::Box(region) = shape {
            report.clipped += region.volume() - visit.volume();
        }

        if report.clipped > 0 {
            log::debug!("{:?} {:?}: {} cells clipped", mode, shape, report.clipped);
        }
        report
    }

    /// Activate every cell in `[x0,x1]x[y0,y1]x[z0,z1]`. An inverted range is a no-op.
    pub fn put_box(&mut self, x0: i32, x1: i32, y0: i32, y1: i32, z0: i32, z1: i32) -> PaintReport {
        self.paint(&Shape::cuboid(x0, x1, y0, y1, z0, z1), PaintMode::Put)
    }

    /// Deactivate every cell in `[x0,x1]x[y0,y1]x[z0,z1]`. An inverted range is a no-op.
    pub fn cut_box(&mut self, x0: i32, x1: i32, y0: i32, y1: i32, z0: i32, z1: i32) -> PaintReport {
        self.paint(&Shape::cuboid(x0, x1, y0, y1, z0, z1), PaintMode::Cut)
    }

    pub fn put_sphere(&mut self, xc: i32, yc: i32, zc: i32, radius: i32) -> PaintReport {
        let center = IVec3::new(xc, yc, zc);
        self.paint(&Shape::Sphere { center, radius }, PaintMode::Put)
    }

    pub fn cut_sphere(&mut self, xc: i32, yc: i32, zc: i32, radius: i32) -> PaintReport {
        let center = IVec3::new(xc, yc, zc);
        self.paint(&Shape::Sphere { center, radius }, PaintMode::Cut)
    }

    /// Activate an axis-aligned ellipsoid; zero radii pin their axis to the center
    pub fn put_ellipsoid(&mut self, xc: i32, yc: i32, zc: i32, rx: i32, ry: i32, rz: i32) -> PaintReport {
        let shape = Shape::Ellipsoid {
            center: IVec3::new(xc, yc, zc),
            radii: IVec3::new(rx, ry, rz),
        };
        self.paint(&shape, PaintMode::Put)
    }

    /// Deactivate an axis-aligned ellipsoid; zero radii pin their axis to the center
    pub fn cut_ellipsoid(&mut self, xc: i32, yc: i32, zc: i32, rx: i32, ry: i32, rz: i32) -> PaintReport {
        let shape = Shape::Ellipsoid {
            center: IVec3::new(xc, yc, zc),
            radii: IVec3::new(rx, ry, rz),
        };
        self.paint(&shape, PaintMode::Cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::voxel::Color;

    fn grid(n: i32) -> VoxelGrid {
        let mut grid = VoxelGrid::new(n, n, n).unwrap();
        grid.set_color(1.0, 0.0, 0.0, 1.0);
        grid
    }

    #[test]
    fn test_put_box_is_inclusive() {
        let mut grid = grid(5);
        let report = grid.put_box(1, 2, 0, 2, 3, 3);
        assert_eq!(report, PaintReport { applied: 6, clipped: 0 });
        assert_eq!(grid.active_count(), 6);
        assert!(grid.voxel(2, 2, 3).unwrap().is_on);
        assert!(!grid.voxel(3, 2, 3).unwrap().is_on);
    }

    #[test]
    fn test_inverted_box_is_noop() {
        let mut grid = grid(4);
        for (x0, x1, y0, y1, z0, z1) in [(2, 1, 0, 3, 0, 3), (0, 3, 3, 0, 0, 3), (0, 3, 0, 3, 1, 0)] {
            let report = grid.put_box(x0, x1, y0, y1, z0, z1);
            assert_eq!(report, PaintReport::default());
        }
        assert_eq!(grid.active_count(), 0);
    }

    #[test]
    fn test_box_clips_per_cell() {
        let mut grid = grid(3);
        let report = grid.put_box(-1, 1, 0, 0, 0, 0);
        assert_eq!(report, PaintReport { applied: 2, clipped: 1 });

        let report = grid.put_box(-1_000_000, 1_000_000, 0, 2, 0, 2);
        assert_eq!(report.applied, 27);
        assert_eq!(report.clipped, 2_000_001 * 9 - 27);
    }

    #[test]
    fn test_cut_box_keeps_colors() {
        let mut grid = grid(3);
        grid.put_box(0, 2, 0, 2, 0, 2);
        let report = grid.cut_box(0, 0, 0, 2, 0, 2);
        assert_eq!(report.applied, 9);
        assert_eq!(grid.active_count(), 18);
        assert_eq!(grid.voxel(0, 1, 1).unwrap().color, Color::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_zero_radius_sphere_is_single_cell() {
        let mut grid = grid(5);
        let report = grid.put_sphere(2, 3, 1, 0);
        assert_eq!(report.applied, 1);
        assert_eq!(grid.active_count(), 1);
        assert!(grid.voxel(2, 3, 1).unwrap().is_on);
    }

    #[test]
    fn test_sphere_cell_count() {
        let mut grid = grid(5);
        grid.put_sphere(2, 2, 2, 1);
        assert_eq!(grid.active_count(), 7);

        let mut grid = self::grid(5);
        grid.put_sphere(2, 2, 2, 2);
        assert_eq!(grid.active_count(), 33);
    }

    #[test]
    fn test_sphere_outside_center_paints_overlap() {
        let mut grid = grid(4);
        let report = grid.put_sphere(-1, 0, 0, 1);
        assert_eq!(report, PaintReport { applied: 1, clipped: 0 });
        assert!(grid.voxel(0, 0, 0).unwrap().is_on);
    }

    #[test]
    fn test_cut_sphere() {
        let mut grid = grid(5);
        grid.put_box(0, 4, 0, 4, 0, 4);
        grid.cut_sphere(2, 2, 2, 1);
        assert_eq!(grid.active_count(), 125 - 7);
        assert!(!grid.voxel(2, 2, 3).unwrap().is_on);
    }

    #[test]
    fn test_ellipsoid_general() {
        let mut grid = grid(7);
        grid.put_ellipsoid(3, 3, 3, 3, 1, 1);
        assert!(grid.voxel(0, 3, 3).unwrap().is_on);
        assert!(grid.voxel(6, 3, 3).unwrap().is_on);
        assert!(!grid.voxel(3, 5, 3).unwrap().is_on);
        // x extent 7 on the axis line, plus the y/z neighbours of the center column
        assert_eq!(grid.active_count(), 7 + 4);
    }

    #[test]
    fn test_ellipsoid_one_zero_radius_is_plane_ellipse() {
        let mut grid = grid(5);
        grid.put_ellipsoid(2, 2, 2, 0, 1, 1);
        assert_eq!(grid.active_count(), 5);
        assert!(grid.active_voxels().all(|(p, _)| p.x == 2));

        let mut grid = self::grid(5);
        grid.put_ellipsoid(2, 2, 2, 1, 0, 1);
        assert_eq!(grid.active_count(), 5);
        assert!(grid.active_voxels().all(|(p, _)| p.y == 2));

        let mut grid = self::grid(5);
        grid.put_ellipsoid(2, 2, 2, 1, 1, 0);
        assert_eq!(grid.active_count(), 5);
        assert!(grid.active_voxels().all(|(p, _)| p.z == 2));
    }

    #[test]
    fn test_ellipsoid_two_zero_radii_is_segment() {
        let mut grid = grid(5);
        grid.put_ellipsoid(2, 2, 2, 0, 0, 2);
        assert_eq!(grid.active_count(), 5);
        assert!(grid.active_voxels().all(|(p, _)| p.x == 2 && p.y == 2));
    }

    #[test]
    fn test_ellipsoid_all_zero_radii_is_center() {
        let mut grid = grid(5);
        let report = grid.put_ellipsoid(1, 2, 3, 0, 0, 0);
        assert_eq!(report.applied, 1);
        assert!(grid.voxel(1, 2, 3).unwrap().is_on);
    }

    #[test]
    fn test_ellipsoid_pinned_outside_grid_clips() {
        let mut grid = grid(5);
        let report = grid.put_ellipsoid(9, 2, 2, 0, 1, 1);
        assert_eq!(report, PaintReport { applied: 0, clipped: 5 });
        assert_eq!(grid.active_count(), 0);
    }

    #[test]
    fn test_cut_ellipsoid() {
        let mut grid = grid(5);
        grid.put_box(0, 4, 0, 4, 0, 4);
        let report = grid.cut_ellipsoid(2, 2, 2, 1, 1, 0);
        assert_eq!(report.applied, 5);
        assert_eq!(grid.active_count(), 120);
    }

    #[test]
    fn test_empty_grid_ignores_shapes() {
        let mut grid = VoxelGrid::new(0, 4, 4).unwrap();
        assert_eq!(grid.put_sphere(0, 0, 0, 3), PaintReport::default());
        assert_eq!(grid.put_ellipsoid(0, 0, 0, 0, 1, 1), PaintReport::default());
        assert_eq!(grid.put_box(0, 1, 0, 1, 0, 1), PaintReport { applied: 0, clipped: 8 });
    }
}
