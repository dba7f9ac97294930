//! Inclusive integer cuboid of grid cells

use crate::core::types::IVec3;

/// Closed cuboid `[min, max]` of integer cell coordinates.
///
/// A region with `min > max` on any axis is empty; it is never swapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub min: IVec3,
    pub max: IVec3,
}

impl Region {
    /// Create region from inclusive min and max corners
    pub fn new(min: IVec3, max: IVec3) -> Self {
        Self { min, max }
    }

    /// Create region from a center and non-negative half-extents.
    /// Saturates instead of wrapping at the `i32` limits.
    pub fn from_center_half_extent(center: IVec3, half_extent: IVec3) -> Self {
        let half = IVec3::new(
            half_extent.x.saturating_abs(),
            half_extent.y.saturating_abs(),
            half_extent.z.saturating_abs(),
        );
        Self {
            min: center.saturating_sub(half),
            max: center.saturating_add(half),
        }
    }

    /// Check if the region contains no cells
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Number of cells on each axis (0 for an empty axis)
    pub fn extent(&self) -> [u64; 3] {
        let span = |lo: i32, hi: i32| {
            if lo > hi { 0 } else { (hi as i64 - lo as i64 + 1) as u64 }
        };
        [
            span(self.min.x, self.max.x),
            span(self.min.y, self.max.y),
            span(self.min.z, self.max.z),
        ]
    }

    /// Total number of cells
    pub fn volume(&self) -> u64 {
        let [ex, ey, ez] = self.extent();
        ex.saturating_mul(ey).saturating_mul(ez)
    }

    /// Check if a cell lies inside the region
    pub fn contains(&self, p: IVec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }

    /// Overlap of two regions (possibly empty)
    pub fn intersection(&self, other: &Region) -> Region {
        Region {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }

    /// Visit every cell in plane-major (z), row-major (x), column-minor (y) order
    pub fn cells(&self) -> impl Iterator<Item = IVec3> + use<> {
        let Region { min, max } = *self;
        let planes = if self.is_empty() { 1..=0 } else { min.z..=max.z };
        planes
            .flat_map(move |z| {
                (min.x..=max.x).flat_map(move |x| (min.y..=max.y).map(move |y| IVec3::new(x, y, z)))
            })
    }
}
