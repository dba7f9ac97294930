use crate::core::types::IVec3;
use crate::math::Region;

/// Primitive shapes with integer-lattice membership tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Closed cuboid, inclusive on every bound
    Box(Region),
    /// Cells with squared distance to `center` at most `radius²`
    Sphere { center: IVec3, radius: i32 },
    /// Axis-aligned ellipsoid. A zero radius pins that axis to the center.
    Ellipsoid { center: IVec3, radii: IVec3 },
}

/// Offset of `p` from `c` on one axis, widened so extreme coordinates cannot overflow
#[inline]
fn delta(p: i32, c: i32) -> f64 {
    (p as i64 - c as i64) as f64
}

impl Shape {
    /// Box from inclusive per-axis bounds, `[x0,x1]x[y0,y1]x[z0,z1]`
    pub fn cuboid(x0: i32, x1: i32, y0: i32, y1: i32, z0: i32, z1: i32) -> Self {
        Shape::Box(Region::new(IVec3::new(x0, y0, z0), IVec3::new(x1, y1, z1)))
    }

    /// Check if a cell belongs to the shape
    pub fn contains(&self, p: IVec3) -> bool {
        match self {
            Shape::Box(region) => region.contains(p),
            Shape::Sphere { center, radius } => {
                let dx = delta(p.x, center.x);
                let dy = delta(p.y, center.y);
                let dz = delta(p.z, center.z);
                let r = *radius as f64;
                dx * dx + dy * dy + dz * dz <= r * r
            }
            Shape::Ellipsoid { center, radii } => {
                let mut sum = 0.0;
                for axis in 0..3 {
                    let d = delta(p[axis], center[axis]);
                    let r = radii[axis];
                    if r == 0 {
                        // pinned axis
                        if d != 0.0 {
                            return false;
                        }
                    } else {
                        let r = r as f64;
                        sum += (d * d) / (r * r);
                    }
                }
                sum <= 1.0
            }
        }
    }

    /// Smallest region holding every member cell
    pub fn bounds(&self) -> Region {
        match self {
            Shape::Box(region) => *region,
            Shape::Sphere { center, radius } => {
                Region::from_center_half_extent(*center, IVec3::splat(*radius))
            }
            Shape::Ellipsoid { center, radii } => Region::from_center_half_extent(*center, *radii),
        }
    }

    /// Axes pinned to a single coordinate (ellipsoid zero radii)
    pub fn pinned_axes(&self) -> [bool; 3] {
        match self {
            Shape::Ellipsoid { radii, .. } => [radii.x == 0, radii.y == 0, radii.z == 0],
            _ => [false; 3],
        }
    }
}
