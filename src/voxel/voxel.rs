//! Voxel data type

/// RGBA draw color. Channels are nominally in [0, 1] but stored verbatim.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// All channels zero
    pub const ZERO: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Channels in `r, g, b, a` order
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Single grid cell: a color plus an activation flag
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Voxel {
    /// Color written by the last activation
    pub color: Color,
    /// Whether the cell is part of the sculpture
    pub is_on: bool,
}

impl Voxel {
    /// Inactive, zero-colored cell
    pub const EMPTY: Voxel = Voxel {
        color: Color::ZERO,
        is_on: false,
    };

    /// Create an active voxel with the given color
    pub fn new(color: Color) -> Self {
        Self { color, is_on: true }
    }
}
