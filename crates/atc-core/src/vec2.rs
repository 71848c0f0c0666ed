//! Screen-space position type.
//!
//! `Vec2` uses `f32` components.  Positions live in the presentation layer's
//! pixel space (the original scene is 900×600) but the core only ever does
//! arithmetic on them; it never assumes a particular canvas size.

/// A 2-D position stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal distance to `other`, ignoring altitude.
    ///
    /// This is the quantity the collision rule compares against the safety
    /// threshold: two grounded actors conflict on lateral overlap alone.
    #[inline]
    pub fn lateral_separation(self, other: Vec2) -> f32 {
        (self.x - other.x).abs()
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
