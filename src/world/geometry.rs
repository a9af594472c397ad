use std::sync::Arc;

use glam::Vec2;

use crate::world::material::Material;

/// 2-D map-space vector.  Plain `glam` type; the helpers below cover the
/// few operations the ray maths needs that `glam` spells differently.
pub type Vector2 = Vec2;

pub type WallId = usize;

/*----------------------- vector helpers ----------------------------*/

/// `a + b * s`
#[inline(always)]
pub fn add_scaled(a: Vec2, b: Vec2, s: f32) -> Vec2 {
    a + b * s
}

/// Unit-length copy of `v`, or zero for a degenerate (zero / non-finite)
/// input instead of NaNs.
#[inline]
pub fn normalize_or_zero(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/*----------------------------- walls --------------------------------*/

/// One vertical wall standing on the segment `p1 → p2`.
///
/// Immutable once it is part of a [`Scene`](crate::world::Scene); the
/// material is shared with every other wall that uses it.
#[derive(Clone, Debug)]
pub struct Wall {
    pub p1: Vec2,
    pub p2: Vec2,
    /// Vertical offset of the wall base.  Stored, not yet used by shading.
    pub floor_height: f32,
    /// Extent above the floor in world units.
    pub height: f32,
    pub material: Arc<Material>,
}

impl Wall {
    pub fn new(p1: Vec2, p2: Vec2, floor_height: f32, height: f32, material: Arc<Material>) -> Self {
        Self {
            p1,
            p2,
            floor_height,
            height,
            material,
        }
    }

    /// Unit normal of the segment.  Orientation is arbitrary (callers take
    /// `abs()` of any dot product with it); zero for a zero-length wall.
    #[inline]
    pub fn normal(&self) -> Vec2 {
        normalize_or_zero(self.p1 - self.p2).perp()
    }
}
