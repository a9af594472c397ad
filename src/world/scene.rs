use std::sync::Arc;

use glam::vec2;

use crate::world::{
    geometry::{Wall, WallId},
    material::{Material, MaterialError},
    textures::{BRICK, BRICK_SIZE},
};

/// Things that make a wall list unusable for rendering.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SceneError {
    #[error(transparent)]
    Material(#[from] MaterialError),

    /// NaN / infinite endpoint, floor or height.
    #[error("wall {0} has non-finite geometry")]
    NonFinite(WallId),
}

/// Static wall list of one map.  Fixed for the session once built.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    walls: Vec<Wall>,
}

impl Scene {
    /// Validate and take ownership of `walls`.
    pub fn new(walls: Vec<Wall>) -> Result<Self, SceneError> {
        for (id, w) in walls.iter().enumerate() {
            let finite = w.p1.is_finite()
                && w.p2.is_finite()
                && w.floor_height.is_finite()
                && w.height.is_finite();
            if !finite {
                return Err(SceneError::NonFinite(id));
            }
        }
        log::debug!("scene built with {} walls", walls.len());
        Ok(Self { walls })
    }

    #[inline]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// The hand-authored test map: two brick walls meeting in a corner in
    /// front of the spawn point plus a taller pair further back.
    pub fn demo() -> Result<Self, SceneError> {
        let grey = Arc::new(Material::flat(0.5)?);
        let brick = Arc::new(Material::textured(BRICK, BRICK_SIZE)?);

        Self::new(vec![
            Wall::new(vec2(-5.0, 5.0), vec2(5.0, 5.0), 0.0, 2.0, brick.clone()),
            Wall::new(vec2(-5.0, 5.0), vec2(-5.0, -5.0), 0.0, 2.0, brick.clone()),
            Wall::new(vec2(-10.0, -10.0), vec2(-10.0, -12.0), 0.0, 5.0, grey),
            Wall::new(vec2(-10.0, -12.0), vec2(-12.0, -15.0), 0.0, 5.0, brick),
        ])
    }
}
