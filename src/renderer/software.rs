//! ---------------------------------------------------------------------------
//! Software (CPU) raycasting column renderer
//!
//! * Fills a [`FrameBuffer`] in **0x00RRGGBB** format.
//! * One ray per screen column; every wall the ray crosses is collected
//!   into a distance-sorted stack.
//! * Walls are painted far-to-near over the background, so no Z-buffer is
//!   needed.
//!
//! Column resolution only reads the wall list and runs on the `rayon` pool.
//! Painting is a serial pass over the resolved columns.
//! ---------------------------------------------------------------------------

pub mod column;
pub mod intersect;
pub mod shade;

use glam::Vec2;
use rayon::prelude::*;

use crate::{
    renderer::{ConfigError, FrameBuffer, RenderConfig, Renderer, Rgba},
    world::{Camera, Scene, Wall},
};

use self::column::{ColumnRay, ResolvedColumn, resolve_column};

/*───────────────────────────────────────────────────────────────────────*/
/*                              Core                                     */
/*───────────────────────────────────────────────────────────────────────*/

/// Stateless "render scene" entry point.
#[derive(Clone, Debug)]
pub struct Raycaster {
    cfg: RenderConfig,
    view_shift: f32,
}

impl Raycaster {
    pub fn new(cfg: RenderConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        log::debug!(
            "raycaster {}x{} fov {:.1}°",
            cfg.width,
            cfg.height,
            cfg.fov.to_degrees()
        );
        Ok(Self {
            view_shift: cfg.view_shift(),
            cfg,
        })
    }

    #[inline]
    pub fn config(&self) -> &RenderConfig {
        &self.cfg
    }

    /// Background gradient only.
    pub fn clear(&self, fb: &mut FrameBuffer) {
        shade::clear(fb);
    }

    /// Clear `fb` and draw `walls` as seen from `pos` looking along
    /// `facing`.
    pub fn render_scene(&self, fb: &mut FrameBuffer, walls: &[Wall], pos: Vec2, facing: Vec2) {
        self.clear(fb);
        self.draw_walls(fb, walls, pos, facing);
    }

    /// Paint `walls` over whatever `fb` already holds.
    pub fn draw_walls(&self, fb: &mut FrameBuffer, walls: &[Wall], pos: Vec2, facing: Vec2) {
        let facing = facing.normalize_or_zero();
        if facing == Vec2::ZERO {
            log::warn!("degenerate facing vector, skipping walls");
            return;
        }
        if walls.is_empty() {
            return;
        }

        let columns = self.resolve_columns(fb.width(), walls, pos, facing);

        for (x, col) in columns.iter().enumerate() {
            let dir = col.ray.unit_dir();
            for hit in col.stack.back_to_front() {
                let dist = col.ray.perpendicular(hit.dist);
                shade::draw_wall(fb, &self.cfg, x, &walls[hit.id], dist, dir, pos);
            }
        }
    }

    /// Cast one ray per column and collect its sorted wall hits.
    pub fn resolve_columns(
        &self,
        width: usize,
        walls: &[Wall],
        pos: Vec2,
        facing: Vec2,
    ) -> Vec<ResolvedColumn> {
        let left = facing.perp();
        (0..width)
            .into_par_iter()
            .map(|x| {
                let ray = ColumnRay::new(x, width, facing, left, self.view_shift);
                resolve_column(pos, ray, walls)
            })
            .collect()
    }
}

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                  */
/*───────────────────────────────────────────────────────────────────────*/

/// [`Raycaster`] plus the scratch buffer it renders into.
pub struct Software {
    raycaster: Raycaster,
    scratch: FrameBuffer,
}

impl Software {
    pub fn new(cfg: RenderConfig) -> Result<Self, ConfigError> {
        let raycaster = Raycaster::new(cfg)?;
        Ok(Self {
            scratch: FrameBuffer::new(cfg.width, cfg.height),
            raycaster,
        })
    }

    #[inline]
    pub fn raycaster(&self) -> &Raycaster {
        &self.raycaster
    }

    #[inline]
    pub fn frame(&self) -> &FrameBuffer {
        &self.scratch
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self) {
        self.raycaster.clear(&mut self.scratch);
    }

    fn draw_scene(&mut self, scene: &Scene, camera: &Camera) {
        self.raycaster
            .draw_walls(&mut self.scratch, scene.walls(), camera.pos, camera.forward());
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(
            self.scratch.pixels(),
            self.scratch.width(),
            self.scratch.height(),
        );
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
