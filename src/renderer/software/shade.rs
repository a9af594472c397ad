//! Column shading: background clear, wall lighting, texel lookup and
//! intensity → pixel packing.

use glam::Vec2;

use crate::{
    renderer::{FrameBuffer, RenderConfig, Rgba},
    world::{Material, Wall, add_scaled},
};

/// Grayscale intensity → packed 0x00RRGGBB.  Clamped to `[0, 1]` first.
#[inline]
pub fn to_value(intensity: f32) -> Rgba {
    let c = (intensity.clamp(0.0, 1.0) * 255.0).round() as u32;
    (c << 16) | (c << 8) | c
}

/// Background intensity of row `y`: a dark-to-mid-grey ramp from the top.
#[inline]
pub fn background(y: usize, height: usize) -> f32 {
    let d = y as f32 / height as f32;
    if d > 0.0 { d * 0.5 * 0.9 + 0.1 } else { 0.0 }
}

/// Fill every row with its background value.  A pure function of the row,
/// so back-to-back clears are identical.
pub fn clear(fb: &mut FrameBuffer) {
    let h = fb.height();
    for y in 0..h {
        let px = to_value(background(y, h));
        fb.row_mut(y).fill(px);
    }
}

/// Screen rows `[start, end)` covered by a wall of `wall_height` at
/// perpendicular depth `dist`, both clamped into `[0, height]`.
///
/// Row 0 is the top of the screen, so `start` is the wall's top edge
/// (its upper world extent) and `end` the row below its base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(cfg: &RenderConfig, height: usize, wall_height: f32, dist: f32) -> Self {
        let h = height as f32;
        let above = cfg.view_height / dist;
        let below = (wall_height - cfg.view_height) / dist;
        let clamp = |v: f32| (v.floor() as i64).clamp(0, height as i64) as usize;
        Self {
            start: clamp((0.5 - below) * h),
            end: clamp((0.5 + above) * h),
        }
    }

    #[inline]
    pub fn rows(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// `fog * diffuse` for a wall seen along the unit direction `dir`.
///
/// Fog is a linear ramp with no lower bound; past `1 / fog_falloff` units
/// it goes negative and the wall renders black after the final clamp.
pub fn light(cfg: &RenderConfig, wall: &Wall, dist: f32, dir: Vec2) -> f32 {
    let fog = 1.0 - (dist - cfg.near) * cfg.fog_falloff;
    let diffuse = dir.dot(wall.normal()).abs() * cfg.diffuse_gain;
    fog * diffuse
}

/// Paint one wall into column `x`.
///
/// * `dist` is the fisheye-corrected depth.
/// * `dir` is the unit column direction, `org` the eye position.
pub fn draw_wall(
    fb: &mut FrameBuffer,
    cfg: &RenderConfig,
    x: usize,
    wall: &Wall,
    dist: f32,
    dir: Vec2,
    org: Vec2,
) {
    if dist < cfg.near {
        return;
    }
    let span = Span::new(cfg, fb.height(), wall.height, dist);
    if span.is_empty() {
        return;
    }
    let light = light(cfg, wall, dist, dir);

    match wall.material.as_ref() {
        Material::Flat { color } => {
            let px = to_value(light * color);
            for y in span.rows() {
                fb.put(x, y, px);
            }
        }
        Material::Textured(tex) => {
            let hit = add_scaled(org, dir, dist + cfg.near);
            let u = (hit - wall.p1).length();
            // v runs over the clamped rows, not the off-screen extent
            let dv = 1.0 / (span.end - span.start) as f32;
            for y in span.rows() {
                let v = (y - span.start) as f32 * dv;
                fb.put(x, y, to_value(tex.sample(u, v) * light));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::textures::{CHECKER, CHECKER_SIZE};
    use glam::vec2;
    use std::sync::Arc;

    fn wall_at(y: f32, material: Material) -> Wall {
        Wall::new(vec2(-5.0, y), vec2(5.0, y), 0.0, 2.0, Arc::new(material))
    }

    #[test]
    fn pixel_packing() {
        assert_eq!(to_value(0.0), 0x00_000000);
        assert_eq!(to_value(1.0), 0x00_FFFFFF);
        assert_eq!(to_value(2.0), 0x00_FFFFFF);
        assert_eq!(to_value(-0.3), 0x00_000000);
        assert_eq!(to_value(0.5), 0x00_808080); // 127.5 rounds up
    }

    #[test]
    fn background_ramp() {
        assert_eq!(background(0, 150), 0.0);
        assert!((background(75, 150) - 0.325).abs() < 1e-6);
        assert!(background(149, 150) > background(148, 150));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut a = FrameBuffer::new(16, 12);
        clear(&mut a);
        let first = a.clone();
        clear(&mut a);
        assert_eq!(a, first);
        assert_eq!(a.get(3, 6), to_value(background(6, 12)));
    }

    #[test]
    fn span_clamps_to_screen() {
        let cfg = RenderConfig::default();
        let near = Span::new(&cfg, 150, 2.0, 0.5);
        assert_eq!(near, Span { start: 0, end: 150 });
        let far = Span::new(&cfg, 150, 2.0, 6.4);
        assert_eq!(far.end, 112); // (0.5 + 0.25) * 150
        assert_eq!(far.start, 65); // (0.5 - 0.0625) * 150
    }

    #[test]
    fn fog_is_unclamped() {
        let cfg = RenderConfig::default();
        let w = wall_at(5.0, Material::flat(1.0).unwrap());
        let dir = vec2(0.0, 1.0);
        assert!((light(&cfg, &w, cfg.near, dir) - 1.2).abs() < 1e-6);
        assert!(light(&cfg, &w, 40.0, dir) < 0.0);
    }

    #[test]
    fn too_close_is_skipped() {
        let cfg = RenderConfig::default();
        let mut fb = FrameBuffer::new(4, 20);
        clear(&mut fb);
        let before = fb.clone();
        let w = wall_at(0.01, Material::flat(1.0).unwrap());
        draw_wall(&mut fb, &cfg, 1, &w, 0.01, vec2(0.0, 1.0), Vec2::ZERO);
        assert_eq!(fb, before);
    }

    #[test]
    fn flat_fill_is_uniform() {
        let cfg = RenderConfig::default();
        let mut fb = FrameBuffer::new(4, 150);
        clear(&mut fb);
        let w = wall_at(5.0, Material::flat(0.5).unwrap());
        draw_wall(&mut fb, &cfg, 2, &w, 5.0, vec2(0.0, 1.0), Vec2::ZERO);

        let span = Span::new(&cfg, 150, 2.0, 5.0);
        let want = to_value(light(&cfg, &w, 5.0, vec2(0.0, 1.0)) * 0.5);
        for y in 0..150 {
            let expect = if span.rows().contains(&y) {
                want
            } else {
                to_value(background(y, 150))
            };
            assert_eq!(fb.get(2, y), expect, "row {y}");
        }
        // other columns untouched
        assert_eq!(fb.get(1, 80), to_value(background(80, 150)));
    }

    #[test]
    fn textured_fill_samples_texels() {
        let cfg = RenderConfig::default();
        let mut fb = FrameBuffer::new(1, 150);
        let tex = Material::textured(CHECKER, CHECKER_SIZE).unwrap();
        let w = wall_at(5.0, tex);
        let dir = vec2(0.0, 1.0);
        draw_wall(&mut fb, &cfg, 0, &w, 5.0, dir, Vec2::ZERO);

        let l = light(&cfg, &w, 5.0, dir);
        let span = Span::new(&cfg, 150, 2.0, 5.0);
        let dark = to_value(0.0);
        let lit = to_value(l);
        let mut seen = [false; 2];
        for y in span.rows() {
            let px = fb.get(0, y);
            assert!(px == dark || px == lit, "row {y}: {px:#08x}");
            seen[(px == lit) as usize] = true;
        }
        // the 2x2 checker flips half-way down the span
        assert!(seen[0] && seen[1]);
    }

    fn checker_column(org: Vec2) -> Vec<Rgba> {
        let cfg = RenderConfig::default();
        let mut fb = FrameBuffer::new(1, 150);
        let w = wall_at(5.0, Material::textured(CHECKER, CHECKER_SIZE).unwrap());
        draw_wall(&mut fb, &cfg, 0, &w, 5.0, vec2(0.0, 1.0), org);
        (0..150).map(|y| fb.get(0, y)).collect()
    }

    #[test]
    fn texture_u_repeats_every_world_unit() {
        let base = checker_column(Vec2::ZERO);
        // sliding the eye along the wall by whole units lands on the same texel
        assert_eq!(checker_column(vec2(1.0, 0.0)), base);
        assert_eq!(checker_column(vec2(-2.0, 0.0)), base);
        // half a unit crosses into the other checker column
        assert_ne!(checker_column(vec2(0.5, 0.0)), base);
    }

    #[test]
    fn texture_v_follows_clamped_span() {
        let cfg = RenderConfig::default();
        let mut fb = FrameBuffer::new(1, 150);
        let w = wall_at(0.5, Material::textured(CHECKER, CHECKER_SIZE).unwrap());
        let dir = vec2(0.0, 1.0);
        assert_eq!(Span::new(&cfg, 150, 2.0, 0.5), Span { start: 0, end: 150 });
        draw_wall(&mut fb, &cfg, 0, &w, 0.5, dir, Vec2::ZERO);

        // u lands in texel column 0: texel row 0 is dark, row 1 lit
        let dark = to_value(0.0);
        let lit = to_value(light(&cfg, &w, 0.5, dir));
        assert_ne!(dark, lit);
        for y in 0..75 {
            assert_eq!(fb.get(0, y), dark, "row {y}");
        }
        for y in 75..150 {
            assert_eq!(fb.get(0, y), lit, "row {y}");
        }
    }
}
