use std::f32::consts::{FRAC_PI_4, PI};

/// Fixed projection and lighting parameters for one renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    /// Number of screen columns (one ray each).
    pub width: usize,
    pub height: usize,
    /// Horizontal field of view in radians.
    pub fov: f32,
    /// Near clip plane distance; closer walls are skipped.
    pub near: f32,
    /// Eye height above the floor in world units.
    pub view_height: f32,
    /// Linear fog drop per world unit past the near plane.
    pub fog_falloff: f32,
    /// Gain applied to the |cos| diffuse term.
    pub diffuse_gain: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 150,
            fov: FRAC_PI_4,
            near: 0.03,
            view_height: 1.6,
            fog_falloff: 0.05,
            diffuse_gain: 1.2,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("framebuffer must be at least 2x1 pixels, got {0}x{1}")]
    Resolution(usize, usize),

    #[error("field of view {0} rad is outside (0, pi)")]
    Fov(f32),

    #[error("near plane must be positive and finite, got {0}")]
    Near(f32),
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 2 || self.height == 0 {
            return Err(ConfigError::Resolution(self.width, self.height));
        }
        if !(self.fov > 0.0 && self.fov < PI) {
            return Err(ConfigError::Fov(self.fov));
        }
        if !(self.near > 0.0 && self.near.is_finite()) {
            return Err(ConfigError::Near(self.near));
        }
        Ok(())
    }

    /// `tan(fov / 2)`: lateral ray offset of the outermost column at unit
    /// forward distance.
    #[inline]
    pub fn view_shift(&self) -> f32 {
        (self.fov * 0.5).tan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(RenderConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let base = RenderConfig::default();
        let narrow = RenderConfig { width: 1, ..base };
        assert_eq!(narrow.validate(), Err(ConfigError::Resolution(1, 150)));
        let flat = RenderConfig { fov: PI, ..base };
        assert_eq!(flat.validate(), Err(ConfigError::Fov(PI)));
        let near = RenderConfig { near: 0.0, ..base };
        assert_eq!(near.validate(), Err(ConfigError::Near(0.0)));
    }

    #[test]
    fn view_shift_at_90_deg() {
        let cfg = RenderConfig {
            fov: std::f32::consts::FRAC_PI_2,
            ..RenderConfig::default()
        };
        assert!((cfg.view_shift() - 1.0).abs() < 1e-6);
    }
}
