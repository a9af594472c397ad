use glam::Vec2;

/// Player view-point in map space.
///
/// * Only **yaw** is simulated; the eye height lives in
///   [`RenderConfig`](crate::renderer::RenderConfig).
/// * The renderer consumes `pos` and [`forward`](Self::forward) only.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub pos: Vec2,
    pub yaw: f32, // radians (0 = +x, counter-clockwise)
}

impl Default for Camera {
    /// Spawn point of the demo map: origin, looking down +y.
    fn default() -> Self {
        Self::new(Vec2::ZERO, std::f32::consts::FRAC_PI_2)
    }
}

impl Camera {
    pub fn new(pos: Vec2, yaw: f32) -> Self {
        Self { pos, yaw }
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit facing vector.
    #[inline(always)]
    pub fn forward(self) -> Vec2 {
        let (s, c) = self.yaw.sin_cos();
        Vec2::new(c, s)
    }

    /// Unit vector 90° counter-clockwise from `forward` (screen left).
    #[inline(always)]
    pub fn left(self) -> Vec2 {
        self.forward().perp()
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Move by `forward` units along the facing and `side` units to the
    /// right.
    pub fn step(&mut self, forward: f32, side: f32) {
        let f = self.forward();
        let l = self.left();
        self.pos += f * forward - l * side;
    }

    /// Rotate around the vertical axis (positive = turn left).
    pub fn turn(&mut self, delta_yaw: f32) {
        self.yaw = (self.yaw + delta_yaw).rem_euclid(std::f32::consts::TAU);
    }
}
