use std::time::{Duration, Instant};

/// Longest step handed to movement, so a stalled window does not teleport
/// the player.
pub const MAX_DT: Duration = Duration::from_millis(100);

/// Variable-rate frame clock.
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call, capped at [`MAX_DT`].
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).min(MAX_DT);
        self.last = now;
        dt.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_is_capped() {
        let mut clock = FrameClock {
            last: Instant::now() - Duration::from_secs(5),
        };
        assert!((clock.tick() - MAX_DT.as_secs_f32()).abs() < 1e-6);
        assert!(clock.tick() < MAX_DT.as_secs_f32());
    }
}
