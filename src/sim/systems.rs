use super::InputCmd;
use crate::world::Camera;

/// Radians per second.
pub const TURN_SPEED: f32 = 1.5;
/// World units per second at walking pace; running doubles it.
pub const WALK_SPEED: f32 = 2.5;

/// Turn first, then move along the new facing.
pub fn player_movement(camera: &mut Camera, cmd: &InputCmd, dt: f32) {
    camera.turn(cmd.turn * TURN_SPEED * dt);

    let speed = WALK_SPEED * (1.0 + cmd.run as i32 as f32) * dt;
    camera.step(cmd.forward * speed, cmd.strafe * speed);
}
