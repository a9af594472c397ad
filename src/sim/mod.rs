mod components;
mod systems;
mod tic;

pub use components::InputCmd;
pub use systems::{TURN_SPEED, WALK_SPEED, player_movement};
pub use tic::{FrameClock, MAX_DT};
