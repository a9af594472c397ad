//! Minimal first-person raycasting renderer for maps made of line-segment
//! walls.
//!
//! * [`world`]: walls, materials, the demo map and the camera.
//! * [`renderer`]: per-column ray casting into a packed-RGB frame buffer.
//! * [`sim`]: keyboard intent and player movement for the host loop.

pub mod renderer;
pub mod sim;
pub mod world;
