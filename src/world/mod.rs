mod camera;
mod geometry;
mod material;
mod scene;
pub mod textures;

pub use camera::Camera;

pub use geometry::{Vector2, Wall, WallId, add_scaled, normalize_or_zero};

pub use material::{Material, MaterialError, Texture};

pub use scene::{Scene, SceneError};
