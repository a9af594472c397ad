//! Render one frame of the built-in map without a window and save it as PNG.
//!
//! ```bash
//! cargo run --bin snapshot -- --out frame.png --x 0 --y 0 --yaw 90
//! ```

use clap::Parser;
use glam::vec2;
use std::path::PathBuf;

use raycast_rs::{
    renderer::{FrameBuffer, Raycaster, RenderConfig},
    world::{Camera, Scene},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Output PNG path
    #[arg(long, value_name = "FILE", default_value = "frame.png")]
    out: PathBuf,

    #[arg(long, default_value_t = 200)]
    width: usize,

    #[arg(long, default_value_t = 150)]
    height: usize,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 45.0)]
    fov: f32,

    /// Camera x
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f32,

    /// Camera y
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f32,

    /// Camera heading in degrees (90 = +y)
    #[arg(long, default_value_t = 90.0, allow_negative_numbers = true)]
    yaw: f32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::parse();

    let cfg = RenderConfig {
        width: opts.width,
        height: opts.height,
        fov: opts.fov.to_radians(),
        ..RenderConfig::default()
    };
    let raycaster = Raycaster::new(cfg)?;
    let scene = Scene::demo()?;
    let camera = Camera::new(vec2(opts.x, opts.y), opts.yaw.to_radians());

    let size = raycaster.config();
    let mut fb = FrameBuffer::new(size.width, size.height);
    raycaster.render_scene(&mut fb, scene.walls(), camera.pos, camera.forward());

    let img = image::RgbImage::from_fn(fb.width() as u32, fb.height() as u32, |x, y| {
        let px = fb.get(x as usize, y as usize);
        image::Rgb([(px >> 16) as u8, (px >> 8) as u8, px as u8])
    });
    img.save(&opts.out)?;

    log::info!("wrote {}", opts.out.display());
    Ok(())
}
