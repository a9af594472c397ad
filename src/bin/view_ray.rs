//! Interactive viewer for the built-in map.
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- [--scale 4] [--fov 45]
//! ```
//!
//! W/Z/↑ forward, S/↓ back, A/Q and D strafe, K/← and M/→ turn,
//! Shift runs, Esc quits.

use clap::Parser;
use minifb::{Key, Scale, Window, WindowOptions};
use std::time::{Duration, Instant};

use raycast_rs::{
    renderer::{RenderConfig, RendererExt, Software},
    sim::{FrameClock, InputCmd, player_movement},
    world::{Camera, Scene},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Framebuffer width in pixels (one ray per column)
    #[arg(long, default_value_t = 200)]
    width: usize,

    /// Framebuffer height in pixels
    #[arg(long, default_value_t = 150)]
    height: usize,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 45.0)]
    fov: f32,

    /// Window up-scaling factor: 1, 2, 4, 8, 16 or 32
    #[arg(long, default_value_t = 4)]
    scale: u32,

    /// Frame-rate cap
    #[arg(long, default_value_t = 60)]
    fps: usize,
}

fn window_scale(factor: u32) -> anyhow::Result<Scale> {
    Ok(match factor {
        1 => Scale::X1,
        2 => Scale::X2,
        4 => Scale::X4,
        8 => Scale::X8,
        16 => Scale::X16,
        32 => Scale::X32,
        other => anyhow::bail!("unsupported scale factor {other}"),
    })
}

fn read_input(win: &Window) -> InputCmd {
    let down = |keys: &[Key]| keys.iter().any(|&k| win.is_key_down(k));
    InputCmd::from_keys(
        down(&[Key::W, Key::Z, Key::Up]),
        down(&[Key::S, Key::Down]),
        down(&[Key::A, Key::Q]),
        down(&[Key::D]),
        down(&[Key::K, Key::Left]),
        down(&[Key::M, Key::Right]),
        down(&[Key::LeftShift, Key::RightShift]),
        down(&[Key::Escape]),
    )
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
    let mut renderer = Software::new(cfg)?;
    let scene = Scene::demo()?;
    let mut camera = Camera::default();

    let mut win = Window::new(
        "Raycaster",
        cfg.width,
        cfg.height,
        WindowOptions {
            scale: window_scale(opts.scale)?,
            ..WindowOptions::default()
        },
    )?;
    win.set_target_fps(opts.fps);

    log::info!("scene: {} walls, {}x{}", scene.len(), cfg.width, cfg.height);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    let mut clock = FrameClock::new();

    while win.is_open() {
        let dt = clock.tick();

        let cmd = read_input(&win);
        if cmd.quit {
            break;
        }
        player_movement(&mut camera, &cmd, dt);

        let t0 = Instant::now();
        let mut present = Ok(());
        renderer.draw_frame(&scene, &camera, |fb, w, h| {
            acc_time += t0.elapsed();
            acc_frames += 1;
            present = win.update_with_buffer(fb, w, h);
        });
        present?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            log::info!("avg render: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            log::debug!("camera at {:?} yaw {:.2}", camera.pos, camera.yaw);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
