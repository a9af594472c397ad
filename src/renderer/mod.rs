//! Rendering abstraction layer.
//!
//! *The host never touches the ray maths.*  It owns a [`Camera`] and a
//! [`Scene`] and hands both to a type that implements [`Renderer`] once per
//! frame.
//!
//! * [`software::Raycaster`] is the stateless core: it writes one frame into
//!   a caller-supplied [`FrameBuffer`].
//! * [`software::Software`] wraps it with an internal scratch buffer so
//!   window back-ends only have to present a slice.
//! * A helper blanket-impl [`RendererExt`] adds `draw_frame` so call-sites
//!   stay short.

mod config;
mod framebuffer;
pub mod software;

pub use config::{ConfigError, RenderConfig};
pub use framebuffer::FrameBuffer;
pub use software::{Raycaster, Software};

use crate::world::{Camera, Scene};

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
pub trait Renderer {
    /// Clear the internal buffer to the background gradient.
    fn begin_frame(&mut self);

    /// Cast every column and paint the visible walls over the background.
    fn draw_scene(&mut self, scene: &Scene, camera: &Camera);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Window callers pass `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(&mut self, scene: &Scene, camera: &Camera, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame();
        self.draw_scene(scene, camera);
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}
