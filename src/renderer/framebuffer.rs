use crate::renderer::Rgba;

/// Row-major `width × height` grid of packed 0x00RRGGBB pixels.
///
/// Row 0 is the top of the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * self.width + x]
    }

    #[inline]
    pub fn put(&mut self, x: usize, y: usize, px: Rgba) {
        self.pixels[y * self.width + x] = px;
    }

    /// Mutable view of one scan-line.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [Rgba] {
        let start = y * self.width;
        &mut self.pixels[start..start + self.width]
    }
}
