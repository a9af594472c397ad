// Surface description shared by walls.  Materials are built once at scene
// setup and only ever read afterwards, so walls hold them behind `Arc`.

/// Square grayscale texel grid, row-major, intensities in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    size: usize,
    texels: Vec<f32>,
}

/// Things that can go wrong when building a material.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MaterialError {
    /// `size * size` does not match the number of texels supplied.
    #[error("texture declares {size}x{size} texels but {len} were supplied")]
    SizeMismatch { size: usize, len: usize },

    /// A texture needs at least one texel.
    #[error("texture size must be non-zero")]
    Empty,

    /// Intensity outside `[0, 1]` (NaN included).
    #[error("intensity {0} is outside [0, 1]")]
    OutOfRange(f32),
}

#[inline]
fn check_intensity(v: f32) -> Result<f32, MaterialError> {
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(MaterialError::OutOfRange(v))
    }
}

impl Texture {
    /// Wrap `texels` as a `size × size` grid.
    ///
    /// * Fails with `Empty` for `size == 0`.
    /// * Fails with `SizeMismatch` unless `texels.len() == size * size`.
    /// * Fails with `OutOfRange` on the first texel outside `[0, 1]`.
    pub fn new(texels: Vec<f32>, size: usize) -> Result<Self, MaterialError> {
        if size == 0 {
            return Err(MaterialError::Empty);
        }
        if size.checked_mul(size) != Some(texels.len()) {
            return Err(MaterialError::SizeMismatch {
                size,
                len: texels.len(),
            });
        }
        for &t in &texels {
            check_intensity(t)?;
        }
        Ok(Self { size, texels })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Nearest-neighbour lookup.  Only the fractional parts of `u` and `v`
    /// are used, so the texture repeats every 1.0 on both axes.
    pub fn sample(&self, u: f32, v: f32) -> f32 {
        let tx = Self::texel_coord(u, self.size);
        let ty = Self::texel_coord(v, self.size);
        self.texels[tx + ty * self.size]
    }

    #[inline]
    fn texel_coord(t: f32, size: usize) -> usize {
        let f = t - t.floor();
        // `f` can round up to exactly 1.0 for tiny negative inputs
        ((f * size as f32).floor() as usize).min(size - 1)
    }
}

/// How a wall column is coloured.
#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    /// Single intensity multiplier in `[0, 1]`.
    Flat { color: f32 },
    /// Tiled grayscale texture, one repeat per world unit horizontally.
    Textured(Texture),
}

impl Material {
    pub fn flat(color: f32) -> Result<Self, MaterialError> {
        Ok(Material::Flat {
            color: check_intensity(color)?,
        })
    }

    pub fn textured(texels: impl Into<Vec<f32>>, size: usize) -> Result<Self, MaterialError> {
        Ok(Material::Textured(Texture::new(texels.into(), size)?))
    }
}
