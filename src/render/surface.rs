use crate::foundation::core::{Canvas, Color, Rgba8};
use crate::foundation::error::{GradientError, GradientResult};

/// A rectangular, addressable target that a renderer paints into.
///
/// Renderers only ever call [`Surface::put_color`] for coordinates inside
/// `0..width() x 0..height()`. Colors passed in are already clamped to `[0, 1]`.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Write one color at `(x, y)`.
    fn put_color(&mut self, x: u32, y: u32, color: Color);

    /// Fill every point with `color`.
    fn fill(&mut self, color: Color) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.put_color(x, y, color);
            }
        }
    }

    /// Dimensions as a [`Canvas`].
    fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Owned straight-alpha RGBA8 pixel buffer.
///
/// New buffers start fully transparent, which is also what unpainted points look like after a
/// render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        Self {
            width,
            height,
            data: vec![0u8; len],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        let px: [u8; 4] = self.data[idx..idx + 4].try_into().ok()?;
        Some(Rgba8::from_bytes(px))
    }

    /// Overwrite every pixel with `px`.
    pub fn clear(&mut self, px: Rgba8) {
        let bytes = px.to_bytes();
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&bytes);
        }
    }

    /// Convert into an [`image::RgbaImage`].
    pub fn into_image(self) -> GradientResult<image::RgbaImage> {
        let (w, h) = (self.width, self.height);
        image::RgbaImage::from_raw(w, h, self.data).ok_or_else(|| {
            GradientError::validation(format!("pixel buffer does not match {w}x{h} RGBA8"))
        })
    }

    /// Encode as PNG at `path`.
    pub fn save_png(&self, path: &std::path::Path) -> GradientResult<()> {
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| {
            GradientError::Other(
                anyhow::Error::new(e).context(format!("write png '{}'", path.display())),
            )
        })
    }
}

impl Surface for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn put_color(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.index(x, y);
        self.data[idx..idx + 4].copy_from_slice(&color.to_rgba8().to_bytes());
    }

    fn fill(&mut self, color: Color) {
        self.clear(color.to_rgba8());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
