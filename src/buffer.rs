use image::DynamicImage;
use image::ImageEncoder;
use image::imageops::FilterType;

use crate::color::Color;
use crate::error::{EditorError, EditorResult};

/// The width x height RGBA raster that every editing operation works on.
///
/// Pixels are stored as a flat row-major byte vector, four bytes per pixel,
/// so `pixels.len() == width * height * 4` at all times. The buffer is
/// exclusively owned by one editing session and mutated in place.
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    // Bumped on every mutation so the presentation layer can skip
    // re-uploading an unchanged texture.
    version: u64,
}

impl PixelBuffer {
    /// Create a white buffer. Dimensions must be non-zero; they are
    /// validated at the configuration boundary before reaching here.
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            pixels: vec![255; (width as usize) * (height as usize) * 4],
            version: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutation counter for texture-cache invalidation
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn byte_offset(&self, x: i32, y: i32) -> EditorResult<usize> {
        if !self.contains(x, y) {
            return Err(EditorError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize * self.width as usize + x as usize) * 4)
    }

    pub fn get(&self, x: i32, y: i32) -> EditorResult<Color> {
        let o = self.byte_offset(x, y)?;
        Ok(Color::new(
            self.pixels[o],
            self.pixels[o + 1],
            self.pixels[o + 2],
            self.pixels[o + 3],
        ))
    }

    pub fn set(&mut self, x: i32, y: i32, color: Color) -> EditorResult<()> {
        let o = self.byte_offset(x, y)?;
        self.write(o, color);
        self.version += 1;
        Ok(())
    }

    /// Like [`set`](Self::set) but silently clips out-of-buffer pixels.
    /// Brush stamps use this at the canvas edges.
    pub fn set_clipped(&mut self, x: i32, y: i32, color: Color) {
        if let Ok(o) = self.byte_offset(x, y) {
            self.write(o, color);
            self.version += 1;
        }
    }

    /// Read the pixel at a flat index (`y * width + x`). The index must
    /// be in range; the flood fill only produces in-range indices.
    pub(crate) fn color_at(&self, index: usize) -> Color {
        let o = index * 4;
        Color::new(
            self.pixels[o],
            self.pixels[o + 1],
            self.pixels[o + 2],
            self.pixels[o + 3],
        )
    }

    /// Paint the pixel at a flat index
    pub(crate) fn paint(&mut self, index: usize, color: Color) {
        self.write(index * 4, color);
        self.version += 1;
    }

    fn write(&mut self, offset: usize, color: Color) {
        self.pixels[offset] = color.r;
        self.pixels[offset + 1] = color.g;
        self.pixels[offset + 2] = color.b;
        self.pixels[offset + 3] = color.a;
    }

    /// Fill the whole buffer with one color
    pub fn clear(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = color.a;
        }
        self.version += 1;
    }

    /// Replace the buffer contents with a decoded background image: the
    /// source is scaled to fit while preserving its aspect ratio and
    /// centered over a white canvas. Decode happens upstream, so this
    /// never fails.
    pub fn load_background(&mut self, source: &DynamicImage) {
        let (sw, sh) = (source.width().max(1), source.height().max(1));
        let scale = (self.width as f32 / sw as f32).min(self.height as f32 / sh as f32);
        let tw = ((sw as f32 * scale) as u32).clamp(1, self.width);
        let th = ((sh as f32 * scale) as u32).clamp(1, self.height);
        let scaled = source.resize_exact(tw, th, FilterType::Triangle).to_rgba8();

        self.clear(Color::WHITE);
        let x0 = (self.width - tw) as usize / 2;
        let y0 = (self.height - th) as usize / 2;
        for (y, row) in scaled.rows().enumerate() {
            for (x, px) in row.enumerate() {
                let o = ((y0 + y) * self.width as usize + x0 + x) * 4;
                // Source-over blend so transparent line art keeps its
                // white paper background.
                let src = Color::new(px[0], px[1], px[2], px[3]);
                self.write(o, blend_over_white(src));
            }
        }
        self.version += 1;
    }

    /// Encode the buffer as a PNG
    pub fn export_png(&self) -> EditorResult<Vec<u8>> {
        let mut out = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut out);
        encoder.write_image(
            &self.pixels,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(out)
    }

    /// Copy out an egui image for texture upload
    pub fn as_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width as usize, self.height as usize],
            &self.pixels,
        )
    }
}

fn blend_over_white(src: Color) -> Color {
    let a = src.a as u32;
    let over = |c: u8| ((c as u32 * a + 255 * (255 - a) + 127) / 255) as u8;
    Color::opaque(over(src.r), over(src.g), over(src.b))
}
