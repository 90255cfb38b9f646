// surface.rs - DrawSurface backed by an offscreen egui image

use egui::{Color32, ColorImage};
use lifegame::{DrawSurface, Rgb};

/// Pixel buffer the engine paints into. The app uploads it as a texture
/// whenever a paint happened since the last frame; between generations
/// the buffer keeps the settled cells, so only flipped ones get written.
pub struct PixelSurface {
    image: ColorImage,
    dirty: bool,
}

impl Default for PixelSurface {
    fn default() -> Self {
        Self {
            image: ColorImage::new([0, 0], Color32::BLACK),
            dirty: false,
        }
    }
}

impl PixelSurface {
    pub fn image(&self) -> &ColorImage {
        &self.image
    }

    /// Width and height in pixels.
    pub fn size(&self) -> [usize; 2] {
        self.image.size
    }

    /// Clears and returns the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl DrawSurface for PixelSurface {
    fn resize(&mut self, width_px: u32, height_px: u32) {
        self.image = ColorImage::new([width_px as usize, height_px as usize], Color32::BLACK);
        self.dirty = true;
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb) {
        let fill = Color32::from_rgb(color.r, color.g, color.b);
        let [img_w, img_h] = self.image.size;
        let x_end = (x + width) as usize;
        let y_end = (y + height) as usize;
        for py in y as usize..y_end.min(img_h) {
            for px in x as usize..x_end.min(img_w) {
                self.image[(px, py)] = fill;
            }
        }
        self.dirty = true;
    }
}
