// surface.rs - Abstract drawing surface

/// A solid fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fill color for alive cells.
pub const LIVE_FILL: Rgb = Rgb::new(128, 128, 128);
/// Fill color for dead cells.
pub const DEAD_FILL: Rgb = Rgb::new(0, 0, 0);

/// Canvas-like target the renderer paints onto. The caller supplies the
/// surface; the core only asks for the dimensions it needs and fills
/// axis-aligned rectangles, so any pixel buffer, GUI texture, or test
/// recorder qualifies.
pub trait DrawSurface {
    /// Size (or resize) the surface to the given pixel dimensions.
    /// Content need not be preserved; a full repaint follows.
    fn resize(&mut self, width_px: u32, height_px: u32);

    /// Fill the rectangle at (x, y) with the given pixel size and color.
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb);
}
